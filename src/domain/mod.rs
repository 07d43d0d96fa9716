// Domain layer: the pricing request model and discount categories.

pub mod model;
