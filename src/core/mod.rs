pub mod calculator;

pub use crate::domain::model::{Discount, PricingRequest};
pub use crate::utils::error::Result;
