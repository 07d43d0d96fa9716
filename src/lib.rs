pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::calculator::{calculate_price, select_discount, REGULAR_PRICE, WEEKEND_PRICE};
pub use crate::domain::model::{
    Discount, PricingRequest, CHILD_AGE_MAX, MAX_AGE, MIN_AGE, SENIOR_AGE_MIN,
};
pub use crate::utils::error::{PricingError, Result};
