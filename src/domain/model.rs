use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};

/// Admissible patron age interval, closed on both ends.
pub const MIN_AGE: i32 = 3;
pub const MAX_AGE: i32 = 75;

/// Age-bracket discount bands: child up to 12, senior from 60.
pub const CHILD_AGE_MAX: i32 = 12;
pub const SENIOR_AGE_MIN: i32 = 60;

/// A single admission pricing request. Built per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRequest {
    pub is_weekend: bool,
    pub is_member: bool,
    pub is_group: bool,
    pub age: i32,
    pub is_before_7am: bool,
}

impl PricingRequest {
    pub fn new(
        is_weekend: bool,
        is_member: bool,
        is_group: bool,
        age: i32,
        is_before_7am: bool,
    ) -> Self {
        Self {
            is_weekend,
            is_member,
            is_group,
            age,
            is_before_7am,
        }
    }
}

impl Validate for PricingRequest {
    fn validate(&self) -> Result<()> {
        validate_range("age", self.age, MIN_AGE, MAX_AGE)
    }
}

/// Discount categories. At most one applies to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discount {
    Member,
    Group,
    AgeBracket,
    EarlyBird,
}

impl Discount {
    /// Factor applied to the base price for this category.
    pub fn multiplier(&self) -> f64 {
        match self {
            Discount::Member => 0.5,
            Discount::Group => 0.7,
            Discount::AgeBracket => 0.8,
            Discount::EarlyBird => 0.8,
        }
    }
}
