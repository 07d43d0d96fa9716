use crate::domain::model::{Discount, PricingRequest, CHILD_AGE_MAX, SENIOR_AGE_MIN};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Base admission price on a regular day.
pub const REGULAR_PRICE: f64 = 200.0;
/// Base admission price on a weekend.
pub const WEEKEND_PRICE: f64 = 250.0;

/// Pick the discount for a request. First match wins: membership beats the
/// group rate, the group rate beats the child/senior bracket, and early-bird
/// applies only when nothing else does. Discounts never stack.
pub fn select_discount(request: &PricingRequest) -> Option<Discount> {
    if request.is_member {
        Some(Discount::Member)
    } else if request.is_group {
        Some(Discount::Group)
    } else if request.age <= CHILD_AGE_MAX || request.age >= SENIOR_AGE_MIN {
        Some(Discount::AgeBracket)
    } else if request.is_before_7am {
        Some(Discount::EarlyBird)
    } else {
        None
    }
}

/// Compute the admission price for a single request.
///
/// The patron age is validated before any discount logic; an age outside
/// `[MIN_AGE, MAX_AGE]` fails with `InvalidArgument` and no price is
/// computed. Otherwise the base price for the day type is multiplied by the
/// selected discount, if any.
pub fn calculate_price(request: &PricingRequest) -> Result<f64> {
    request.validate()?;

    let base = if request.is_weekend {
        WEEKEND_PRICE
    } else {
        REGULAR_PRICE
    };

    let discount = select_discount(request);
    let price = match discount {
        Some(d) => base * d.multiplier(),
        None => base,
    };

    tracing::debug!(
        "Priced request at {} (base: {}, discount: {:?})",
        price,
        base,
        discount
    );

    Ok(price)
}
