use anyhow::Result;
use gate_pricing::utils::logger;
use gate_pricing::{calculate_price, PricingRequest};
use serde::Deserialize;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| logger::init_logger(true));
}

#[derive(Debug, Deserialize)]
struct Scenario {
    is_weekend: bool,
    is_member: bool,
    is_group: bool,
    age: i32,
    is_before_7am: bool,
    expected_price: f64,
}

/// Replays the pricing scenarios from the external CSV data file. Every row
/// is a full parameter tuple plus the expected price.
#[test]
fn test_scenarios_from_csv_file() -> Result<()> {
    init_logging();

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/pricing_scenarios.csv");
    let mut reader = csv::Reader::from_path(&path)?;

    let mut checked = 0;
    for row in reader.deserialize() {
        let scenario: Scenario = row?;
        let request = PricingRequest::new(
            scenario.is_weekend,
            scenario.is_member,
            scenario.is_group,
            scenario.age,
            scenario.is_before_7am,
        );

        let actual = calculate_price(&request)?;
        assert_eq!(
            actual, scenario.expected_price,
            "unexpected price for scenario {:?}",
            scenario
        );
        checked += 1;
    }

    assert!(checked > 0, "scenario file contained no rows");
    tracing::info!("Replayed {} pricing scenarios", checked);
    Ok(())
}
