use rand::Rng;

use super::error::ConfigError;
use super::types::{LoanScenario, SamplingRanges, ValueRange};

/// Draws `count` independent scenarios, each field uniform over its own range.
///
/// The random source is supplied by the caller, so a seeded generator gives a
/// reproducible batch. Fields are drawn in a fixed order per scenario
/// (payment, rate, down payment, house price).
pub fn sample_scenarios<R: Rng + ?Sized>(
    ranges: &SamplingRanges,
    count: u32,
    rng: &mut R,
) -> Result<Vec<LoanScenario>, ConfigError> {
    ranges.validate()?;
    if count == 0 {
        return Err(ConfigError::NoScenarios);
    }

    let scenarios = (0..count)
        .map(|_| LoanScenario {
            monthly_payment: draw(ranges.monthly_payment, rng),
            annual_interest_rate_percent: draw(ranges.annual_interest_rate_percent, rng),
            down_payment: draw(ranges.down_payment, rng),
            house_price: draw(ranges.house_price, rng),
        })
        .collect();
    Ok(scenarios)
}

fn draw<R: Rng + ?Sized>(range: ValueRange, rng: &mut R) -> f64 {
    if range.min == range.max {
        return range.min;
    }
    rng.gen_range(range.min..=range.max)
}
