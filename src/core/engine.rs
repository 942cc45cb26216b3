use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::error::ConfigError;
use super::sampler::sample_scenarios;
use super::types::{
    AmortizationResult, AmortizationTrace, LoanScenario, NonAmortizingReason, PeriodTrace,
    SimulatedLoan, SimulationConfig, SimulationRun,
};

pub fn simulate_amortization(scenario: &LoanScenario, period_cap: u32) -> AmortizationResult {
    run_schedule(scenario, period_cap, |_| {})
}

pub fn amortization_trace(scenario: &LoanScenario, period_cap: u32) -> AmortizationTrace {
    let mut periods = Vec::new();
    let result = run_schedule(scenario, period_cap, |point| periods.push(point));
    AmortizationTrace { periods, result }
}

pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationRun, ConfigError> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let scenarios = sample_scenarios(&config.ranges, config.scenarios, &mut rng)?;
    let loans: Vec<SimulatedLoan> = scenarios
        .into_iter()
        .enumerate()
        .map(|(index, scenario)| SimulatedLoan {
            index,
            scenario,
            principal: scenario.principal(),
            result: simulate_amortization(&scenario, config.period_cap),
        })
        .collect();

    let non_amortizing = loans
        .iter()
        .filter(|loan| loan.result.is_non_amortizing())
        .count();
    info!(
        scenarios = loans.len(),
        paid_off = loans.len() - non_amortizing,
        non_amortizing,
        seed = config.seed,
        "simulation batch complete"
    );

    Ok(SimulationRun {
        config: *config,
        loans,
    })
}

/// Steps one loan period by period: interest accrues on the opening balance,
/// then the annual payment covers interest first and principal with the rest.
/// The final period's principal portion is capped at the remaining balance,
/// so a paid-off loan always closes at exactly zero.
fn run_schedule(
    scenario: &LoanScenario,
    period_cap: u32,
    mut on_period: impl FnMut(PeriodTrace),
) -> AmortizationResult {
    let annual_payment = scenario.annual_payment();
    let rate = scenario.interest_rate();
    let mut balance = scenario.principal();
    let mut period = 0_u32;

    while balance > 0.0 {
        if period >= period_cap {
            debug!(period_cap, balance, "period cap reached before payoff");
            return AmortizationResult::NonAmortizing(NonAmortizingReason::PeriodCapExceeded);
        }
        period += 1;

        let interest_due = balance * rate;
        let principal_paid = if balance + interest_due <= annual_payment {
            balance
        } else {
            let principal_paid = annual_payment - interest_due;
            // Zero leaves the balance unchanged every period.
            if principal_paid <= 0.0 {
                return AmortizationResult::NonAmortizing(
                    NonAmortizingReason::PaymentBelowInterest,
                );
            }
            principal_paid
        };

        let closing_balance = balance - principal_paid;
        on_period(PeriodTrace {
            period,
            opening_balance: balance,
            interest_due,
            principal_paid,
            closing_balance,
        });
        balance = closing_balance;
    }

    AmortizationResult::Finite(period)
}
