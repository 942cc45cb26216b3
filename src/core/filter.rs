use super::types::{
    AmortizationResult, BatchSummary, NonAmortizingReason, SimulatedLoan, SimulationRun,
};

/// Loans with a defined duration of at most `max_periods`, in batch order.
pub fn filter_scenarios(loans: &[SimulatedLoan], max_periods: u32) -> Vec<&SimulatedLoan> {
    loans
        .iter()
        .filter(|loan| {
            loan.result
                .periods()
                .is_some_and(|periods| periods <= max_periods)
        })
        .collect()
}

/// Counts by outcome plus duration statistics. Non-amortizing loans are
/// counted but never enter the duration statistics.
pub fn summarize(loans: &[SimulatedLoan]) -> BatchSummary {
    let mut payment_below_interest = 0;
    let mut period_cap_exceeded = 0;
    let mut durations = Vec::with_capacity(loans.len());

    for loan in loans {
        match loan.result {
            AmortizationResult::Finite(periods) => durations.push(periods),
            AmortizationResult::NonAmortizing(NonAmortizingReason::PaymentBelowInterest) => {
                payment_below_interest += 1;
            }
            AmortizationResult::NonAmortizing(NonAmortizingReason::PeriodCapExceeded) => {
                period_cap_exceeded += 1;
            }
        }
    }

    let degenerate = durations.iter().filter(|&&periods| periods == 0).count();
    let mut values: Vec<f64> = durations.iter().map(|&periods| periods as f64).collect();
    let mean_periods =
        (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64);

    BatchSummary {
        scenarios: loans.len(),
        paid_off: durations.len(),
        degenerate,
        non_amortizing: payment_below_interest + period_cap_exceeded,
        payment_below_interest,
        period_cap_exceeded,
        min_periods: durations.iter().copied().min(),
        max_periods: durations.iter().copied().max(),
        mean_periods,
        median_periods: percentile(&mut values, 50.0),
        p10_periods: percentile(&mut values, 10.0),
        p90_periods: percentile(&mut values, 90.0),
    }
}

impl SimulationRun {
    pub fn within_periods(&self, max_periods: u32) -> Vec<&SimulatedLoan> {
        filter_scenarios(&self.loans, max_periods)
    }

    pub fn summary(&self) -> BatchSummary {
        summarize(&self.loans)
    }
}

fn percentile(values: &mut [f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    values.sort_by(|a, b| a.total_cmp(b));

    let n = values.len();
    if n == 1 {
        return Some(values[0]);
    }

    let rank = (p / 100.0) * (n as f64 - 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        Some(values[lower])
    } else {
        let w = rank - lower as f64;
        Some(values[lower] * (1.0 - w) + values[upper] * w)
    }
}
