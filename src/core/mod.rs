mod engine;
mod error;
mod filter;
mod sampler;
mod types;

pub use engine::{amortization_trace, run_simulation, simulate_amortization};
pub use error::ConfigError;
pub use filter::{filter_scenarios, summarize};
pub use sampler::sample_scenarios;
pub use types::{
    AmortizationResult, AmortizationTrace, BatchSummary, LoanScenario, NonAmortizingReason,
    PeriodTrace, SamplingRanges, SimulatedLoan, SimulationConfig, SimulationRun, ValueRange,
};
