use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} range is inverted: min {min} > max {max}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} bounds must be finite")]
    NonFiniteBound { field: &'static str },

    #[error("{field} bounds must be >= 0")]
    NegativeBound { field: &'static str },

    #[error("{field} range is too wide to sample")]
    RangeTooWide { field: &'static str },

    #[error("monthly payment min must be > 0")]
    NonPositivePayment,

    #[error("scenario count must be > 0")]
    NoScenarios,

    #[error("period cap must be > 0")]
    ZeroPeriodCap,

    #[error("trace index {index} is out of range for {scenarios} scenarios")]
    TraceIndexOutOfRange { index: usize, scenarios: u32 },
}
