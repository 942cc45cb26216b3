use serde::Serialize;

use super::error::ConfigError;

pub const MONTHS_PER_PERIOD: f64 = 12.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(self, field: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFiniteBound { field });
        }
        if self.min > self.max {
            return Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        if self.min < 0.0 {
            return Err(ConfigError::NegativeBound { field });
        }
        // Uniform sampling scales the width up slightly; it must stay finite.
        if !((self.max - self.min) * 2.0).is_finite() {
            return Err(ConfigError::RangeTooWide { field });
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingRanges {
    pub monthly_payment: ValueRange,
    pub annual_interest_rate_percent: ValueRange,
    pub down_payment: ValueRange,
    pub house_price: ValueRange,
}

impl Default for SamplingRanges {
    fn default() -> Self {
        Self {
            monthly_payment: ValueRange::new(1_000.0, 5_000.0),
            annual_interest_rate_percent: ValueRange::new(1.0, 10.0),
            down_payment: ValueRange::new(10_000.0, 100_000.0),
            house_price: ValueRange::new(200_000.0, 1_000_000.0),
        }
    }
}

impl SamplingRanges {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.monthly_payment.validate("monthly payment")?;
        self.annual_interest_rate_percent
            .validate("annual interest rate")?;
        self.down_payment.validate("down payment")?;
        self.house_price.validate("house price")?;
        if self.monthly_payment.min <= 0.0 {
            return Err(ConfigError::NonPositivePayment);
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    pub ranges: SamplingRanges,
    pub scenarios: u32,
    pub seed: u64,
    /// Periods after which a loan still carrying a balance is reported as
    /// non-amortizing.
    pub period_cap: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ranges: SamplingRanges::default(),
            scenarios: 1_000,
            seed: 42,
            period_cap: 1_000,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ranges.validate()?;
        if self.scenarios == 0 {
            return Err(ConfigError::NoScenarios);
        }
        if self.period_cap == 0 {
            return Err(ConfigError::ZeroPeriodCap);
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LoanScenario {
    pub monthly_payment: f64,
    pub annual_interest_rate_percent: f64,
    pub down_payment: f64,
    pub house_price: f64,
}

impl LoanScenario {
    /// Amount financed. May be zero or negative when the down payment covers
    /// the house price.
    pub fn principal(&self) -> f64 {
        self.house_price - self.down_payment
    }

    /// Payment made once per (annual) period.
    pub fn annual_payment(&self) -> f64 {
        self.monthly_payment * MONTHS_PER_PERIOD
    }

    /// Annual rate as a fraction, e.g. `0.03` for 3 %.
    pub fn interest_rate(&self) -> f64 {
        self.annual_interest_rate_percent / 100.0
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NonAmortizingReason {
    PaymentBelowInterest,
    PeriodCapExceeded,
}

/// Whole periods to payoff, or why the loan never pays off.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AmortizationResult {
    Finite(u32),
    NonAmortizing(NonAmortizingReason),
}

impl AmortizationResult {
    pub fn periods(self) -> Option<u32> {
        match self {
            Self::Finite(periods) => Some(periods),
            Self::NonAmortizing(_) => None,
        }
    }

    pub fn is_non_amortizing(self) -> bool {
        matches!(self, Self::NonAmortizing(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTrace {
    pub period: u32,
    pub opening_balance: f64,
    pub interest_due: f64,
    pub principal_paid: f64,
    pub closing_balance: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmortizationTrace {
    pub periods: Vec<PeriodTrace>,
    pub result: AmortizationResult,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulatedLoan {
    /// Position in the sampled batch.
    pub index: usize,
    pub scenario: LoanScenario,
    pub principal: f64,
    pub result: AmortizationResult,
}

#[derive(Clone, Debug)]
pub struct SimulationRun {
    pub config: SimulationConfig,
    pub loans: Vec<SimulatedLoan>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub scenarios: usize,
    pub paid_off: usize,
    pub degenerate: usize,
    pub non_amortizing: usize,
    pub payment_below_interest: usize,
    pub period_cap_exceeded: usize,
    pub min_periods: Option<u32>,
    pub max_periods: Option<u32>,
    pub mean_periods: Option<f64>,
    pub median_periods: Option<f64>,
    pub p10_periods: Option<f64>,
    pub p90_periods: Option<f64>,
}
