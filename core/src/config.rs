use crate::error::{GenError, GenResult};
use serde::Serialize;

/// Total number of cases in a standard run.
pub const NUM_CASES: usize = 120_000;
/// Prior probability that a case is fraudulent (8%).
pub const FRAUD_RATE: f64 = 0.08;
pub const SEED: u64 = 42;
pub const OUTPUT_PATH: &str = "cost_aware_cases.csv";

/// First value of the case id sequence. Ids are always 7 digits.
pub const CASE_ID_BASE: usize = 1_000_000;
/// Largest case count whose ids still fit in 7 digits.
pub const MAX_CASES: usize = 10_000_000 - CASE_ID_BASE;

/// Investigation cost range, shared by both labels.
pub const INVESTIGATION_COST_MIN: f64 = 500.0;
pub const INVESTIGATION_COST_MAX: f64 = 2000.0;

/// Account age floor after rounding. There is no ceiling.
pub const MIN_ACCOUNT_AGE_DAYS: i64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorConfig {
    pub num_cases: usize,
    pub fraud_rate: f64,
    pub seed: u64,
    pub output_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_cases: NUM_CASES,
            fraud_rate: FRAUD_RATE,
            seed: SEED,
            output_path: OUTPUT_PATH.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Five-case config for use in tests. Writes under the OS temp dir.
    pub fn default_test() -> Self {
        let path = std::env::temp_dir().join(format!("casegen-test-{}.csv", std::process::id()));
        Self {
            num_cases: 5,
            output_path: path.to_string_lossy().into_owned(),
            ..Self::default()
        }
    }

    /// Fail fast on preconditions before any draw is made.
    pub fn validate(&self) -> GenResult<()> {
        if self.num_cases == 0 {
            return Err(GenError::invalid_config("num_cases must be at least 1"));
        }
        if self.num_cases > MAX_CASES {
            return Err(GenError::invalid_config(format!(
                "num_cases {} exceeds the 7-digit case id space ({MAX_CASES})",
                self.num_cases
            )));
        }
        if !self.fraud_rate.is_finite() || !(0.0..=1.0).contains(&self.fraud_rate) {
            return Err(GenError::invalid_config(format!(
                "fraud_rate must be within [0, 1], got {}",
                self.fraud_rate
            )));
        }
        if self.output_path.trim().is_empty() {
            return Err(GenError::invalid_config("output_path must not be empty"));
        }
        Ok(())
    }
}

/// Distribution parameters for one label.
///
/// Every non-id field of a case is drawn from the profile picked by
/// that case's label; the two profiles never mix.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelProfile {
    /// LogNormal (mu, sigma) of the underlying normal.
    pub amount_mu: f64,
    pub amount_sigma: f64,
    /// Poisson rate of transactions in the prior 24h.
    pub velocity_lambda: f64,
    pub unusual_location_p: f64,
    pub device_change_p: f64,
    pub account_age_mean: f64,
    pub account_age_std: f64,
    /// Uniform [lo, hi) multiplier applied to the amount. `None` means
    /// no loss is possible and no draw is made.
    pub loss_factor: Option<(f64, f64)>,
}

impl LabelProfile {
    pub fn fraud() -> Self {
        Self {
            amount_mu: 9.5,
            amount_sigma: 0.7,
            velocity_lambda: 12.0,
            unusual_location_p: 0.35,
            device_change_p: 0.40,
            account_age_mean: 180.0,
            account_age_std: 300.0,
            loss_factor: Some((0.7, 1.1)),
        }
    }

    pub fn legit() -> Self {
        Self {
            amount_mu: 8.3,
            amount_sigma: 0.6,
            velocity_lambda: 4.0,
            unusual_location_p: 0.05,
            device_change_p: 0.10,
            account_age_mean: 900.0,
            account_age_std: 300.0,
            loss_factor: None,
        }
    }
}
