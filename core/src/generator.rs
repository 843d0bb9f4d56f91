//! The case generator: one pass over `num_cases`, one record per case.
//!
//! DRAW ORDER (fixed, per case, never reordered):
//!   1. label              Bernoulli(fraud_rate)
//!   2. amount             LogNormal
//!   3. velocity           Poisson
//!   4. unusual location   Bernoulli
//!   5. device change      Bernoulli
//!   6. account age        Normal, rounded, floored at 1
//!   7. fraud loss factor  Uniform(0.7, 1.1), fraud cases only
//!   8. investigation cost Uniform(500, 2000)
//!
//! Legit cases skip draw 7 entirely, so they consume one fewer value
//! from the stream than fraud cases.

use crate::{
    case::{case_id, round_cents, CaseRecord},
    config::{
        GeneratorConfig, LabelProfile, INVESTIGATION_COST_MAX, INVESTIGATION_COST_MIN,
        MIN_ACCOUNT_AGE_DAYS,
    },
    error::{GenError, GenResult},
    rng::CaseRng,
    types::{CaseIndex, CaseLabel},
};
use rand_distr::{LogNormal, Normal, Poisson};

const PROGRESS_INTERVAL: usize = 10_000;

/// Ready-to-sample distributions for one label, built once per run.
#[derive(Debug, Clone)]
pub struct LabelDistributions {
    amount: LogNormal<f64>,
    velocity: Poisson<f64>,
    unusual_location_p: f64,
    device_change_p: f64,
    account_age: Normal<f64>,
    loss_factor: Option<(f64, f64)>,
}

impl LabelDistributions {
    pub fn new(profile: &LabelProfile) -> GenResult<Self> {
        let amount = LogNormal::new(profile.amount_mu, profile.amount_sigma)
            .map_err(|e| distribution_error("transaction_amount", e))?;
        let velocity = Poisson::new(profile.velocity_lambda)
            .map_err(|e| distribution_error("tx_velocity_24h", e))?;
        let account_age = Normal::new(profile.account_age_mean, profile.account_age_std)
            .map_err(|e| distribution_error("account_age_days", e))?;

        check_probability("unusual_location_flag", profile.unusual_location_p)?;
        check_probability("device_change_flag", profile.device_change_p)?;
        if let Some((lo, hi)) = profile.loss_factor {
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return Err(GenError::Distribution {
                    field: "fraud_loss_if_missed",
                    reason: format!("loss factor range [{lo}, {hi}) is empty or not finite"),
                });
            }
        }

        Ok(Self {
            amount,
            velocity,
            unusual_location_p: profile.unusual_location_p,
            device_change_p: profile.device_change_p,
            account_age,
            loss_factor: profile.loss_factor,
        })
    }
}

fn distribution_error(field: &'static str, err: impl std::fmt::Display) -> GenError {
    GenError::Distribution { field, reason: err.to_string() }
}

fn check_probability(field: &'static str, p: f64) -> GenResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GenError::Distribution {
            field,
            reason: format!("probability {p} outside [0, 1]"),
        })
    }
}

pub struct CaseGenerator {
    num_cases: usize,
    fraud_rate: f64,
    fraud: LabelDistributions,
    legit: LabelDistributions,
}

impl CaseGenerator {
    /// Validate the config and build both label distribution sets.
    pub fn new(config: &GeneratorConfig) -> GenResult<Self> {
        config.validate()?;
        Ok(Self {
            num_cases: config.num_cases,
            fraud_rate: config.fraud_rate,
            fraud: LabelDistributions::new(&LabelProfile::fraud())?,
            legit: LabelDistributions::new(&LabelProfile::legit())?,
        })
    }

    pub fn num_cases(&self) -> usize {
        self.num_cases
    }

    /// Draw one case. Consumes the stream in the documented order.
    pub fn generate_case(&self, index: CaseIndex, rng: &mut CaseRng) -> CaseRecord {
        let label = if rng.chance(self.fraud_rate) {
            CaseLabel::Fraud
        } else {
            CaseLabel::Legit
        };
        let dists = match label {
            CaseLabel::Fraud => &self.fraud,
            CaseLabel::Legit => &self.legit,
        };

        let amount: f64 = rng.sample(&dists.amount);
        let velocity: f64 = rng.sample(&dists.velocity);
        let unusual_location = rng.chance(dists.unusual_location_p);
        let device_change = rng.chance(dists.device_change_p);
        let age_draw: f64 = rng.sample(&dists.account_age);
        let account_age_days = (age_draw.round() as i64).max(MIN_ACCOUNT_AGE_DAYS);

        let fraud_loss = match dists.loss_factor {
            Some((lo, hi)) if label.is_fraud() => amount * rng.uniform(lo, hi),
            _ => 0.0,
        };
        let investigation_cost = rng.uniform(INVESTIGATION_COST_MIN, INVESTIGATION_COST_MAX);

        CaseRecord {
            case_id: case_id(index),
            transaction_amount: round_cents(amount),
            tx_velocity_24h: velocity as u32,
            unusual_location_flag: u8::from(unusual_location),
            device_change_flag: u8::from(device_change),
            account_age_days,
            investigation_cost: round_cents(investigation_cost),
            fraud_loss_if_missed: round_cents(fraud_loss),
            label,
        }
    }

    /// Generate every case in index order.
    pub fn generate(&self, rng: &mut CaseRng) -> Vec<CaseRecord> {
        log::info!(
            "generating {} cases (fraud_rate={}, stream={}, seed={})",
            self.num_cases,
            self.fraud_rate,
            rng.name,
            rng.seed()
        );

        let mut cases = Vec::with_capacity(self.num_cases);
        for index in 0..self.num_cases {
            cases.push(self.generate_case(index, rng));
            if (index + 1) % PROGRESS_INTERVAL == 0 {
                log::debug!("generated {}/{} cases", index + 1, self.num_cases);
            }
        }

        let fraud_cases = cases.iter().filter(|c| c.label.is_fraud()).count();
        log::info!("generated {} cases, {fraud_cases} fraudulent", cases.len());
        cases
    }
}

/// Build a generator and run it on a fresh stream seeded from the config.
pub fn generate_dataset(config: &GeneratorConfig) -> GenResult<Vec<CaseRecord>> {
    let generator = CaseGenerator::new(config)?;
    let mut rng = CaseRng::new(config.seed);
    Ok(generator.generate(&mut rng))
}
