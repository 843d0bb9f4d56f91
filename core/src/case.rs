//! The case record and its explicit column schema.

use crate::{
    config::CASE_ID_BASE,
    types::{CaseId, CaseIndex, CaseLabel},
};

/// One synthetic case. Created once by the generator, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
    pub case_id: CaseId,
    pub transaction_amount: f64,
    pub tx_velocity_24h: u32,
    pub unusual_location_flag: u8,
    pub device_change_flag: u8,
    pub account_age_days: i64,
    pub investigation_cost: f64,
    pub fraud_loss_if_missed: f64,
    pub label: CaseLabel,
}

impl CaseRecord {
    /// Output column order. `csv_row` renders fields in exactly this order.
    pub const COLUMNS: [&'static str; 9] = [
        "case_id",
        "transaction_amount",
        "tx_velocity_24h",
        "unusual_location_flag",
        "device_change_flag",
        "account_age_days",
        "investigation_cost",
        "fraud_loss_if_missed",
        "label_fraud",
    ];

    pub fn csv_header() -> String {
        Self::COLUMNS.join(",")
    }

    /// Render the record as one comma-delimited line (no terminator).
    pub fn csv_row(&self) -> String {
        self.fields().join(",")
    }

    /// Field values as text, in `COLUMNS` order.
    pub fn fields(&self) -> [String; 9] {
        [
            self.case_id.clone(),
            format!("{:.2}", self.transaction_amount),
            self.tx_velocity_24h.to_string(),
            self.unusual_location_flag.to_string(),
            self.device_change_flag.to_string(),
            self.account_age_days.to_string(),
            format!("{:.2}", self.investigation_cost),
            format!("{:.2}", self.fraud_loss_if_missed),
            self.label_fraud().to_string(),
        ]
    }

    pub fn label_fraud(&self) -> u8 {
        self.label.as_flag()
    }
}

/// `CASE_<base + index>`, e.g. index 0 -> `CASE_1000000`.
pub fn case_id(index: CaseIndex) -> CaseId {
    format!("CASE_{}", CASE_ID_BASE + index)
}

/// Round a monetary value to cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
