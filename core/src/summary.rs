//! Post-generation summary and console preview.

use crate::case::CaseRecord;
use serde::Serialize;

/// Number of rows shown by the runner's console preview.
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_cases: usize,
    pub fraud_cases: usize,
    pub observed_fraud_rate: f64,
    pub total_fraud_loss: f64,
    pub total_investigation_cost: f64,
    pub mean_amount_fraud: f64,
    pub mean_amount_legit: f64,
}

impl DatasetSummary {
    pub fn from_records(records: &[CaseRecord]) -> Self {
        let total_cases = records.len();
        let (fraud, legit): (Vec<&CaseRecord>, Vec<&CaseRecord>) =
            records.iter().partition(|c| c.label.is_fraud());

        Self {
            total_cases,
            fraud_cases: fraud.len(),
            observed_fraud_rate: ratio(fraud.len() as f64, total_cases),
            total_fraud_loss: records.iter().map(|c| c.fraud_loss_if_missed).sum(),
            total_investigation_cost: records.iter().map(|c| c.investigation_cost).sum(),
            mean_amount_fraud: mean_amount(&fraud),
            mean_amount_legit: mean_amount(&legit),
        }
    }
}

fn ratio(numerator: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        numerator / count as f64
    }
}

fn mean_amount(cases: &[&CaseRecord]) -> f64 {
    ratio(cases.iter().map(|c| c.transaction_amount).sum(), cases.len())
}

/// Right-aligned text table of the first `rows` records, each prefixed
/// with its zero-based row index.
pub fn render_preview(records: &[CaseRecord], rows: usize) -> String {
    let shown = &records[..rows.min(records.len())];

    let mut table: Vec<Vec<String>> = Vec::with_capacity(shown.len() + 1);
    let mut header = vec![String::new()];
    header.extend(CaseRecord::COLUMNS.iter().map(|c| c.to_string()));
    table.push(header);
    for (i, record) in shown.iter().enumerate() {
        let mut line = vec![i.to_string()];
        line.extend(record.fields());
        table.push(line);
    }

    let widths: Vec<usize> = (0..table[0].len())
        .map(|col| table.iter().map(|row| row[col].len()).max().unwrap_or(0))
        .collect();

    table
        .iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:>w$}"))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
