//! Shared primitive types used across the generator.

/// Zero-based position of a case in generation order.
pub type CaseIndex = usize;

/// A stable, unique case identifier (`CASE_1000000`, `CASE_1000001`, ...).
pub type CaseId = String;

/// Hidden ground-truth label of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseLabel {
    Legit,
    Fraud,
}

impl CaseLabel {
    pub fn is_fraud(self) -> bool {
        matches!(self, Self::Fraud)
    }

    /// Column value for `label_fraud`.
    pub fn as_flag(self) -> u8 {
        match self {
            Self::Legit => 0,
            Self::Fraud => 1,
        }
    }
}
