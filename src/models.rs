// src/models.rs
use serde::Deserialize;

/// One dividend declaration as returned by the provider, most recent first.
#[derive(Debug, Clone, Deserialize)]
pub struct DividendRecord {
    pub cash_amount: f64,
    /// Payments per year. The provider omits this for irregular payers.
    pub frequency: Option<u32>,
}

/// One row of the fiscal service average interest rates dataset. Rates
/// arrive as strings and are parsed where they are consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct TreasuryRate {
    pub record_date: String,
    pub security_desc: String,
    pub avg_interest_rate_amt: String,
}

/// Label to yield-percentage pairs. Insertion order determines table and
/// chart order, so entries are kept in a plain Vec.
#[derive(Debug, Default)]
pub struct YieldComparison {
    entries: Vec<(String, f64)>,
}

impl YieldComparison {
    pub fn push(&mut self, label: impl Into<String>, pct: f64) {
        self.entries.push((label.into(), pct));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }
}
