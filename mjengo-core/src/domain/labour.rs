//! Labour records — daily crew pay tagged by milestone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pay line for a single worker on a labour entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerPay {
    pub name: String,
    pub pay: f64,
}

/// One day's crew and pay for a milestone.
///
/// The three `total_*` fields are maintained incrementally by the entry form
/// as sub-lists are edited, then stored. Aggregation reads `total_pay` as-is
/// rather than re-deriving it from the sub-lists; the audit pass reports any
/// disagreement between the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub date: NaiveDate,
    pub milestone: String,
    pub labour_type: String,
    pub main_supervisor: WorkerPay,
    #[serde(default)]
    pub fundis: Vec<WorkerPay>,
    #[serde(default)]
    pub helpers: Vec<WorkerPay>,
    pub total_fundis_pay: f64,
    pub total_helpers_pay: f64,
    pub total_pay: f64,
}

impl LabourRecord {
    /// Σ pay over the fundi sub-list.
    pub fn fundis_total(&self) -> f64 {
        self.fundis.iter().map(|w| w.pay).sum()
    }

    /// Σ pay over the helper sub-list.
    pub fn helpers_total(&self) -> f64 {
        self.helpers.iter().map(|w| w.pay).sum()
    }

    /// Supervisor pay plus both sub-list sums, for audit comparison against
    /// the stored `total_pay`.
    pub fn computed_total(&self) -> f64 {
        self.main_supervisor.pay + self.fundis_total() + self.helpers_total()
    }

    /// Number of workers on site for this entry, supervisor included.
    pub fn crew_size(&self) -> usize {
        1 + self.fundis.len() + self.helpers.len()
    }
}
