//! Cost report data model.
//!
//! A [`CostReport`] is built once per snapshot and filter, then handed to
//! every renderer. The console table, the CSV export, and the Markdown
//! document all read the same rows and the same grand total, so the three
//! always show identical figures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mjengo_core::aggregate::{
    grand_total, summarize_all, summarize_milestone, CostTotals, MilestoneCostSummary,
};
use mjengo_core::data::ProjectSnapshot;
use mjengo_core::domain::{known_milestones, MilestoneFilter};

/// Milestone cost table plus grand total for one snapshot and one filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostReport {
    /// Project the snapshot was fetched for.
    pub project_id: String,
    /// When the snapshot was taken from the backend.
    pub fetched_at: DateTime<Utc>,
    /// When this report was built.
    pub generated_at: DateTime<Utc>,
    /// Scope the report was built under.
    pub scope: MilestoneFilter,
    /// Currency label for column headers. Display only, never converted.
    pub currency: String,
    /// One row per milestone in scope, zero-cost rows included.
    pub rows: Vec<MilestoneCostSummary>,
    /// The trailing Total row.
    pub total: CostTotals,
}

impl CostReport {
    /// Aggregates `snapshot` under `filter`.
    ///
    /// With the all filter the rows cover every known milestone in display
    /// order. With a specific filter there is exactly one row, and the grand
    /// total equals it.
    pub fn build(snapshot: &ProjectSnapshot, filter: &MilestoneFilter, currency: &str) -> Self {
        let rows = match filter {
            MilestoneFilter::All => {
                let known = known_milestones(&snapshot.materials, &snapshot.labour);
                summarize_all(&snapshot.materials, &snapshot.labour, &known)
            }
            MilestoneFilter::Only(milestone) => {
                vec![summarize_milestone(
                    milestone,
                    &snapshot.materials,
                    &snapshot.labour,
                )]
            }
        };
        let total = grand_total(&snapshot.materials, &snapshot.labour, filter);

        Self {
            project_id: snapshot.project_id.clone(),
            fetched_at: snapshot.fetched_at,
            generated_at: Utc::now(),
            scope: filter.clone(),
            currency: currency.to_string(),
            rows,
            total,
        }
    }

    /// Column header for the material cost column.
    pub fn material_header(&self) -> String {
        format!("Total Material Cost ({})", self.currency)
    }

    /// Column header for the labour cost column.
    pub fn labour_header(&self) -> String {
        format!("Total Labour Cost ({})", self.currency)
    }

    /// Column header for the combined cost column.
    pub fn combined_header(&self) -> String {
        format!("Combined Cost ({})", self.currency)
    }
}

/// Formats an amount the way every presentation prints it: two decimals,
/// no thousands separators.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
