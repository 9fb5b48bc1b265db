//! Cost summation over filtered records.

use serde::{Deserialize, Serialize};

use super::filter::{filter_labour, filter_materials};
use crate::domain::{LabourRecord, MaterialRecord, Milestone, MilestoneFilter};

/// Cost roll-up for a single milestone.
///
/// Ephemeral output: recomputed on every filter change or data refresh,
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneCostSummary {
    pub milestone: Milestone,
    pub material_cost: f64,
    pub labour_cost: f64,
    pub combined_cost: f64,
}

/// Grand totals over whatever the filter admitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostTotals {
    pub material_cost: f64,
    pub labour_cost: f64,
    pub combined_cost: f64,
}

impl CostTotals {
    pub const ZERO: CostTotals = CostTotals {
        material_cost: 0.0,
        labour_cost: 0.0,
        combined_cost: 0.0,
    };
}

impl From<&MilestoneCostSummary> for CostTotals {
    fn from(summary: &MilestoneCostSummary) -> Self {
        Self {
            material_cost: summary.material_cost,
            labour_cost: summary.labour_cost,
            combined_cost: summary.combined_cost,
        }
    }
}

/// Σ `total_price` over the given materials. Empty input sums to 0.
pub fn sum_material_cost(materials: &[&MaterialRecord]) -> f64 {
    // Explicit +0.0 seed: f64's `iter::Sum` seeds with -0.0 on newer
    // toolchains, which would render empty totals as "-0.00".
    materials.iter().map(|m| m.total_price).fold(0.0, |acc, p| acc + p)
}

/// Σ `total_pay` over the given labour entries. Empty input sums to 0.
pub fn sum_labour_cost(labour: &[&LabourRecord]) -> f64 {
    // Explicit +0.0 seed, same reason as `sum_material_cost`.
    labour.iter().map(|l| l.total_pay).fold(0.0, |acc, p| acc + p)
}

/// Costs for one milestone: filter each side by exact match, then sum.
pub fn summarize_milestone(
    milestone: &str,
    materials: &[MaterialRecord],
    labour: &[LabourRecord],
) -> MilestoneCostSummary {
    let filter = MilestoneFilter::Only(milestone.to_string());
    let material_cost = sum_material_cost(&filter_materials(materials, &filter));
    let labour_cost = sum_labour_cost(&filter_labour(labour, &filter));
    MilestoneCostSummary {
        milestone: milestone.to_string(),
        material_cost,
        labour_cost,
        combined_cost: material_cost + labour_cost,
    }
}

/// One summary per entry of `known`, in that order.
///
/// Zero-cost milestones are kept; a milestone with records on only one side
/// appears with the other side at 0. Callers build `known` with
/// [`crate::domain::known_milestones`] so user-introduced tags get a row.
pub fn summarize_all(
    materials: &[MaterialRecord],
    labour: &[LabourRecord],
    known: &[Milestone],
) -> Vec<MilestoneCostSummary> {
    known
        .iter()
        .map(|milestone| summarize_milestone(milestone, materials, labour))
        .collect()
}

/// The figure shown as "Total" and exported as the trailing summary row.
///
/// A specific filter delegates to [`summarize_milestone`], so its totals are
/// bit-identical to that milestone's summary by construction. `All` sums each
/// side over the full input in record order.
pub fn grand_total(
    materials: &[MaterialRecord],
    labour: &[LabourRecord],
    filter: &MilestoneFilter,
) -> CostTotals {
    match filter {
        MilestoneFilter::Only(milestone) => {
            CostTotals::from(&summarize_milestone(milestone, materials, labour))
        }
        MilestoneFilter::All => {
            let material_cost = sum_material_cost(&filter_materials(materials, filter));
            let labour_cost = sum_labour_cost(&filter_labour(labour, filter));
            CostTotals {
                material_cost,
                labour_cost,
                combined_cost: material_cost + labour_cost,
            }
        }
    }
}
