//! Milestone cost aggregation.
//!
//! Pure functions over record slices: no I/O, no caching, and no mutation
//! of the inputs.
//! Every presentation (dashboard table, spreadsheet export, document export)
//! renders one output of these functions rather than re-filtering on its own,
//! which is what keeps the three numerically identical.

mod audit;
mod filter;
mod totals;

pub use audit::{audit_totals, RecordKind, TotalsMismatch, AUDIT_TOLERANCE};
pub use filter::{
    filter_labour, filter_materials, milestone_matches, name_matches, search_materials,
};
pub use totals::{
    grand_total, sum_labour_cost, sum_material_cost, summarize_all, summarize_milestone,
    CostTotals, MilestoneCostSummary,
};
