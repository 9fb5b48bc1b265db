//! Record filtering predicates.
//!
//! Two predicates with different rules that must never be conflated:
//! milestone selection is exact and case-sensitive, while the materials
//! name search is a case-insensitive substring match.

use crate::domain::{LabourRecord, MaterialRecord, MilestoneFilter};

/// Exact, case-sensitive milestone match. `All` admits every record.
///
/// No trimming, no case folding: "roofing" and "Roofing" are distinct tags,
/// as are a label and the same label with stray whitespace.
pub fn milestone_matches(record_milestone: &str, filter: &MilestoneFilter) -> bool {
    match filter {
        MilestoneFilter::All => true,
        MilestoneFilter::Only(m) => record_milestone == m,
    }
}

/// Materials whose milestone passes `filter`, in input order.
pub fn filter_materials<'a>(
    materials: &'a [MaterialRecord],
    filter: &MilestoneFilter,
) -> Vec<&'a MaterialRecord> {
    materials
        .iter()
        .filter(|m| milestone_matches(&m.milestone, filter))
        .collect()
}

/// Labour entries whose milestone passes `filter`, in input order.
pub fn filter_labour<'a>(
    labour: &'a [LabourRecord],
    filter: &MilestoneFilter,
) -> Vec<&'a LabourRecord> {
    labour
        .iter()
        .filter(|l| milestone_matches(&l.milestone, filter))
        .collect()
}

/// Case-insensitive substring match for the materials search box.
///
/// An empty query matches everything. This predicate serves name search
/// only; milestone selection goes through [`milestone_matches`].
pub fn name_matches(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Materials passing both the milestone filter and the name search.
pub fn search_materials<'a>(
    materials: &'a [MaterialRecord],
    filter: &MilestoneFilter,
    name_query: &str,
) -> Vec<&'a MaterialRecord> {
    materials
        .iter()
        .filter(|m| milestone_matches(&m.milestone, filter) && name_matches(&m.name, name_query))
        .collect()
}
