//! Milestone vocabulary, filter, and display ordering.

use serde::{Deserialize, Serialize};

use super::{LabourRecord, MaterialRecord};

/// Build phases offered by the entry forms, in presentation order.
///
/// The labels are exactly what the forms ship, spelling quirks included
/// ("Rinto", "Pluster"). Stored records carry whichever label the form sent
/// at entry time, so normalizing or merging similar-looking labels here
/// would detach existing records from their phase.
pub const PREDEFINED_MILESTONES: [&str; 13] = [
    "Foundations",
    "Slab",
    "Walling",
    "Rinto",
    "Roofing",
    "Plumbing",
    "Electrical works",
    "Ceiling",
    "Pluster",
    "Tiling",
    "Fittings",
    "Doors",
    "Windows",
];

/// Scope selector for cost aggregation.
///
/// The dashboard dropdown uses the literal string `"All"` as its
/// everything-sentinel; [`MilestoneFilter::parse`] reproduces that mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneFilter {
    /// Every milestone. The dashboard default.
    All,
    /// A single milestone, matched by exact string equality.
    Only(String),
}

impl MilestoneFilter {
    /// Maps a dropdown value onto a filter: the exact string `"All"` selects
    /// everything, anything else names one milestone.
    pub fn parse(value: &str) -> Self {
        if value == "All" {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// The dropdown value this filter round-trips to.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Only(m) => m,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl std::fmt::Display for MilestoneFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The milestone list the all-milestones view iterates, in display order.
///
/// Predefined milestones come first in their fixed order, followed by every
/// distinct milestone string present in the records but absent from the
/// predefined list, de-duplicated, in first-seen order (materials are
/// scanned before labour). Milestones tagged only on labour entries are
/// included; a phase with wages but no purchases still gets a row.
pub fn known_milestones(materials: &[MaterialRecord], labour: &[LabourRecord]) -> Vec<String> {
    let mut known: Vec<String> = PREDEFINED_MILESTONES.iter().map(|m| m.to_string()).collect();

    let seen = materials
        .iter()
        .map(|m| m.milestone.as_str())
        .chain(labour.iter().map(|l| l.milestone.as_str()));

    for milestone in seen {
        if !known.iter().any(|k| k == milestone) {
            known.push(milestone.to_string());
        }
    }

    known
}
