//! Material records — purchased stock tagged by milestone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unit descriptor offered by the material entry form.
///
/// The backend stores the label as plain text, so labels outside the form's
/// dropdown round-trip unchanged instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitType {
    Pieces,
    Lorries,
    Bags,
    Feet,
    #[serde(untagged)]
    Other(String),
}

impl UnitType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pieces => "Pieces",
            Self::Lorries => "Lorries",
            Self::Bags => "Bags",
            Self::Feet => "Feet",
            Self::Other(label) => label,
        }
    }
}

/// A purchased material and its delivery history.
///
/// `total_price` is the figure the entry form stored (`quantity × unit_price`
/// at submission time) and is what aggregation reads. History entries keep
/// their own snapshots, which can drift from the parent after edits; the
/// audit pass in `aggregate::audit` surfaces that drift instead of anything
/// here recomputing silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
    pub unit_type: UnitType,
    pub milestone: String,
    #[serde(default)]
    pub history: Vec<MaterialHistoryEntry>,
}

impl MaterialRecord {
    /// `quantity × unit_price` from the current fields, for audit comparison
    /// against the stored `total_price`.
    pub fn computed_total(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// Total quantity across delivery batches.
    pub fn delivered_quantity(&self) -> f64 {
        self.history.iter().map(|h| h.quantity).sum()
    }
}

/// One delivery batch, appended each time more of the material arrives.
///
/// Fields are snapshots of the form at delivery time and are not refreshed
/// when the parent record is later edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialHistoryEntry {
    pub date: DateTime<Utc>,
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
    pub unit_type: UnitType,
    pub milestone: String,
}
