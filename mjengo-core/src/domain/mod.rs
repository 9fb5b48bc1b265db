//! Domain records for the site cost engine.

pub mod labour;
pub mod material;
pub mod milestone;
pub mod project;
pub mod stock;

pub use labour::{LabourRecord, WorkerPay};
pub use material::{MaterialHistoryEntry, MaterialRecord, UnitType};
pub use milestone::{known_milestones, MilestoneFilter, PREDEFINED_MILESTONES};
pub use project::ProjectRecord;
pub use stock::{IssuedMaterialRecord, RemainingMaterialRecord};

/// Milestone tag type alias.
pub type Milestone = String;
