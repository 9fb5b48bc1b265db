//! Record source trait and structured error types.
//!
//! The RecordSource trait abstracts over where records come from (the live
//! site-office backend, a saved snapshot file) so commands can swap sources
//! and tests can mock the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    IssuedMaterialRecord, LabourRecord, MaterialRecord, ProjectRecord, RemainingMaterialRecord,
};

/// Everything the aggregator needs for one project, fetched together.
///
/// A snapshot is plain data. Callers hold the current snapshot and pass its
/// slices into aggregation on every recompute; nothing downstream caches
/// record state of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub project_id: String,
    pub fetched_at: DateTime<Utc>,
    #[serde(default)]
    pub materials: Vec<MaterialRecord>,
    #[serde(default)]
    pub labour: Vec<LabourRecord>,
}

impl ProjectSnapshot {
    pub fn record_count(&self) -> usize {
        self.materials.len() + self.labour.len()
    }
}

/// Structured error types for record operations.
///
/// These are designed to be displayable in CLI contexts. Retries happen
/// below this surface; an error here means the attempt budget is spent or
/// the failure is not retryable.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by backend (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("authentication rejected: {0}")]
    Unauthorized(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("project not found: {project_id}")]
    ProjectNotFound { project_id: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("snapshot file error: {0}")]
    SnapshotIo(String),

    #[error("api error: {0}")]
    Other(String),
}

/// Trait for record sources (REST backend, snapshot files, test mocks).
pub trait RecordSource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// All projects visible to the caller.
    fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, ApiError>;

    /// Materials and labour for one project, taken together as a snapshot.
    fn fetch_snapshot(&self, project_id: &str) -> Result<ProjectSnapshot, ApiError>;

    /// Materials handed out to workers, across all rounds.
    fn fetch_issued_materials(&self) -> Result<Vec<IssuedMaterialRecord>, ApiError>;

    /// Leftover stock recorded by supervisors.
    fn fetch_remaining_materials(&self) -> Result<Vec<RemainingMaterialRecord>, ApiError>;
}
