//! Mjengo Reports — cost tables, record listings, and export artifacts.
//!
//! This crate builds on `mjengo-core` to provide:
//! - Cost report construction (one aggregation pass per snapshot and filter)
//! - Console, CSV, and Markdown presentations of the same report
//! - Record listings for material, labour, project, and stock views
//! - Export bundles with a versioned manifest and snapshot content hash

pub mod export;
pub mod listing;
pub mod report;

pub use export::{
    export_costs_csv, generate_markdown, load_manifest, render_console_table,
    save_report_artifacts, snapshot_id, ReportPaths, SnapshotManifest, SCHEMA_VERSION,
};
pub use listing::{
    render_issued_table, render_labour_table, render_materials_table, render_projects_table,
    render_remaining_table,
};
pub use report::{format_amount, CostReport};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn cost_report_is_send_sync() {
        assert_send::<CostReport>();
        assert_sync::<CostReport>();
    }

    #[test]
    fn manifest_is_send_sync() {
        assert_send::<SnapshotManifest>();
        assert_sync::<SnapshotManifest>();
    }

    #[test]
    fn report_paths_is_send_sync() {
        assert_send::<ReportPaths>();
        assert_sync::<ReportPaths>();
    }
}
