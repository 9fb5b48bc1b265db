//! Report rendering and artifact export — console, CSV, Markdown, JSON.
//!
//! Three presentations of one [`CostReport`]:
//! - **Console**: aligned table for terminal display
//! - **CSV**: spreadsheet export with the stable four-column contract
//! - **Markdown**: shareable document with metadata and the cost table
//!
//! Artifact bundles carry a `manifest.json` with a `schema_version` field
//! and a content hash of the snapshot they were built from. Unknown versions
//! are rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use mjengo_core::aggregate::CostTotals;
use mjengo_core::data::ProjectSnapshot;

use crate::report::{format_amount, CostReport};

/// Manifest schema version written into every artifact bundle.
pub const SCHEMA_VERSION: u32 = 1;

// ─── Console ────────────────────────────────────────────────────────

/// Renders the report as an aligned text table with a trailing Total row.
pub fn render_console_table(report: &CostReport) -> String {
    let material_h = report.material_header();
    let labour_h = report.labour_header();
    let combined_h = report.combined_header();

    let name_w = report
        .rows
        .iter()
        .map(|r| r.milestone.len())
        .chain(["Milestone".len(), "Total".len()])
        .max()
        .unwrap_or(9);
    let material_w = material_h.len();
    let labour_w = labour_h.len();
    let combined_w = combined_h.len();
    let line_w = name_w + material_w + labour_w + combined_w + 6;

    let mut out = String::with_capacity(1024);
    out.push_str(&format!(
        "{:<name_w$}  {:>material_w$}  {:>labour_w$}  {:>combined_w$}\n",
        "Milestone", material_h, labour_h, combined_h
    ));
    out.push_str(&"-".repeat(line_w));
    out.push('\n');

    for row in &report.rows {
        out.push_str(&format!(
            "{:<name_w$}  {:>material_w$}  {:>labour_w$}  {:>combined_w$}\n",
            row.milestone,
            format_amount(row.material_cost),
            format_amount(row.labour_cost),
            format_amount(row.combined_cost)
        ));
    }

    out.push_str(&"-".repeat(line_w));
    out.push('\n');
    out.push_str(&format!(
        "{:<name_w$}  {:>material_w$}  {:>labour_w$}  {:>combined_w$}\n",
        "Total",
        format_amount(report.total.material_cost),
        format_amount(report.total.labour_cost),
        format_amount(report.total.combined_cost)
    ));

    out
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the cost table as CSV.
///
/// Columns: Milestone, Total Material Cost (currency), Total Labour Cost
/// (currency), Combined Cost (currency). The last row is the Total row.
pub fn export_costs_csv(report: &CostReport) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "Milestone",
        &report.material_header(),
        &report.labour_header(),
        &report.combined_header(),
    ])?;

    for row in &report.rows {
        wtr.write_record([
            &row.milestone,
            &format_amount(row.material_cost),
            &format_amount(row.labour_cost),
            &format_amount(row.combined_cost),
        ])?;
    }

    wtr.write_record([
        "Total",
        &format_amount(report.total.material_cost),
        &format_amount(report.total.labour_cost),
        &format_amount(report.total.combined_cost),
    ])?;

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Markdown report ────────────────────────────────────────────────

/// Generate a Markdown cost report for sharing outside the terminal.
pub fn generate_markdown(report: &CostReport) -> String {
    let mut md = String::with_capacity(2048);

    md.push_str("# Milestone Cost Report\n\n");

    md.push_str("## Project\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    md.push_str(&format!("| Project | {} |\n", report.project_id));
    md.push_str(&format!("| Scope | {} |\n", report.scope));
    md.push_str(&format!(
        "| Fetched | {} |\n",
        report.fetched_at.format("%Y-%m-%d %H:%M UTC")
    ));
    md.push_str(&format!(
        "| Generated | {} |\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    md.push_str(&format!("| Currency | {} |\n", report.currency));
    md.push('\n');

    md.push_str("## Costs\n\n");
    md.push_str(&format!(
        "| Milestone | {} | {} | {} |\n",
        report.material_header(),
        report.labour_header(),
        report.combined_header()
    ));
    md.push_str("| --- | ---: | ---: | ---: |\n");
    for row in &report.rows {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            row.milestone,
            format_amount(row.material_cost),
            format_amount(row.labour_cost),
            format_amount(row.combined_cost)
        ));
    }
    md.push_str(&format!(
        "| **Total** | **{}** | **{}** | **{}** |\n",
        format_amount(report.total.material_cost),
        format_amount(report.total.labour_cost),
        format_amount(report.total.combined_cost)
    ));
    md.push('\n');

    md
}

// ─── Manifest ───────────────────────────────────────────────────────

/// Provenance record written alongside every exported bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotManifest {
    pub schema_version: u32,
    /// Content hash of the snapshot the bundle was built from.
    pub snapshot_id: String,
    pub project_id: String,
    pub fetched_at: chrono::DateTime<chrono::Utc>,
    pub exported_at: chrono::DateTime<chrono::Utc>,
    /// Scope as its dropdown value ("All" or one milestone).
    pub scope: String,
    pub currency: String,
    pub material_records: usize,
    pub labour_records: usize,
    pub totals: CostTotals,
}

/// Computes a deterministic content hash for a snapshot.
///
/// Two exports of byte-identical snapshot data share an id, so a changed id
/// always means the underlying records changed.
pub fn snapshot_id(snapshot: &ProjectSnapshot) -> Result<String> {
    let json =
        serde_json::to_string(snapshot).context("failed to serialize snapshot for hashing")?;
    let hash = blake3::hash(json.as_bytes());
    Ok(format!("{}", hash.to_hex()))
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Paths of the files written by [`save_report_artifacts`].
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub dir: PathBuf,
    pub manifest: PathBuf,
    pub costs_csv: PathBuf,
    pub report_markdown: PathBuf,
    pub snapshot_json: PathBuf,
}

/// Save the full export bundle for one report.
///
/// Creates a directory named `{project_id}_{timestamp}/` under `output_dir`
/// containing:
/// - `manifest.json` — schema version, snapshot id, scope, totals
/// - `costs.csv` — the four-column cost table
/// - `report.md` — the Markdown document
/// - `snapshot.json` — the records the figures were computed from
pub fn save_report_artifacts(
    snapshot: &ProjectSnapshot,
    report: &CostReport,
    output_dir: &Path,
) -> Result<ReportPaths> {
    let dirname = format!(
        "{}_{}",
        report.project_id,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let dir = output_dir.join(dirname);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create export dir: {}", dir.display()))?;

    let manifest = SnapshotManifest {
        schema_version: SCHEMA_VERSION,
        snapshot_id: snapshot_id(snapshot)?,
        project_id: report.project_id.clone(),
        fetched_at: report.fetched_at,
        exported_at: report.generated_at,
        scope: report.scope.as_str().to_string(),
        currency: report.currency.clone(),
        material_records: snapshot.materials.len(),
        labour_records: snapshot.labour.len(),
        totals: report.total,
    };
    let manifest_path = dir.join("manifest.json");
    let manifest_json =
        serde_json::to_string_pretty(&manifest).context("failed to serialize manifest")?;
    std::fs::write(&manifest_path, manifest_json)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    let costs_csv = dir.join("costs.csv");
    std::fs::write(&costs_csv, export_costs_csv(report)?)
        .with_context(|| format!("failed to write {}", costs_csv.display()))?;

    let report_markdown = dir.join("report.md");
    std::fs::write(&report_markdown, generate_markdown(report))
        .with_context(|| format!("failed to write {}", report_markdown.display()))?;

    let snapshot_json = dir.join("snapshot.json");
    let snapshot_pretty =
        serde_json::to_string_pretty(snapshot).context("failed to serialize snapshot")?;
    std::fs::write(&snapshot_json, snapshot_pretty)
        .with_context(|| format!("failed to write {}", snapshot_json.display()))?;

    Ok(ReportPaths {
        dir,
        manifest: manifest_path,
        costs_csv,
        report_markdown,
        snapshot_json,
    })
}

/// Load a bundle's manifest, rejecting unknown schema versions.
pub fn load_manifest(dir: &Path) -> Result<SnapshotManifest> {
    let path = dir.join("manifest.json");
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let manifest: SnapshotManifest =
        serde_json::from_str(&json).context("failed to deserialize manifest")?;
    if manifest.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            manifest.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(manifest)
}
