//! Mjengo CLI — fetch, summarize, and export construction project costs.
//!
//! Commands:
//! - `fetch` — pull a project's materials and labour from the site-office
//!   backend and save them as a snapshot file
//! - `projects` — list the projects visible to the configured token
//! - `summary` — render the milestone cost table for a snapshot
//! - `export` — write the CSV/Markdown/manifest bundle for a snapshot
//! - `materials` — list material records, with name search and history
//! - `labour` — list labour entries and crew pay
//! - `stock` — list issued and remaining stock movements
//!
//! Snapshot-reading commands accept `--demo` for a built-in sample project,
//! so the whole reporting path works without a backend.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mjengo_core::aggregate::{audit_totals, filter_labour, search_materials};
use mjengo_core::data::{load_snapshot, save_snapshot, ApiClient, ProjectSnapshot, RecordSource};
use mjengo_core::demo::demo_snapshot;
use mjengo_core::domain::MilestoneFilter;
use mjengo_reports::{
    render_console_table, render_issued_table, render_labour_table, render_materials_table,
    render_projects_table, render_remaining_table, save_report_artifacts, CostReport,
};

mod config;

use config::AppConfig;

#[derive(Parser)]
#[command(
    name = "mjengo",
    about = "Mjengo CLI — construction project cost tracking and reports"
)]
struct Cli {
    /// Path to a config file. Defaults to ./mjengo.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (debug level). RUST_LOG overrides this.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a project's records from the backend and save a snapshot file.
    Fetch {
        /// Project id to fetch.
        #[arg(long)]
        project: String,

        /// Snapshot output path. Defaults to {project}.json.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the projects visible to the configured token.
    Projects,
    /// Render the milestone cost table for a snapshot.
    Summary {
        /// Path to a snapshot file saved by fetch.
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Use the built-in demo project instead of a snapshot file.
        #[arg(long, default_value_t = false)]
        demo: bool,

        /// Restrict to one milestone (exact label). Defaults to all.
        #[arg(long)]
        milestone: Option<String>,

        /// Currency label for column headers. Overrides the config file.
        #[arg(long)]
        currency: Option<String>,

        /// Recompute stored totals and report drifted records.
        #[arg(long, default_value_t = false)]
        audit: bool,
    },
    /// Write the CSV/Markdown/manifest export bundle for a snapshot.
    Export {
        /// Path to a snapshot file saved by fetch.
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Use the built-in demo project instead of a snapshot file.
        #[arg(long, default_value_t = false)]
        demo: bool,

        /// Restrict to one milestone (exact label). Defaults to all.
        #[arg(long)]
        milestone: Option<String>,

        /// Currency label for column headers. Overrides the config file.
        #[arg(long)]
        currency: Option<String>,

        /// Output directory for the bundle. Defaults to ./exports.
        #[arg(long, default_value = "exports")]
        out: PathBuf,
    },
    /// List material records.
    Materials {
        /// Path to a snapshot file saved by fetch.
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Use the built-in demo project instead of a snapshot file.
        #[arg(long, default_value_t = false)]
        demo: bool,

        /// Restrict to one milestone (exact label). Defaults to all.
        #[arg(long)]
        milestone: Option<String>,

        /// Keep only materials whose name contains this text (case folded).
        #[arg(long)]
        name: Option<String>,

        /// Show per-delivery history under each record.
        #[arg(long, default_value_t = false)]
        history: bool,
    },
    /// List labour entries and crew pay.
    Labour {
        /// Path to a snapshot file saved by fetch.
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Use the built-in demo project instead of a snapshot file.
        #[arg(long, default_value_t = false)]
        demo: bool,

        /// Restrict to one milestone (exact label). Defaults to all.
        #[arg(long)]
        milestone: Option<String>,
    },
    /// List issued and remaining stock recorded by supervisors.
    Stock,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = AppConfig::resolve(cli.config.as_deref())?;
    tracing::debug!(base_url = %config.api.base_url, "config resolved");

    match cli.command {
        Commands::Fetch { project, out } => {
            let client = api_client(&config);
            run_fetch(&client, &project, out)
        }
        Commands::Projects => {
            let client = api_client(&config);
            run_projects(&client)
        }
        Commands::Summary {
            snapshot,
            demo,
            milestone,
            currency,
            audit,
        } => {
            let snapshot = load_records(snapshot.as_deref(), demo)?;
            let filter = milestone_filter(milestone.as_deref());
            let currency = currency.unwrap_or(config.report.currency);
            run_summary(&snapshot, &filter, &currency, audit)
        }
        Commands::Export {
            snapshot,
            demo,
            milestone,
            currency,
            out,
        } => {
            let snapshot = load_records(snapshot.as_deref(), demo)?;
            let filter = milestone_filter(milestone.as_deref());
            let currency = currency.unwrap_or(config.report.currency);
            run_export(&snapshot, &filter, &currency, &out)
        }
        Commands::Materials {
            snapshot,
            demo,
            milestone,
            name,
            history,
        } => {
            let snapshot = load_records(snapshot.as_deref(), demo)?;
            let filter = milestone_filter(milestone.as_deref());
            run_materials(
                &snapshot,
                &filter,
                name.as_deref().unwrap_or(""),
                history,
                &config.report.currency,
            )
        }
        Commands::Labour {
            snapshot,
            demo,
            milestone,
        } => {
            let snapshot = load_records(snapshot.as_deref(), demo)?;
            let filter = milestone_filter(milestone.as_deref());
            run_labour(&snapshot, &filter, &config.report.currency)
        }
        Commands::Stock => {
            let client = api_client(&config);
            run_stock(&client)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn api_client(config: &AppConfig) -> ApiClient {
    ApiClient::new(
        &config.api.base_url,
        config.api.token.clone(),
        config.api.timeout_secs,
    )
}

/// Resolve the records a read command operates on.
fn load_records(snapshot: Option<&Path>, demo: bool) -> Result<ProjectSnapshot> {
    match (snapshot, demo) {
        (Some(_), true) => bail!("--snapshot and --demo are mutually exclusive"),
        (Some(path), false) => Ok(load_snapshot(path)?),
        (None, true) => Ok(demo_snapshot()),
        (None, false) => bail!("one of --snapshot or --demo is required"),
    }
}

/// Maps the optional --milestone flag onto a filter. The literal "All" and
/// an omitted flag both select every milestone.
fn milestone_filter(milestone: Option<&str>) -> MilestoneFilter {
    match milestone {
        Some(value) => MilestoneFilter::parse(value),
        None => MilestoneFilter::All,
    }
}

fn run_fetch(source: &dyn RecordSource, project: &str, out: Option<PathBuf>) -> Result<()> {
    let snapshot = source.fetch_snapshot(project)?;
    let path = out.unwrap_or_else(|| PathBuf::from(format!("{project}.json")));
    save_snapshot(&path, &snapshot)?;

    println!(
        "Fetched {} material record(s) and {} labour entry(ies) from {}.",
        snapshot.materials.len(),
        snapshot.labour.len(),
        source.name()
    );
    println!("Snapshot saved to: {}", path.display());
    Ok(())
}

fn run_projects(source: &dyn RecordSource) -> Result<()> {
    let projects = source.fetch_projects()?;
    if projects.is_empty() {
        println!("No projects visible.");
        return Ok(());
    }
    print!("{}", render_projects_table(&projects));
    Ok(())
}

fn run_summary(
    snapshot: &ProjectSnapshot,
    filter: &MilestoneFilter,
    currency: &str,
    audit: bool,
) -> Result<()> {
    let report = CostReport::build(snapshot, filter, currency);

    println!();
    println!("=== Milestone Costs ===");
    println!("Project:   {}", report.project_id);
    println!("Scope:     {}", report.scope);
    println!(
        "Fetched:   {}",
        report.fetched_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!();
    print!("{}", render_console_table(&report));

    if audit {
        let mismatches = audit_totals(&snapshot.materials, &snapshot.labour);
        println!();
        if mismatches.is_empty() {
            println!("Audit: stored totals match their recomputed values.");
        } else {
            println!(
                "Audit: {} stored total(s) drift from their parts:",
                mismatches.len()
            );
            for m in &mismatches {
                println!(
                    "  {:?} {} {}: stored {:.2}, recomputed {:.2} (drift {:+.2})",
                    m.kind,
                    m.record_id,
                    m.field,
                    m.stored,
                    m.recomputed,
                    m.drift()
                );
            }
        }
    }

    Ok(())
}

fn run_export(
    snapshot: &ProjectSnapshot,
    filter: &MilestoneFilter,
    currency: &str,
    out: &Path,
) -> Result<()> {
    let report = CostReport::build(snapshot, filter, currency);
    let paths = save_report_artifacts(snapshot, &report, out)?;

    println!(
        "Exported {} milestone row(s) for scope {}.",
        report.rows.len(),
        report.scope
    );
    println!("Artifacts saved to: {}", paths.dir.display());
    Ok(())
}

fn run_materials(
    snapshot: &ProjectSnapshot,
    filter: &MilestoneFilter,
    name_query: &str,
    history: bool,
    currency: &str,
) -> Result<()> {
    let selected = search_materials(&snapshot.materials, filter, name_query);
    print!("{}", render_materials_table(&selected, currency, history));
    Ok(())
}

fn run_labour(snapshot: &ProjectSnapshot, filter: &MilestoneFilter, currency: &str) -> Result<()> {
    let selected = filter_labour(&snapshot.labour, filter);
    print!("{}", render_labour_table(&selected, currency));
    Ok(())
}

fn run_stock(source: &dyn RecordSource) -> Result<()> {
    let issued = source.fetch_issued_materials()?;
    let remaining = source.fetch_remaining_materials()?;

    if issued.is_empty() && remaining.is_empty() {
        println!("No stock movements recorded.");
        return Ok(());
    }

    println!();
    println!("=== Issued Materials ===");
    print!("{}", render_issued_table(&issued));
    println!();
    println!("=== Remaining Stock ===");
    print!("{}", render_remaining_table(&remaining));
    Ok(())
}
