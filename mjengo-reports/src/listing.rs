//! Record listing tables for terminal display.
//!
//! Listings render whatever slice they are given; milestone and name
//! filtering happen upstream in `mjengo_core::aggregate`.

use mjengo_core::domain::{
    IssuedMaterialRecord, LabourRecord, MaterialRecord, ProjectRecord, RemainingMaterialRecord,
};

use crate::report::format_amount;

/// Renders a materials table, one row per record, with an optional delivery
/// history line per batch.
pub fn render_materials_table(
    materials: &[&MaterialRecord],
    currency: &str,
    show_history: bool,
) -> String {
    let total_h = format!("Total ({currency})");
    let name_w = column_width("Name", materials.iter().map(|m| m.name.len()));
    let milestone_w = column_width("Milestone", materials.iter().map(|m| m.milestone.len()));
    let total_w = total_h.len().max(12);
    let line_w = name_w + milestone_w + 10 + 8 + 12 + total_w + 10;

    let mut out = String::with_capacity(1024);
    out.push_str(&format!(
        "{:<name_w$}  {:<milestone_w$}  {:>10}  {:<8}  {:>12}  {:>total_w$}\n",
        "Name", "Milestone", "Qty", "Unit", "Unit Price", total_h
    ));
    out.push_str(&"-".repeat(line_w));
    out.push('\n');

    for material in materials {
        out.push_str(&format!(
            "{:<name_w$}  {:<milestone_w$}  {:>10}  {:<8}  {:>12}  {:>total_w$}\n",
            material.name,
            material.milestone,
            material.quantity,
            material.unit_type.as_str(),
            format_amount(material.unit_price),
            format_amount(material.total_price)
        ));
        if show_history {
            for entry in &material.history {
                out.push_str(&format!(
                    "    + {}: {} x {} = {}\n",
                    entry.date.format("%Y-%m-%d"),
                    entry.quantity,
                    format_amount(entry.unit_price),
                    format_amount(entry.total_price)
                ));
            }
        }
    }

    // Explicit +0.0 seed: f64's `iter::Sum` seeds with -0.0 on newer
    // toolchains, which would print the empty-list total as "-0.00".
    let total: f64 = materials.iter().map(|m| m.total_price).fold(0.0, |acc, p| acc + p);
    out.push_str(&format!(
        "\n{} record(s), total {} {currency}\n",
        materials.len(),
        format_amount(total)
    ));

    out
}

/// Renders a labour table, one row per entry.
pub fn render_labour_table(labour: &[&LabourRecord], currency: &str) -> String {
    let total_h = format!("Total Pay ({currency})");
    let milestone_w = column_width("Milestone", labour.iter().map(|l| l.milestone.len()));
    let type_w = column_width("Type", labour.iter().map(|l| l.labour_type.len()));
    let supervisor_w = column_width(
        "Supervisor",
        labour.iter().map(|l| l.main_supervisor.name.len()),
    );
    let total_w = total_h.len().max(12);
    let line_w = 10 + milestone_w + type_w + supervisor_w + 4 + 12 + 12 + total_w + 14;

    let mut out = String::with_capacity(1024);
    out.push_str(&format!(
        "{:<10}  {:<milestone_w$}  {:<type_w$}  {:<supervisor_w$}  {:>4}  {:>12}  {:>12}  {:>total_w$}\n",
        "Date", "Milestone", "Type", "Supervisor", "Crew", "Fundis Pay", "Helpers Pay", total_h
    ));
    out.push_str(&"-".repeat(line_w));
    out.push('\n');

    for entry in labour {
        out.push_str(&format!(
            "{:<10}  {:<milestone_w$}  {:<type_w$}  {:<supervisor_w$}  {:>4}  {:>12}  {:>12}  {:>total_w$}\n",
            entry.date.to_string(),
            entry.milestone,
            entry.labour_type,
            entry.main_supervisor.name,
            entry.crew_size(),
            format_amount(entry.total_fundis_pay),
            format_amount(entry.total_helpers_pay),
            format_amount(entry.total_pay)
        ));
    }

    let total: f64 = labour.iter().map(|l| l.total_pay).sum();
    out.push_str(&format!(
        "\n{} entry(ies), total {} {currency}\n",
        labour.len(),
        format_amount(total)
    ));

    out
}

/// Renders a projects table.
pub fn render_projects_table(projects: &[ProjectRecord]) -> String {
    let name_w = column_width("Name", projects.iter().map(|p| p.name.len()));

    let mut out = String::with_capacity(512);
    out.push_str(&format!(
        "{:<name_w$}  {:<10}  {:<10}  {:>6}\n",
        "Name", "Start", "End", "Days"
    ));
    out.push_str(&"-".repeat(name_w + 10 + 10 + 6 + 6));
    out.push('\n');

    for project in projects {
        out.push_str(&format!(
            "{:<name_w$}  {:<10}  {:<10}  {:>6}\n",
            project.name,
            project.start_date.to_string(),
            project.end_date.to_string(),
            project.planned_days()
        ));
    }

    out
}

/// Renders issued-stock movements, one row per issue.
///
/// Stock records carry ids, not names; resolving them against the material
/// list is the reader's join, same as in the backend's own views.
pub fn render_issued_table(issued: &[IssuedMaterialRecord]) -> String {
    let worker_w = column_width("Worker", issued.iter().map(|i| i.worker_id.len()));
    let material_w = column_width("Material", issued.iter().map(|i| i.material_id.len()));

    let mut out = String::with_capacity(512);
    out.push_str(&format!(
        "{:<worker_w$}  {:<material_w$}  {:>10}  {:>5}\n",
        "Worker", "Material", "Qty", "Round"
    ));
    out.push_str(&"-".repeat(worker_w + material_w + 10 + 5 + 6));
    out.push('\n');

    for entry in issued {
        out.push_str(&format!(
            "{:<worker_w$}  {:<material_w$}  {:>10}  {:>5}\n",
            entry.worker_id, entry.material_id, entry.quantity, entry.round
        ));
    }

    out
}

/// Renders remaining-stock entries, one row per material.
pub fn render_remaining_table(remaining: &[RemainingMaterialRecord]) -> String {
    let material_w = column_width("Material", remaining.iter().map(|r| r.material_id.len()));

    let mut out = String::with_capacity(256);
    out.push_str(&format!("{:<material_w$}  {:>10}\n", "Material", "Qty"));
    out.push_str(&"-".repeat(material_w + 10 + 2));
    out.push('\n');

    for entry in remaining {
        out.push_str(&format!(
            "{:<material_w$}  {:>10}\n",
            entry.material_id, entry.quantity
        ));
    }

    out
}

fn column_width(header: &str, names: impl Iterator<Item = usize>) -> usize {
    names.chain([header.len()]).max().unwrap_or(header.len())
}
