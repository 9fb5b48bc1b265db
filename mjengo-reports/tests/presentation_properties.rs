//! Property tests for the presentation contract: the console table, the CSV
//! export, and the Markdown document are renderings of one report and must
//! print identical formatted figures for any row set.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use mjengo_core::aggregate::{CostTotals, MilestoneCostSummary};
use mjengo_core::domain::MilestoneFilter;
use mjengo_reports::{
    export_costs_csv, format_amount, generate_markdown, render_console_table, CostReport,
};

fn arb_amount() -> impl Strategy<Value = f64> {
    (0.0..1_000_000.0_f64).prop_map(|v| (v * 100.0).round() / 100.0)
}

fn arb_row() -> impl Strategy<Value = MilestoneCostSummary> {
    ("[A-Z][a-z]{2,9}", arb_amount(), arb_amount()).prop_map(
        |(milestone, material_cost, labour_cost)| MilestoneCostSummary {
            milestone,
            material_cost,
            labour_cost,
            combined_cost: material_cost + labour_cost,
        },
    )
}

/// A report with the given rows and a total summing them, as `build` would
/// produce for matching records.
fn report_with(rows: Vec<MilestoneCostSummary>) -> CostReport {
    let total = CostTotals {
        material_cost: rows.iter().map(|r| r.material_cost).sum(),
        labour_cost: rows.iter().map(|r| r.labour_cost).sum(),
        combined_cost: rows.iter().map(|r| r.combined_cost).sum(),
    };
    CostReport {
        project_id: "prop-project".to_string(),
        fetched_at: Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap(),
        generated_at: Utc.with_ymd_and_hms(2024, 9, 1, 9, 0, 0).unwrap(),
        scope: MilestoneFilter::All,
        currency: "KSH".to_string(),
        rows,
        total,
    }
}

proptest! {
    /// Every figure of every row appears, identically formatted, in all
    /// three presentations, along with the grand total.
    #[test]
    fn every_presentation_prints_every_figure(
        rows in prop::collection::vec(arb_row(), 1..10),
    ) {
        let report = report_with(rows);
        let table = render_console_table(&report);
        let csv = export_costs_csv(&report).unwrap();
        let md = generate_markdown(&report);

        for row in &report.rows {
            for amount in [row.material_cost, row.labour_cost, row.combined_cost] {
                let formatted = format_amount(amount);
                prop_assert!(table.contains(&formatted));
                prop_assert!(csv.contains(&formatted));
                prop_assert!(md.contains(&formatted));
            }
        }
        let total = format_amount(report.total.combined_cost);
        prop_assert!(table.contains(&total));
        prop_assert!(csv.contains(&total));
        prop_assert!(md.contains(&total));
    }

    /// The CSV is exactly header + one line per row + the Total line.
    #[test]
    fn csv_line_count_tracks_rows(
        rows in prop::collection::vec(arb_row(), 0..20),
    ) {
        let row_count = rows.len();
        let report = report_with(rows);
        let csv = export_costs_csv(&report).unwrap();
        prop_assert_eq!(csv.lines().count(), row_count + 2);
    }

    /// Amounts always print with exactly two decimals and read back to the
    /// same cent.
    #[test]
    fn format_amount_is_two_decimal_fixed_point(amount in arb_amount()) {
        let formatted = format_amount(amount);
        let (_, decimals) = formatted.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 2);

        let parsed: f64 = formatted.parse().unwrap();
        prop_assert!((parsed - amount).abs() < 0.005);
    }
}
