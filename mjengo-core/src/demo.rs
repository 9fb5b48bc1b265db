//! Demo snapshot — deterministic sample data for tests, benches, and `--demo`.
//!
//! One project with materials and labour spread over four predefined
//! milestones plus one user-added tag ("Landscaping"), chosen so every
//! aggregation rule is visible: a milestone with both sides, a labour-only
//! milestone (Roofing), a materials-only user tag, and a record with
//! delivery history.
//!
//! Hand-calculated totals (all figures KSH):
//!
//! Materials:
//!   - Foundations: Cement 200 x 950 = 190,000; Ballast 7 x 28,000 = 196,000 -> 386,000
//!   - Slab: Steel bars 120 x 1,450 = 174,000; Cement 150 x 950 = 142,500 -> 316,500
//!   - Walling: Machine-cut stones 3,000 x 45 = 135,000
//!   - Landscaping: Red soil 4 x 9,000 = 36,000
//!   - materials total: 873,500
//!
//! Labour:
//!   - Foundations: 5,000 + 7,000 + 4,500 = 16,500
//!   - Slab: 6,000 + 4,000 + 4,000 = 14,000
//!   - Roofing: 7,500 + 5,000 + 2,500 = 15,000
//!   - labour total: 45,500
//!
//! Combined grand total: 919,000.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::data::ProjectSnapshot;
use crate::domain::{
    LabourRecord, MaterialHistoryEntry, MaterialRecord, ProjectRecord, UnitType, WorkerPay,
};

/// The project the demo snapshot belongs to.
pub fn demo_project() -> ProjectRecord {
    ProjectRecord {
        id: "demo-project".into(),
        name: "Riverside Bungalow".into(),
        description: "Three bedroom main house with external works".into(),
        start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
    }
}

/// The canonical demo snapshot. Same output on every call.
pub fn demo_snapshot() -> ProjectSnapshot {
    ProjectSnapshot {
        project_id: "demo-project".into(),
        fetched_at: Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap(),
        materials: demo_materials(),
        labour: demo_labour(),
    }
}

fn demo_materials() -> Vec<MaterialRecord> {
    vec![
        MaterialRecord {
            id: "demo-mat-01".into(),
            name: "Cement".into(),
            quantity: 200.0,
            unit_price: 950.0,
            total_price: 190_000.0,
            unit_type: UnitType::Bags,
            milestone: "Foundations".into(),
            history: vec![
                MaterialHistoryEntry {
                    date: Utc.with_ymd_and_hms(2024, 2, 5, 9, 30, 0).unwrap(),
                    name: "Cement".into(),
                    quantity: 120.0,
                    unit_price: 950.0,
                    total_price: 114_000.0,
                    unit_type: UnitType::Bags,
                    milestone: "Foundations".into(),
                },
                MaterialHistoryEntry {
                    date: Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap(),
                    name: "Cement".into(),
                    quantity: 80.0,
                    unit_price: 950.0,
                    total_price: 76_000.0,
                    unit_type: UnitType::Bags,
                    milestone: "Foundations".into(),
                },
            ],
        },
        MaterialRecord {
            id: "demo-mat-02".into(),
            name: "Ballast".into(),
            quantity: 7.0,
            unit_price: 28_000.0,
            total_price: 196_000.0,
            unit_type: UnitType::Lorries,
            milestone: "Foundations".into(),
            history: vec![],
        },
        MaterialRecord {
            id: "demo-mat-03".into(),
            name: "Steel bars".into(),
            quantity: 120.0,
            unit_price: 1_450.0,
            total_price: 174_000.0,
            unit_type: UnitType::Pieces,
            milestone: "Slab".into(),
            history: vec![],
        },
        MaterialRecord {
            id: "demo-mat-04".into(),
            name: "Cement".into(),
            quantity: 150.0,
            unit_price: 950.0,
            total_price: 142_500.0,
            unit_type: UnitType::Bags,
            milestone: "Slab".into(),
            history: vec![],
        },
        MaterialRecord {
            id: "demo-mat-05".into(),
            name: "Machine-cut stones".into(),
            quantity: 3_000.0,
            unit_price: 45.0,
            total_price: 135_000.0,
            unit_type: UnitType::Pieces,
            milestone: "Walling".into(),
            history: vec![],
        },
        MaterialRecord {
            id: "demo-mat-06".into(),
            name: "Red soil".into(),
            quantity: 4.0,
            unit_price: 9_000.0,
            total_price: 36_000.0,
            unit_type: UnitType::Lorries,
            milestone: "Landscaping".into(),
            history: vec![],
        },
    ]
}

fn demo_labour() -> Vec<LabourRecord> {
    vec![
        LabourRecord {
            id: "demo-lab-01".into(),
            date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            milestone: "Foundations".into(),
            labour_type: "Foundation Digging".into(),
            main_supervisor: WorkerPay {
                name: "Juma".into(),
                pay: 5_000.0,
            },
            fundis: vec![
                WorkerPay {
                    name: "Mwangi".into(),
                    pay: 3_500.0,
                },
                WorkerPay {
                    name: "Otieno".into(),
                    pay: 3_500.0,
                },
            ],
            helpers: vec![
                WorkerPay {
                    name: "Baraka".into(),
                    pay: 1_500.0,
                },
                WorkerPay {
                    name: "Amina".into(),
                    pay: 1_500.0,
                },
                WorkerPay {
                    name: "Kipchoge".into(),
                    pay: 1_500.0,
                },
            ],
            total_fundis_pay: 7_000.0,
            total_helpers_pay: 4_500.0,
            total_pay: 16_500.0,
        },
        LabourRecord {
            id: "demo-lab-02".into(),
            date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            milestone: "Slab".into(),
            labour_type: "Koroga".into(),
            main_supervisor: WorkerPay {
                name: "Juma".into(),
                pay: 6_000.0,
            },
            fundis: vec![WorkerPay {
                name: "Mwangi".into(),
                pay: 4_000.0,
            }],
            helpers: vec![
                WorkerPay {
                    name: "Baraka".into(),
                    pay: 2_000.0,
                },
                WorkerPay {
                    name: "Amina".into(),
                    pay: 2_000.0,
                },
            ],
            total_fundis_pay: 4_000.0,
            total_helpers_pay: 4_000.0,
            total_pay: 14_000.0,
        },
        LabourRecord {
            id: "demo-lab-03".into(),
            date: NaiveDate::from_ymd_opt(2024, 8, 20).unwrap(),
            milestone: "Roofing".into(),
            labour_type: "Rinto".into(),
            main_supervisor: WorkerPay {
                name: "Hassan".into(),
                pay: 7_500.0,
            },
            fundis: vec![WorkerPay {
                name: "Omari".into(),
                pay: 5_000.0,
            }],
            helpers: vec![WorkerPay {
                name: "Baraka".into(),
                pay: 2_500.0,
            }],
            total_fundis_pay: 5_000.0,
            total_helpers_pay: 2_500.0,
            total_pay: 15_000.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{audit_totals, grand_total, summarize_all, summarize_milestone};
    use crate::domain::{known_milestones, MilestoneFilter, PREDEFINED_MILESTONES};

    /// Golden test against the hand-calculated totals in the module doc.
    #[test]
    fn golden_demo_totals() {
        let snapshot = demo_snapshot();
        let total = grand_total(&snapshot.materials, &snapshot.labour, &MilestoneFilter::All);

        assert_eq!(total.material_cost, 873_500.0);
        assert_eq!(total.labour_cost, 45_500.0);
        assert_eq!(total.combined_cost, 919_000.0);

        let foundations =
            summarize_milestone("Foundations", &snapshot.materials, &snapshot.labour);
        assert_eq!(foundations.material_cost, 386_000.0);
        assert_eq!(foundations.labour_cost, 16_500.0);
        assert_eq!(foundations.combined_cost, 402_500.0);

        let slab = summarize_milestone("Slab", &snapshot.materials, &snapshot.labour);
        assert_eq!(slab.combined_cost, 330_500.0);

        let roofing = summarize_milestone("Roofing", &snapshot.materials, &snapshot.labour);
        assert_eq!(roofing.material_cost, 0.0);
        assert_eq!(roofing.labour_cost, 15_000.0);

        let landscaping =
            summarize_milestone("Landscaping", &snapshot.materials, &snapshot.labour);
        assert_eq!(landscaping.material_cost, 36_000.0);
        assert_eq!(landscaping.labour_cost, 0.0);
    }

    #[test]
    fn demo_known_milestones_end_with_landscaping() {
        let snapshot = demo_snapshot();
        let known = known_milestones(&snapshot.materials, &snapshot.labour);
        assert_eq!(known.len(), PREDEFINED_MILESTONES.len() + 1);
        assert_eq!(known.last().map(String::as_str), Some("Landscaping"));
    }

    #[test]
    fn demo_summaries_cover_every_known_milestone() {
        let snapshot = demo_snapshot();
        let known = known_milestones(&snapshot.materials, &snapshot.labour);
        let summaries = summarize_all(&snapshot.materials, &snapshot.labour, &known);
        assert_eq!(summaries.len(), known.len());
        for (summary, milestone) in summaries.iter().zip(known.iter()) {
            assert_eq!(&summary.milestone, milestone);
        }
    }

    /// The demo must be reproducible: identical records and totals on every call.
    #[test]
    fn demo_snapshot_is_deterministic() {
        let a = demo_snapshot();
        let b = demo_snapshot();
        assert_eq!(a.fetched_at, b.fetched_at);
        assert_eq!(a.materials.len(), b.materials.len());

        let ta = grand_total(&a.materials, &a.labour, &MilestoneFilter::All);
        let tb = grand_total(&b.materials, &b.labour, &MilestoneFilter::All);
        assert_eq!(ta, tb);
    }

    /// Demo data keeps stored totals consistent with their parts.
    #[test]
    fn demo_snapshot_passes_audit() {
        let snapshot = demo_snapshot();
        assert!(audit_totals(&snapshot.materials, &snapshot.labour).is_empty());
    }
}
