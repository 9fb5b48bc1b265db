//! Property tests for aggregation invariants.
//!
//! Uses proptest to verify:
//! 1. Sum-of-parts — per-milestone summaries add up to the all-filter grand total
//! 2. Filter identity — a specific filter's grand total is bit-identical to that
//!    milestone's summary
//! 3. Combined identity — combined_cost = material_cost + labour_cost, always
//! 4. Idempotence — same records in, same summaries out, inputs untouched
//! 5. Case sensitivity — milestone matching never folds case; name search always does

use proptest::prelude::*;

use mjengo_core::aggregate::{grand_total, name_matches, summarize_all, summarize_milestone};
use mjengo_core::domain::{
    known_milestones, LabourRecord, MaterialRecord, MilestoneFilter, UnitType, WorkerPay,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_amount() -> impl Strategy<Value = f64> {
    (0.0..500_000.0_f64).prop_map(|v| (v * 100.0).round() / 100.0)
}

fn arb_milestone() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(vec![
            "Foundations",
            "Slab",
            "Walling",
            "Roofing",
            "Pluster",
        ])
        .prop_map(String::from),
        1 => Just("Custom Phase X".to_string()),
        1 => "[A-Za-z][A-Za-z ]{0,10}",
    ]
}

fn arb_material() -> impl Strategy<Value = MaterialRecord> {
    ("[a-z]{3,10}", arb_amount(), arb_amount(), arb_milestone()).prop_map(
        |(name, unit_price, total_price, milestone)| MaterialRecord {
            id: format!("m-{name}"),
            name,
            quantity: 1.0,
            unit_price,
            // Independent of quantity * unit_price on purpose: aggregation
            // must read the stored figure.
            total_price,
            unit_type: UnitType::Pieces,
            milestone,
            history: vec![],
        },
    )
}

fn arb_labour() -> impl Strategy<Value = LabourRecord> {
    ("[a-z]{3,10}", arb_amount(), arb_milestone()).prop_map(|(name, total_pay, milestone)| {
        LabourRecord {
            id: format!("l-{name}"),
            date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            milestone,
            labour_type: "Koroga".into(),
            main_supervisor: WorkerPay {
                name,
                pay: total_pay,
            },
            fundis: vec![],
            helpers: vec![],
            total_fundis_pay: 0.0,
            total_helpers_pay: 0.0,
            total_pay,
        }
    })
}

// ── 1. Sum of Parts ──────────────────────────────────────────────────

proptest! {
    /// With the all filter, the grand total equals the column-wise sum of the
    /// per-milestone summaries, and equals the plain sum over every record.
    #[test]
    fn all_filter_total_is_sum_of_parts(
        materials in prop::collection::vec(arb_material(), 0..20),
        labour in prop::collection::vec(arb_labour(), 0..12),
    ) {
        let known = known_milestones(&materials, &labour);
        let summaries = summarize_all(&materials, &labour, &known);
        let total = grand_total(&materials, &labour, &MilestoneFilter::All);

        let material_parts: f64 = summaries.iter().map(|s| s.material_cost).sum();
        let labour_parts: f64 = summaries.iter().map(|s| s.labour_cost).sum();
        prop_assert!((material_parts - total.material_cost).abs() < 1e-6);
        prop_assert!((labour_parts - total.labour_cost).abs() < 1e-6);

        let material_plain: f64 = materials.iter().map(|m| m.total_price).sum();
        let labour_plain: f64 = labour.iter().map(|l| l.total_pay).sum();
        prop_assert_eq!(total.material_cost, material_plain);
        prop_assert_eq!(total.labour_cost, labour_plain);
    }

    /// One summary per known milestone, in the known list's order.
    #[test]
    fn summaries_align_with_known_milestones(
        materials in prop::collection::vec(arb_material(), 0..20),
        labour in prop::collection::vec(arb_labour(), 0..12),
    ) {
        let known = known_milestones(&materials, &labour);
        let summaries = summarize_all(&materials, &labour, &known);

        prop_assert_eq!(summaries.len(), known.len());
        for (summary, milestone) in summaries.iter().zip(known.iter()) {
            prop_assert_eq!(&summary.milestone, milestone);
        }

        // Every record's tag has a row, so nothing can be dropped.
        for m in &materials {
            prop_assert!(known.contains(&m.milestone));
        }
        for l in &labour {
            prop_assert!(known.contains(&l.milestone));
        }
    }
}

// ── 2. Filter Identity ───────────────────────────────────────────────

proptest! {
    /// Selecting one milestone gives a grand total bit-identical to that
    /// milestone's summary.
    #[test]
    fn specific_filter_total_is_bit_identical_to_summary(
        materials in prop::collection::vec(arb_material(), 0..20),
        labour in prop::collection::vec(arb_labour(), 0..12),
    ) {
        let known = known_milestones(&materials, &labour);
        for milestone in &known {
            let summary = summarize_milestone(milestone, &materials, &labour);
            let total = grand_total(
                &materials,
                &labour,
                &MilestoneFilter::Only(milestone.clone()),
            );
            prop_assert_eq!(total.material_cost.to_bits(), summary.material_cost.to_bits());
            prop_assert_eq!(total.labour_cost.to_bits(), summary.labour_cost.to_bits());
            prop_assert_eq!(total.combined_cost.to_bits(), summary.combined_cost.to_bits());
        }
    }
}

// ── 3. Combined Identity ─────────────────────────────────────────────

proptest! {
    /// combined_cost is exactly material_cost + labour_cost in every summary
    /// and every grand total.
    #[test]
    fn combined_is_material_plus_labour(
        materials in prop::collection::vec(arb_material(), 0..20),
        labour in prop::collection::vec(arb_labour(), 0..12),
    ) {
        let known = known_milestones(&materials, &labour);
        for summary in summarize_all(&materials, &labour, &known) {
            prop_assert_eq!(summary.combined_cost, summary.material_cost + summary.labour_cost);
        }

        let total = grand_total(&materials, &labour, &MilestoneFilter::All);
        prop_assert_eq!(total.combined_cost, total.material_cost + total.labour_cost);
    }
}

// ── 4. Idempotence ───────────────────────────────────────────────────

proptest! {
    /// Repeated calls over the same records give identical output and leave
    /// the inputs untouched.
    #[test]
    fn aggregation_is_idempotent(
        materials in prop::collection::vec(arb_material(), 0..20),
        labour in prop::collection::vec(arb_labour(), 0..12),
    ) {
        let materials_before = materials.clone();
        let labour_before = labour.clone();

        let known = known_milestones(&materials, &labour);
        let first = summarize_all(&materials, &labour, &known);
        let second = summarize_all(&materials, &labour, &known);
        prop_assert_eq!(first, second);

        let t1 = grand_total(&materials, &labour, &MilestoneFilter::All);
        let t2 = grand_total(&materials, &labour, &MilestoneFilter::All);
        prop_assert_eq!(t1, t2);

        prop_assert_eq!(materials, materials_before);
        prop_assert_eq!(labour, labour_before);
    }
}

// ── 5. Case Rules ────────────────────────────────────────────────────

proptest! {
    /// Milestone matching never folds case: records tagged with a
    /// case-variant spelling contribute nothing to the original tag.
    #[test]
    fn milestone_matching_never_folds_case(amount in arb_amount()) {
        let materials = vec![MaterialRecord {
            id: "m-case".into(),
            name: "Iron sheets".into(),
            quantity: 1.0,
            unit_price: amount,
            total_price: amount,
            unit_type: UnitType::Pieces,
            milestone: "roofing".into(),
            history: vec![],
        }];

        let upper = summarize_milestone("Roofing", &materials, &[]);
        prop_assert_eq!(upper.material_cost, 0.0);

        let lower = summarize_milestone("roofing", &materials, &[]);
        prop_assert_eq!(lower.material_cost, amount);
    }

    /// Name search always folds case, in both directions.
    #[test]
    fn name_search_always_folds_case(name in "[a-zA-Z]{1,12}") {
        prop_assert!(name_matches(&name, &name.to_uppercase()));
        prop_assert!(name_matches(&name, &name.to_lowercase()));
        prop_assert!(name_matches(&name.to_uppercase(), &name));
    }
}
