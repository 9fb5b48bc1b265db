//! Stored-total verification.
//!
//! Aggregation trusts the denormalized `total_price`/`total_pay` figures the
//! entry forms wrote. This pass recomputes each total from its parts and
//! reports every record where the stored figure has drifted. It feeds nothing
//! back into the sums: default aggregation behavior is unchanged whether or
//! not an audit runs.

use serde::Serialize;

use crate::domain::{LabourRecord, MaterialRecord};

/// Differences at or below this are treated as float noise, not drift.
pub const AUDIT_TOLERANCE: f64 = 1e-6;

/// Which collection a flagged record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    Material,
    Labour,
}

/// A stored total that disagrees with its recomputed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsMismatch {
    pub kind: RecordKind,
    pub record_id: String,
    /// Wire name of the drifted field.
    pub field: &'static str,
    pub stored: f64,
    pub recomputed: f64,
}

impl TotalsMismatch {
    pub fn drift(&self) -> f64 {
        self.stored - self.recomputed
    }
}

/// Recomputes every stored total and reports mismatches beyond
/// [`AUDIT_TOLERANCE`], in record order, materials first.
pub fn audit_totals(
    materials: &[MaterialRecord],
    labour: &[LabourRecord],
) -> Vec<TotalsMismatch> {
    let mut mismatches = Vec::new();

    for m in materials {
        push_if_drifted(
            &mut mismatches,
            RecordKind::Material,
            &m.id,
            "totalPrice",
            m.total_price,
            m.computed_total(),
        );
    }

    for l in labour {
        push_if_drifted(
            &mut mismatches,
            RecordKind::Labour,
            &l.id,
            "totalFundisPay",
            l.total_fundis_pay,
            l.fundis_total(),
        );
        push_if_drifted(
            &mut mismatches,
            RecordKind::Labour,
            &l.id,
            "totalHelpersPay",
            l.total_helpers_pay,
            l.helpers_total(),
        );
        push_if_drifted(
            &mut mismatches,
            RecordKind::Labour,
            &l.id,
            "totalPay",
            l.total_pay,
            l.computed_total(),
        );
    }

    mismatches
}

fn push_if_drifted(
    mismatches: &mut Vec<TotalsMismatch>,
    kind: RecordKind,
    record_id: &str,
    field: &'static str,
    stored: f64,
    recomputed: f64,
) {
    if (stored - recomputed).abs() > AUDIT_TOLERANCE {
        mismatches.push(TotalsMismatch {
            kind,
            record_id: record_id.to_string(),
            field,
            stored,
            recomputed,
        });
    }
}
