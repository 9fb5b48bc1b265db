//! Stock movement records from the supervisor flows.
//!
//! Issuing hands purchased materials to a worker for a numbered round of
//! work; remaining-stock entries record what came back. Neither feeds cost
//! aggregation, since costs are fixed at purchase time, but both ship in the
//! backend's supervisor API and the stock listing command renders them.

use serde::{Deserialize, Serialize};

/// A quantity of one material issued to one worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedMaterialRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub worker_id: String,
    pub material_id: String,
    pub quantity: f64,
    pub round: u32,
}

/// Leftover stock of one material after a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingMaterialRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub material_id: String,
    pub quantity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_record_parses_round() {
        let json = r#"{
            "_id": "i1",
            "workerId": "w42",
            "materialId": "m7",
            "quantity": 25,
            "round": 3
        }"#;
        let issued: IssuedMaterialRecord = serde_json::from_str(json).unwrap();
        assert_eq!(issued.round, 3);
        assert_eq!(issued.quantity, 25.0);
    }

    #[test]
    fn remaining_record_tolerates_missing_id() {
        let json = r#"{"materialId": "m7", "quantity": 4.5}"#;
        let remaining: RemainingMaterialRecord = serde_json::from_str(json).unwrap();
        assert!(remaining.id.is_empty());
        assert_eq!(remaining.quantity, 4.5);
    }
}
