//! Project records — the unit that scopes material and labour collections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A construction project. Snapshots are fetched per project id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ProjectRecord {
    /// Planned duration in days, inclusive of both end dates.
    pub fn planned_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_dates() {
        let json = r#"{
            "_id": "p1",
            "name": "Riverside Bungalow",
            "description": "Three bedroom main house",
            "startDate": "2024-02-01",
            "endDate": "2024-12-20"
        }"#;
        let project: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "Riverside Bungalow");
        assert_eq!(
            project.start_date,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
        assert_eq!(project.planned_days(), 324);
    }

    #[test]
    fn description_defaults_empty() {
        let json = r#"{
            "_id": "p2",
            "name": "Gate House",
            "startDate": "2024-06-01",
            "endDate": "2024-08-31"
        }"#;
        let project: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(project.description.is_empty());
    }
}
