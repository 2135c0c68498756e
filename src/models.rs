//! API data models
//!
//! Shapes returned by the LipiTrack backend. Fields the dashboard does not
//! display are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// A selectable user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
}

impl UserRef {
    /// Label used by the user selector: `"{id} - {full name or email}"`.
    pub fn display_label(&self) -> String {
        let name = self.full_name.as_deref().unwrap_or(&self.email);
        format!("{} - {}", self.id, name)
    }
}

/// One lipid-panel lab draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    /// Server date string, `YYYY-MM-DD`.
    pub test_date: String,
    #[serde(default)]
    pub ldl: Option<f64>,
    #[serde(default)]
    pub hdl: Option<f64>,
    #[serde(default)]
    pub total_cholesterol: Option<f64>,
}

/// Rolling 30-day lifestyle aggregate computed by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifestyleAverages {
    #[serde(default)]
    pub avg_diet_score: Option<f64>,
    #[serde(default)]
    pub avg_exercise_minutes: Option<f64>,
    #[serde(default)]
    pub avg_sleep_hours: Option<f64>,
    #[serde(default)]
    pub entries_count: Option<i64>,
}

/// Per-user summary: latest lab, 30-day averages and the last five labs
/// ordered oldest to newest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub latest_lab: Option<LabResult>,
    pub last_30_days: LifestyleAverages,
    #[serde(default)]
    pub trend_last5: Vec<LabResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_ignores_unknown_fields() {
        let body = r#"{
            "user_id": 2,
            "latest_lab": {
                "id": 9, "user_id": 2, "created_at": "2024-05-01T10:00:00",
                "test_date": "2024-05-01", "ldl": 130, "hdl": 45,
                "total_cholesterol": 200, "triglycerides": null, "notes": null
            },
            "trend_last5": [],
            "last_30_days": {
                "avg_diet_score": 7, "avg_exercise_minutes": 30,
                "avg_sleep_hours": 6.5, "entries_count": 12
            }
        }"#;

        let summary: Summary = serde_json::from_str(body).unwrap();
        let latest = summary.latest_lab.unwrap();
        assert_eq!(summary.user_id, Some(2));
        assert_eq!(latest.test_date, "2024-05-01");
        assert_eq!(latest.ldl, Some(130.0));
        assert_eq!(summary.last_30_days.avg_sleep_hours, Some(6.5));
        assert_eq!(summary.last_30_days.entries_count, Some(12));
    }

    #[test]
    fn test_summary_with_nulls_and_missing_trend() {
        let body = r#"{
            "latest_lab": null,
            "last_30_days": {"avg_diet_score": null, "entries_count": 0}
        }"#;

        let summary: Summary = serde_json::from_str(body).unwrap();
        assert!(summary.latest_lab.is_none());
        assert!(summary.trend_last5.is_empty());
        assert_eq!(summary.last_30_days.avg_exercise_minutes, None);
    }

    #[test]
    fn test_display_label_prefers_full_name() {
        let named = UserRef {
            id: 3,
            full_name: Some("Ada Lovelace".to_string()),
            email: "ada@example.com".to_string(),
        };
        let unnamed = UserRef {
            id: 4,
            full_name: None,
            email: "anon@example.com".to_string(),
        };
        assert_eq!(named.display_label(), "3 - Ada Lovelace");
        assert_eq!(unnamed.display_label(), "4 - anon@example.com");
    }
}
