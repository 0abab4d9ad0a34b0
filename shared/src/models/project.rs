//! Project Model

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use super::reward::Reward;

/// Lifecycle state of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    Live,
    Completed,
    Cancelled,
    Other(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Live => "live",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            "live" => Self::Live,
            "completed" => Self::Completed,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Other(value),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Crowdfunding project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(alias = "id")]
    pub project_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub funding_goal: f64,
    #[serde(default)]
    pub current_funding: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub deadline: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub project_img: String,
    #[serde(default)]
    pub campaign: String,
    #[serde(default)]
    pub launched_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub version: i32,
    #[serde(default)]
    pub creator_id: i64,
    #[serde(default)]
    pub rewards: Vec<Reward>,
    #[serde(default)]
    pub is_suspicious: bool,
    #[serde(default)]
    pub experts_decision: String,
}

impl Project {
    /// Funding progress in percent, `current * 100 / goal`. Zero goal reports 0.
    pub fn funding_percentage(&self) -> f64 {
        funding_percentage(self.current_funding, self.funding_goal)
    }

    /// Whole days until the deadline, negative once it has passed.
    pub fn days_left(&self, now: DateTime<Utc>) -> Option<i64> {
        self.deadline
            .map(|deadline| deadline.with_timezone(&Utc).signed_duration_since(now).num_days())
    }
}

/// `current * 100 / goal`, rounded to two decimals.
pub fn funding_percentage(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    ((current * 100.0 / goal) * 100.0).round() / 100.0
}

/// Reviewer decision on a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(alias = "id")]
    pub review_id: i64,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub reviewer_id: i64,
    #[serde(default)]
    pub project_id: i64,
}

/// Row of the admin projects table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRow {
    #[serde(alias = "id")]
    pub project_id: i64,
    pub title: String,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub funding_goal: f64,
    #[serde(default)]
    pub current_funding: f64,
    #[serde(default)]
    pub creator: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn project(json: &str) -> Project {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_funding_percentage() {
        assert_eq!(funding_percentage(250.0, 1000.0), 25.0);
        assert_eq!(funding_percentage(1.0, 3.0), 33.33);
        assert_eq!(funding_percentage(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_project_from_backend_json() {
        let p = project(
            r#"{
                "project_id": 3,
                "title": "Solar kiosk",
                "funding_goal": 2000,
                "current_funding": 500,
                "categories": ["Energy"],
                "deadline": "2026-11-01T12:00:00+01:00",
                "status": "live",
                "creator_id": 9
            }"#,
        );
        assert_eq!(p.status, Some(ProjectStatus::Live));
        assert_eq!(p.funding_percentage(), 25.0);

        let now = Utc.with_ymd_and_hms(2026, 10, 22, 11, 0, 0).unwrap();
        assert_eq!(p.days_left(now), Some(10));
    }

    #[test]
    fn test_canceled_spelling_normalized() {
        let status: ProjectStatus = serde_json::from_str("\"canceled\"").unwrap();
        assert_eq!(status, ProjectStatus::Cancelled);
    }
}
