//! Dispute Model

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Report filed against a project or user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispute {
    pub dispute_id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub reporter_id: i64,
    #[serde(default)]
    pub reported_resource_id: i64,
    #[serde(default)]
    pub evidences: Vec<String>,
}

impl Dispute {
    pub fn is_resolved(&self) -> bool {
        self.status == "resolved"
    }
}
