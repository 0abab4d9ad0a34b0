//! Reward Model

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Reward tier offered by a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub project_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Amount in cents
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub estimated_delivery: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub version: i32,
    #[serde(default)]
    pub backing_id: i64,
}
