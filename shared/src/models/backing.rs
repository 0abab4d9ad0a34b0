//! Backing and Payment Models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A user's pledge to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backing {
    pub backing_id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub backer_id: i64,
    #[serde(default)]
    pub project_id: i64,
}

/// Payment attached to a backing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub backing_id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl Payment {
    pub fn is_succeeded(&self) -> bool {
        self.status == "succeeded"
    }
}

/// Row of the admin backings table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackingRow {
    pub backing_id: i64,
    #[serde(default)]
    pub payment_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub transaction_id: String,
}
