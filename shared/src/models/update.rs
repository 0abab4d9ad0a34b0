//! Project Update Model

use serde::{Deserialize, Serialize};

/// News post a creator publishes on a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub created_at: String,
}
