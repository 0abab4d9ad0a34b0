//! Comment Model

use serde::{Deserialize, Serialize};

/// Comment on a project; replies carry a materialized `path`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub image_url: String,
}

impl Comment {
    /// Nesting depth derived from the path (`"1.4.9"` is depth 2).
    pub fn depth(&self) -> usize {
        self.path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| p.matches('.').count())
            .unwrap_or(0)
    }
}
