//! Response envelopes
//!
//! The backend wraps every document in a named field next to a
//! human-readable `message`:
//!
//! ```json
//! { "message": "Project returned successfully", "project": { ... } }
//! ```
//!
//! These types are the typed payloads of successful actions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{
    Backing, BackingsRefundsEntry, CategoryCount, Comment, Dispute, Expert, ExpertReview,
    GeneralStats, GrowthEntry, OverviewEntry, PageMetadata, Payment, ProfileCounts, Project,
    ProjectUpdate, Review, Reward, TopProject, TopUser, User,
};

/// Untyped success body: every field the backend returned.
pub type Payload = Map<String, Value>;

/// Body carrying only a message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    #[serde(default)]
    pub message: String,
    pub user: User,
}

/// Login / sign-up result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthEnvelope {
    #[serde(default)]
    pub message: String,
    /// Token document as issued by the backend
    #[serde(default, alias = "token")]
    pub auth_token: Option<Value>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertEnvelope {
    #[serde(default)]
    pub message: String,
    pub expert: Expert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEnvelope {
    #[serde(default)]
    pub message: String,
    pub project: Project,
}

/// Paged project listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectList {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub metadata: Option<PageMetadata>,
}

/// Admin / reviewer table page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePage<Row> {
    #[serde(default)]
    pub message: String,
    #[serde(default = "Vec::new")]
    pub table: Vec<Row>,
    #[serde(default)]
    pub metadata: PageMetadata,
}

/// Result of an image upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikesResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub likes: u64,
}

/// Yes/no answer of the `didI...` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagResponse {
    #[serde(default)]
    pub message: String,
    #[serde(
        default,
        alias = "liked",
        alias = "saved",
        alias = "backed",
        alias = "did_i_back_it",
        alias = "did_i_like",
        alias = "did_i_save",
        alias = "did_i"
    )]
    pub value: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackersCount {
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "backers_count")]
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackingEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub backing_id: Option<i64>,
    #[serde(default)]
    pub payment_id: Option<i64>,
    /// Payment status; shadowed by the discriminant in the serialized result
    #[serde(default, rename = "status")]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub backing: Option<Backing>,
    #[serde(default)]
    pub payment: Option<Payment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub rewards: Vec<Reward>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatesPage {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub updates: Vec<ProjectUpdate>,
    #[serde(default)]
    pub metadata: Option<PageMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEnvelope {
    #[serde(default)]
    pub message: String,
    pub comment: Comment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisputeEnvelope {
    #[serde(default)]
    pub message: String,
    pub dispute: Dispute,
}

/// Result of an expert assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub review: Option<ExpertReview>,
}

/// Reviewer decision plus the expert reviews behind it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub review: Option<Review>,
    #[serde(default)]
    pub expert_reviews: Vec<ExpertReview>,
}

// =============================================================================
// Statistics
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStatsEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub profile_stats: ProfileCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralStatsEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub stats: GeneralStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub overview: Vec<OverviewEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProjectsEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub projects: Vec<TopProject>,
}

/// Top creators or top backers; the backend names the list after the kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopUsersEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "creators", alias = "backers")]
    pub users: Vec<TopUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub growth: Vec<GrowthEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackingsRefundsEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Vec<BackingsRefundsEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_response_aliases() {
        let flag: FlagResponse =
            serde_json::from_str(r#"{"message": "ok", "liked": true}"#).unwrap();
        assert!(flag.value);
        let flag: FlagResponse = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert!(!flag.value);
    }

    #[test]
    fn test_top_users_named_after_kind() {
        let top: TopUsersEnvelope = serde_json::from_str(
            r#"{"message": "Top five backers returned successfully", "backers": [{"username": "ada", "project_count": 2, "total_raised": 150.0, "image_url": ""}]}"#,
        )
        .unwrap();
        assert_eq!(top.users.len(), 1);
        assert_eq!(top.users[0].username, "ada");
    }

    #[test]
    fn test_profile_stats_backend_names() {
        let stats: ProfileStatsEnvelope = serde_json::from_str(
            r#"{"message": "Profile stats returned successfully", "profile_stats": {"created_projects": 3, "backed_projects": 7}}"#,
        )
        .unwrap();
        assert_eq!(stats.profile_stats, ProfileCounts { created: 3, backed: 7 });
    }

    #[test]
    fn test_table_page_defaults() {
        let page: TablePage<serde_json::Value> =
            serde_json::from_str(r#"{"message": "Users table retrieved successfully"}"#).unwrap();
        assert!(page.table.is_empty());
        assert_eq!(page.metadata, PageMetadata::default());
    }
}
