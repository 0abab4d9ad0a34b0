//! Request payloads
//!
//! Bodies and query parameters sent to the backend. Form-only fields
//! (password confirmation, terms checkbox) are never serialized, and
//! percentage inputs are converted to the ratios the backend stores.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize, Serializer};

use crate::models::Vote;
use crate::util::{self, InvalidDate};

// =============================================================================
// Auth & users
// =============================================================================

/// Sign-up form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing)]
    pub terms: bool,
}

/// Login form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing)]
    pub remember_me: bool,
}

/// Partial profile update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Password change form. `confirm_password` stays on the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    #[serde(default, skip_serializing)]
    pub confirm_password: String,
}

/// Admin edit of another user's account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAdminUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated: Option<bool>,
}

// =============================================================================
// Experts
// =============================================================================

/// Admin form creating an expert account.
///
/// `expertise_level` is entered as a percentage and sent as a ratio
/// (`45` goes over the wire as `0.45`; missing is `0`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_expert_role")]
    pub role: String,
    #[serde(default)]
    pub expertise_fields: Vec<String>,
    #[serde(default, serialize_with = "percent_as_ratio")]
    pub expertise_level: Option<f64>,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub is_active: bool,
}

fn default_expert_role() -> String {
    "expert".to_string()
}

fn percent_as_ratio<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(util::percent_to_ratio(value.unwrap_or(0.0)))
}

/// Expert assessment form; vote shares are percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(serialize_with = "vote_as_ratios")]
    pub vote: Vote,
    #[serde(default)]
    pub comment: String,
}

fn vote_as_ratios<S: Serializer>(vote: &Vote, serializer: S) -> Result<S::Ok, S::Error> {
    vote.to_ratios().serialize(serializer)
}

// =============================================================================
// Projects
// =============================================================================

/// New project form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub funding_goal: f64,
    /// `datetime-local` input or RFC 3339; normalized before sending
    pub deadline: String,
}

impl ProjectCreate {
    /// Copy with the deadline normalized to RFC 3339 in `offset`.
    pub fn normalized(&self, offset: FixedOffset) -> Result<Self, InvalidDate> {
        Ok(Self {
            deadline: util::format_datetime(&self.deadline, offset)?,
            ..self.clone()
        })
    }
}

/// One step of the multi-step project editor, or a status change.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProjectPatch {
    Basics {
        #[serde(skip_serializing_if = "Option::is_none")]
        project_img: Option<String>,
        title: String,
        description: String,
        categories: Vec<String>,
    },
    Funding {
        funding_goal: f64,
        deadline: String,
    },
    Story {
        campaign: String,
    },
    Status {
        status: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        launched_at: Option<String>,
    },
    Suspicious {
        is_suspicious: bool,
    },
}

impl ProjectPatch {
    /// Copy with any date normalized to RFC 3339 in `offset`.
    pub fn normalized(&self, offset: FixedOffset) -> Result<Self, InvalidDate> {
        Ok(match self {
            Self::Funding {
                funding_goal,
                deadline,
            } => Self::Funding {
                funding_goal: *funding_goal,
                deadline: util::format_datetime(deadline, offset)?,
            },
            Self::Status {
                status,
                launched_at: Some(launched_at),
            } => Self::Status {
                status: status.clone(),
                launched_at: Some(util::format_datetime(launched_at, offset)?),
            },
            other => other.clone(),
        })
    }

    /// Form field holding the date, for error reporting
    pub fn date_field(&self) -> Option<&'static str> {
        match self {
            Self::Funding { .. } => Some("deadline"),
            Self::Status { .. } => Some("launched_at"),
            _ => None,
        }
    }
}

/// Sort alias understood by the discover page
pub const SORT_MOST_FUNDED: &str = "most_funded";
const SORT_MOST_FUNDED_EXPR: &str = "-(current_funding*100)/funding_goal";

/// Discover-page listing filters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectQuery {
    pub page: u32,
    pub search: String,
    pub categories: Vec<String>,
    pub page_size: u32,
    pub sort: String,
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            categories: Vec::new(),
            page_size: 10,
            sort: String::new(),
        }
    }
}

impl ProjectQuery {
    /// Query pairs in the order the backend documents them.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let sort = if self.sort == SORT_MOST_FUNDED {
            SORT_MOST_FUNDED_EXPR.to_string()
        } else {
            self.sort.clone()
        };
        vec![
            ("title".into(), self.search.clone()),
            ("categories".into(), self.categories.join(",")),
            ("sort".into(), sort),
            ("page".into(), self.page.to_string()),
            ("page_size".into(), self.page_size.to_string()),
        ]
    }
}

/// Page / page size for tables and paged lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn to_pairs(self) -> Vec<(String, String)> {
        vec![
            ("page".into(), self.page.to_string()),
            ("page_size".into(), self.page_size.to_string()),
        ]
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

// =============================================================================
// Backing & rewards
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    pub amount: f64,
    pub user_id: i64,
    pub project_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackProjectRequest {
    pub payment_intent_id: String,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefundRequest {
    pub reason: Option<String>,
}

/// Reward tier as entered in the editor: amount in currency units,
/// delivery date as a form date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    pub estimated_delivery: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl RewardInput {
    /// Wire form: amount in cents, delivery date normalized.
    pub fn to_wire(&self, offset: FixedOffset) -> Result<Self, InvalidDate> {
        Ok(Self {
            amount: (self.amount * 100.0).round(),
            estimated_delivery: util::format_datetime(&self.estimated_delivery, offset)?,
            ..self.clone()
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsRequest {
    pub rewards: Vec<RewardInput>,
}

/// Whether a rewards save creates new tiers or replaces existing ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardsMode {
    Create,
    Update,
}

// =============================================================================
// Updates, comments, disputes
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInput {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentInput {
    pub content: String,
    pub parent_comment_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisputeInput {
    #[serde(rename = "type")]
    pub kind: String,
    pub context: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidences: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisputeUpdate {
    pub status: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackingStatusUpdate {
    pub status: String,
}
