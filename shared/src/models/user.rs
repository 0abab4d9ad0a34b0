//! User Model

use serde::{Deserialize, Serialize};

/// Platform role, as reported by the backend's `role` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Reviewer,
    Expert,
    Creator,
    User,
    /// A role this client does not know about
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Reviewer => "reviewer",
            Self::Expert => "expert",
            Self::Creator => "creator",
            Self::User => "user",
            Self::Other(name) => name,
        }
    }

    /// Dashboard home for this role.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Reviewer => "/reviewer/dashboard",
            Self::Expert => "/expert/dashboard",
            _ => "/user/dashboard",
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Self::Admin,
            "reviewer" => Self::Reviewer,
            "expert" => Self::Expert,
            "creator" => Self::Creator,
            "user" => Self::User,
            _ => Self::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// User as returned by `/users/me` and `/users/discover/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "user_id")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub activated: bool,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Created / backed project counters shown on a profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCounts {
    #[serde(default, alias = "created_projects")]
    pub created: u64,
    #[serde(default, alias = "backed_projects")]
    pub backed: u64,
}

/// Row of the admin users table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    #[serde(alias = "id")]
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub activated: bool,
    #[serde(default, alias = "rolename")]
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_unknown_names() {
        let role: Role = serde_json::from_str("\"moderator\"").unwrap();
        assert_eq!(role, Role::Other("moderator".into()));
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"moderator\"");
    }

    #[test]
    fn test_user_accepts_user_id_alias() {
        let user: User = serde_json::from_str(
            r#"{"user_id": 7, "username": "ada", "email": "ada@example.com", "role": "expert"}"#,
        )
        .unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Some(Role::Expert));
        assert_eq!(user.role.unwrap().dashboard_path(), "/expert/dashboard");
    }
}
