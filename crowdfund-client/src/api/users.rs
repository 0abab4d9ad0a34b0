use shared::request::{PasswordChange, ProfileUpdate, UserAdminUpdate};
use shared::response::{MessageResponse, ProfileStatsEnvelope, UserEnvelope};
use shared::ActionResult;

use crate::cache::Tag;
use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;
use crate::http::Verb;

const USER_NOT_FOUND: &str = "User not found";

pub const CURRENT_USER: Endpoint = Endpoint::read("current_user", Tag::CurrentUser).authenticated();
pub const UPDATE_PROFILE: Endpoint =
    Endpoint::mutation("update_profile", Verb::Patch, &[Tag::CurrentUser]).authenticated();
pub const CHANGE_PASSWORD: Endpoint = Endpoint::mutation("change_password", Verb::Patch, &[])
    .authenticated()
    .clears_session();
pub const DELETE_ACCOUNT: Endpoint =
    Endpoint::mutation("delete_account", Verb::Delete, &[]).authenticated();
pub const GET_USER: Endpoint = Endpoint::read("get_user", Tag::User).not_found(USER_NOT_FOUND);
pub const DELETE_USER: Endpoint =
    Endpoint::mutation("delete_user", Verb::Delete, &[Tag::UsersTable]).authenticated();
pub const UPDATE_USER: Endpoint = Endpoint::mutation(
    "update_user",
    Verb::Patch,
    &[Tag::CurrentUser, Tag::UsersTable],
)
.authenticated();
pub const CREATED_BACKED_COUNT: Endpoint =
    Endpoint::read("created_backed_count", Tag::ProfileStats).not_found(USER_NOT_FOUND);

// ========== Users API ==========

impl CrowdfundClient {
    /// The user the session token belongs to
    pub async fn current_user(&self) -> ActionResult<UserEnvelope> {
        self.send(&CURRENT_USER, "users/me").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ActionResult<UserEnvelope> {
        self.send_json(&UPDATE_PROFILE, "users/update", update).await
    }

    /// Change the password. On success the session cookie is cleared and
    /// the user has to log in again.
    pub async fn change_password(&self, form: &PasswordChange) -> ActionResult<MessageResponse> {
        self.send_json(&CHANGE_PASSWORD, "users/passwordChange", form)
            .await
    }

    pub async fn delete_account(&self) -> ActionResult<MessageResponse> {
        self.send(&DELETE_ACCOUNT, "users/delete").await
    }

    /// Public profile. `NotFound` when the backend doesn't know the id.
    pub async fn get_user(&self, id: i64) -> ActionResult<UserEnvelope> {
        self.send(&GET_USER, format!("users/discover/{id}")).await
    }

    /// Admin: remove an account
    pub async fn delete_user(&self, id: i64) -> ActionResult<MessageResponse> {
        self.send(&DELETE_USER, format!("users/{id}")).await
    }

    /// Admin: change role or activation
    pub async fn update_user(&self, id: i64, update: &UserAdminUpdate) -> ActionResult<MessageResponse> {
        self.send_json(&UPDATE_USER, format!("users/update/{id}"), update)
            .await
    }

    pub async fn created_backed_count(&self, id: i64) -> ActionResult<ProfileStatsEnvelope> {
        self.send(&CREATED_BACKED_COUNT, format!("users/createdBackedCount/{id}"))
            .await
    }
}
