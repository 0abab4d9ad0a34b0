use shared::request::{LoginRequest, SignUpRequest};
use shared::response::{AuthEnvelope, MessageResponse, UserEnvelope};
use shared::ActionResult;

use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;
use crate::http::Verb;

pub const SIGN_UP: Endpoint = Endpoint::mutation("sign_up", Verb::Post, &[]);
pub const LOGIN: Endpoint = Endpoint::mutation("login", Verb::Post, &[]);
pub const ACTIVATE_USER: Endpoint = Endpoint::get("activate_user");
pub const REACTIVATE_USER: Endpoint = Endpoint::get("reactivate_user");

// ========== Auth API ==========

impl CrowdfundClient {
    /// Register an account. The terms checkbox is not sent.
    pub async fn sign_up(&self, form: &SignUpRequest) -> ActionResult<UserEnvelope> {
        self.send_json(&SIGN_UP, "users/signup", form).await
    }

    /// Exchange credentials for a token.
    ///
    /// The token is returned, not stored: the host decides where the
    /// session cookie lives and calls
    /// [`SessionStore::set_token`](crate::SessionStore::set_token).
    pub async fn login(&self, form: &LoginRequest) -> ActionResult<AuthEnvelope> {
        self.send_json(&LOGIN, "users/login", form).await
    }

    pub async fn activate_user(&self, token: &str) -> ActionResult<UserEnvelope> {
        self.send_query(
            &ACTIVATE_USER,
            "users/activate",
            vec![("token".to_string(), token.to_string())],
        )
        .await
    }

    /// Ask for a fresh activation email.
    pub async fn reactivate_user(&self, id: i64) -> ActionResult<MessageResponse> {
        self.send(&REACTIVATE_USER, format!("users/reactivate/{id}")).await
    }
}
