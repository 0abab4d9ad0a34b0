//! Signed-in user shared across views

use parking_lot::RwLock;
use shared::ActionResult;
use shared::models::User;
use std::sync::Arc;

use crate::client::CrowdfundClient;

#[derive(Debug, Default)]
struct AuthState {
    user: Option<User>,
    loading: bool,
}

/// Handle to the current user. Clones share state; [`AuthContext::sync`]
/// is the only place it is reconciled with the backend.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    state: Arc<RwLock<AuthState>>,
}

impl AuthContext {
    /// Empty context, marked loading until the first sync.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(AuthState {
                user: None,
                loading: true,
            })),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().user.is_some()
    }

    /// Replace the user after an action that returned a fresh copy
    /// (profile update, activation).
    pub fn set_user(&self, user: Option<User>) {
        self.state.write().user = user;
    }

    /// Reconcile with the session: no token means signed out, otherwise the
    /// user is fetched from `/users/me`. Any failure signs out locally; the
    /// token itself is only dropped by the client on a 401.
    pub async fn sync(&self, client: &CrowdfundClient) -> Option<User> {
        self.state.write().loading = true;

        let user = if client.session().has_token() {
            match client.current_user().await {
                ActionResult::Success(envelope) => Some(envelope.user),
                ActionResult::Failure(err) => {
                    tracing::info!(error = %err, "Could not load current user, signing out");
                    None
                }
            }
        } else {
            None
        };

        let mut state = self.state.write();
        state.user = user.clone();
        state.loading = false;
        user
    }
}
