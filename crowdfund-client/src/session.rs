//! Session token access
//!
//! The client never persists credentials. It reads the token from a
//! [`SessionStore`] for authenticated calls and clears it on a rejected
//! token or a password change; where the token lives is up to the host.

use parking_lot::RwLock;
use std::sync::Arc;

/// Where the auth token cookie is kept
pub trait SessionStore: Send + Sync {
    /// Cookie name the token is stored under
    fn cookie_name(&self) -> &str;

    /// Current token, if any
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: String);

    /// Drop the token
    fn clear(&self);

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// In-memory cookie jar holding one named cookie
#[derive(Debug, Clone)]
pub struct CookieSession {
    name: String,
    token: Arc<RwLock<Option<String>>>,
}

impl CookieSession {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_token(self, token: impl Into<String>) -> Self {
        *self.token.write() = Some(token.into());
        self
    }
}

impl SessionStore for CookieSession {
    fn cookie_name(&self) -> &str {
        &self.name
    }

    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set_token(&self, token: String) {
        *self.token.write() = Some(token);
    }

    fn clear(&self) {
        self.token.write().take();
    }
}
