//! Builder for CrowdfundClient construction.

use std::sync::Arc;

use crate::cache::{Invalidate, TagCache};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpClient, NetworkHttpClient};
use crate::session::{CookieSession, SessionStore};

use super::CrowdfundClient;

/// Builder for [`CrowdfundClient`].
///
/// # Example
///
/// ```no_run
/// use crowdfund_client::{ClientConfig, CrowdfundClient};
///
/// let client = CrowdfundClient::builder(ClientConfig::new("http://localhost:4000/v1"))
///     .build()
///     .expect("Failed to build client");
/// ```
pub struct ClientBuilder {
    config: ClientConfig,
    http: Option<Arc<dyn HttpClient>>,
    session: Option<Arc<dyn SessionStore>>,
    sinks: Vec<Arc<dyn Invalidate>>,
}

impl ClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: None,
            session: None,
            sinks: Vec::new(),
        }
    }

    /// Replace the network transport.
    pub fn http_client(mut self, http: impl HttpClient + 'static) -> Self {
        self.http = Some(Arc::new(http));
        self
    }

    /// Use a host-provided session store instead of the in-memory cookie.
    pub fn session(mut self, session: impl SessionStore + 'static) -> Self {
        self.session = Some(Arc::new(session));
        self
    }

    /// Forward invalidation signals to an extra sink.
    pub fn invalidator(mut self, sink: impl Invalidate + 'static) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the base URL is empty or the timeout
    /// is zero.
    pub fn build(self) -> ClientResult<CrowdfundClient> {
        if self.config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base URL is required".into()));
        }
        if self.config.timeout == 0 {
            return Err(ClientError::Config("timeout must be at least one second".into()));
        }

        let http = match self.http {
            Some(http) => http,
            None => Arc::new(NetworkHttpClient::new(&self.config)?),
        };
        let session = match self.session {
            Some(session) => session,
            None => {
                let cookie = CookieSession::new(self.config.cookie_name.clone());
                let cookie = match &self.config.token {
                    Some(token) => cookie.with_token(token.clone()),
                    None => cookie,
                };
                Arc::new(cookie)
            }
        };

        tracing::debug!(base_url = %self.config.base_url, timeout = self.config.timeout, "Client built");
        Ok(CrowdfundClient {
            config: Arc::new(self.config),
            http,
            session,
            cache: TagCache::new(),
            sinks: Arc::new(self.sinks),
        })
    }
}
