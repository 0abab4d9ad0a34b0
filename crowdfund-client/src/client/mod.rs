//! Client module - the shared action call path.
//!
//! Every action funnels through [`CrowdfundClient::call`]:
//!
//! ```text
//! attach bearer ─► tagged cache hit (path, query, token)? ─► return cached body
//!        │ no
//!        ▼
//! HttpClient::execute ─► 401 on auth call? clear session
//!        │
//!        ▼
//! normalize ─► success: fire tags, apply session effect, cache tagged read
//!           └► failure: log, return
//! ```

mod builder;

use chrono::FixedOffset;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{ActionError, ActionResult, Payload};
use std::fmt;
use std::sync::Arc;

use crate::cache::{Invalidate, Tag, TagCache};
use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, SessionEffect};
use crate::error::ClientResult;
use crate::http::{ApiRequest, HttpClient, RawResponse};
use crate::normalize::{decode, normalize};
use crate::session::SessionStore;

pub use builder::ClientBuilder;

/// Client for the crowdfunding backend.
///
/// Cheap to clone; clones share the transport, session and tag cache.
#[derive(Clone)]
pub struct CrowdfundClient {
    config: Arc<ClientConfig>,
    http: Arc<dyn HttpClient>,
    session: Arc<dyn SessionStore>,
    cache: TagCache,
    sinks: Arc<Vec<Arc<dyn Invalidate>>>,
}

impl fmt::Debug for CrowdfundClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrowdfundClient")
            .field("base_url", &self.config.base_url)
            .field("cookie", &self.session.cookie_name())
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}

impl CrowdfundClient {
    /// Client over the network with an in-memory session.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: ClientConfig) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub fn cache(&self) -> &TagCache {
        &self.cache
    }

    /// Offset form dates are normalized in
    pub fn offset(&self) -> FixedOffset {
        self.config.offset()
    }

    /// Fire invalidation for `tags` on the cache and every extra sink.
    pub fn invalidate(&self, tags: &[Tag]) {
        self.cache.invalidate_all(tags);
        for sink in self.sinks.iter() {
            sink.invalidate_all(tags);
        }
    }

    // ========== Call path ==========

    /// Request skeleton for `endpoint` at `path`
    pub(crate) fn request(&self, endpoint: &Endpoint, path: impl Into<String>) -> ApiRequest {
        ApiRequest::new(endpoint.verb, path)
    }

    /// Run one action and normalize its outcome.
    pub(crate) async fn call(&self, endpoint: &Endpoint, request: ApiRequest) -> ActionResult<Payload> {
        let request = self.authorize(endpoint, request);
        let cache_tag = endpoint.cache_tag();
        let key = request.cache_key();
        if let Some(tag) = cache_tag {
            if let Some(body) = self.cache.get(tag, &key) {
                tracing::debug!(action = endpoint.name, tag = %tag, key = %key, "Cache hit");
                return ActionResult::Success(body);
            }
        }
        let seen_generation = cache_tag.map(|tag| self.cache.generation(tag));

        let response = match self.dispatch(endpoint, request).await {
            Ok(response) => response,
            Err(err) => return ActionResult::Failure(err),
        };

        let result = normalize(endpoint, &response);
        match &result {
            ActionResult::Success(body) => {
                if !endpoint.invalidates.is_empty() {
                    tracing::debug!(action = endpoint.name, tags = ?endpoint.invalidates, "Invalidating tags");
                    self.invalidate(endpoint.invalidates);
                }
                if endpoint.session == SessionEffect::Clear {
                    tracing::info!(
                        action = endpoint.name,
                        cookie = self.session.cookie_name(),
                        "Clearing session"
                    );
                    self.session.clear();
                }
                if let (Some(tag), Some(seen)) = (cache_tag, seen_generation) {
                    if !self.cache.store(tag, key, body.clone(), seen) {
                        tracing::debug!(action = endpoint.name, tag = %tag, "Stale read not cached");
                    }
                }
            }
            ActionResult::Failure(err) => {
                tracing::warn!(
                    action = endpoint.name,
                    status = response.status.as_u16(),
                    error = %err,
                    "Action failed"
                );
            }
        }
        result
    }

    /// Attach the session token to authenticated requests.
    fn authorize(&self, endpoint: &Endpoint, request: ApiRequest) -> ApiRequest {
        match self.session.token() {
            Some(token) if endpoint.auth => request.with_bearer(token),
            _ => request,
        }
    }

    /// Send the request; transport failures come back as `Transport`.
    async fn dispatch(&self, endpoint: &Endpoint, request: ApiRequest) -> Result<RawResponse, ActionError> {
        tracing::debug!(
            action = endpoint.name,
            verb = endpoint.verb.as_str(),
            path = %request.path,
            auth = request.bearer.is_some(),
            "Sending request"
        );

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::warn!(action = endpoint.name, error = %e, "Request failed");
            ActionError::from(e)
        })?;

        if endpoint.auth && response.status == StatusCode::UNAUTHORIZED {
            tracing::warn!(
                action = endpoint.name,
                cookie = self.session.cookie_name(),
                "Token rejected, clearing session"
            );
            self.session.clear();
        }
        Ok(response)
    }

    /// Run one action and return its raw response on success; used by
    /// endpoints whose body is not JSON.
    pub(crate) async fn call_raw(&self, endpoint: &Endpoint, request: ApiRequest) -> ActionResult<RawResponse> {
        let request = self.authorize(endpoint, request);
        let response = match self.dispatch(endpoint, request).await {
            Ok(response) => response,
            Err(err) => return ActionResult::Failure(err),
        };
        if response.is_success() {
            return ActionResult::Success(response);
        }
        normalize(endpoint, &response).map(|_| response)
    }

    pub(crate) async fn send<T: DeserializeOwned>(&self, endpoint: &Endpoint, path: impl Into<String>) -> ActionResult<T> {
        decode(self.call(endpoint, self.request(endpoint, path)).await)
    }

    pub(crate) async fn send_query<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        path: impl Into<String>,
        query: Vec<(String, String)>,
    ) -> ActionResult<T> {
        let request = self.request(endpoint, path).with_query(query);
        decode(self.call(endpoint, request).await)
    }

    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        path: impl Into<String>,
        body: &B,
    ) -> ActionResult<T> {
        let request = match self.request(endpoint, path).with_json(body) {
            Ok(request) => request,
            Err(e) => return ActionResult::Failure(e.into()),
        };
        decode(self.call(endpoint, request).await)
    }
}
