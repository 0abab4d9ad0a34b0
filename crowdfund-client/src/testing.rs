//! Test doubles: a scripted transport and a recording invalidation sink.

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::cache::{Invalidate, Tag};
use crate::config::ClientConfig;
use crate::client::CrowdfundClient;
use crate::error::{ClientError, ClientResult};
use crate::http::{ApiRequest, HttpClient, RawResponse};
use crate::session::CookieSession;

/// Replays queued responses in order and records every request.
#[derive(Clone, Default)]
pub(crate) struct ScriptedHttp {
    responses: Arc<Mutex<VecDeque<ClientResult<RawResponse>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedHttp {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        let status = StatusCode::from_u16(status).expect("valid status");
        self.responses
            .lock()
            .push_back(Ok(RawResponse::json(status, &body)));
    }

    pub(crate) fn push_text(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).expect("valid status");
        self.responses
            .lock()
            .push_back(Ok(RawResponse::new(status, body)));
    }

    pub(crate) fn push_error(&self, message: &str) {
        self.responses
            .lock()
            .push_back(Err(ClientError::InvalidResponse(message.to_string())));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests.lock().last().cloned().expect("a request was sent")
    }
}

#[async_trait]
impl HttpClient for ScriptedHttp {
    async fn execute(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::InvalidResponse("no scripted response".into())))
    }
}

/// Records every tag it is asked to invalidate.
#[derive(Clone, Default)]
pub(crate) struct RecordingSink {
    fired: Arc<Mutex<Vec<Tag>>>,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fired(&self) -> Vec<Tag> {
        self.fired.lock().clone()
    }
}

impl Invalidate for RecordingSink {
    fn invalidate(&self, tag: Tag) {
        self.fired.lock().push(tag);
    }
}

/// Client wired to a scripted transport, a recording sink and a session
/// holding `tok`, pinned to UTC.
pub(crate) fn scripted_client() -> (CrowdfundClient, ScriptedHttp, RecordingSink) {
    let http = ScriptedHttp::new();
    let sink = RecordingSink::new();
    let offset = chrono::FixedOffset::east_opt(0).expect("zero offset");
    let client = CrowdfundClient::builder(ClientConfig::new("http://api.test/v1").with_utc_offset(offset))
        .http_client(http.clone())
        .session(CookieSession::new("auth_token").with_token("tok"))
        .invalidator(sink.clone())
        .build()
        .expect("client builds");
    (client, http, sink)
}
