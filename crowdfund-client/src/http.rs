//! HTTP transport
//!
//! The [`HttpClient`] trait is the seam between actions and the network: it
//! sends one [`ApiRequest`] and hands back the status and raw body, leaving
//! every interpretation of the body to the normalizer.

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, multipart};
use serde::Serialize;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

const DEFAULT_USER_AGENT: &str = concat!("crowdfund-client/", env!("CARGO_PKG_VERSION"));

/// HTTP verb of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    fn method(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Patch => Method::PATCH,
            Self::Delete => Method::DELETE,
        }
    }
}

/// Request body
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    /// Single-file multipart form
    File {
        field: String,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

/// One outgoing request, relative to the configured base URL
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub verb: Verb,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    /// Bearer token, attached by the client for authenticated endpoints
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            bearer: None,
        }
    }

    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Attach a JSON body.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> ClientResult<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a file as a multipart form; the content type is guessed from
    /// the file name.
    pub fn with_file(
        mut self,
        field: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();
        self.body = RequestBody::File {
            field: field.into(),
            file_name,
            content_type,
            bytes,
        };
        self
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Path plus query, used to key cached reads. Requests carrying a
    /// bearer are further keyed by a fingerprint of the token so one
    /// session never reads another's cached body.
    pub fn cache_key(&self) -> String {
        let mut key = self.path.clone();
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            key = format!("{key}?{query}");
        }
        if let Some(token) = &self.bearer {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            key = format!("{key}#{:016x}", hasher.finish());
        }
        key
    }

    /// JSON body, if any
    pub fn json(&self) -> Option<&serde_json::Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Status and undecoded body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: StatusCode, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send the request. Only transport failures are errors; any HTTP
    /// status, success or not, is returned as a [`RawResponse`].
    async fn execute(&self, request: ApiRequest) -> ClientResult<RawResponse>;
}

/// Network HTTP client backed by reqwest
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    config: ClientConfig,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn execute(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        let url = self.config.url(&request.path);
        let mut req = self.client.request(request.verb.method(), &url);
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            req = req.bearer_auth(token);
        }
        req = match request.body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req.json(&value),
            RequestBody::File {
                field,
                file_name,
                content_type,
                bytes,
            } => {
                let part = multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
                req.multipart(multipart::Form::new().part(field, part))
            }
        };

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}
