//! Action result contract
//!
//! Every action (a thin wrapper around one backend endpoint) reports its
//! outcome as an [`ActionResult`]. `status` is the only discriminant a
//! consumer ever needs:
//!
//! ```json
//! { "status": true, "message": "Profile updated", "user": { ... } }
//! { "status": false, "error": "*Title must be provided\n*Deadline must be provided" }
//! ```
//!
//! Failures are always resolved to a single display string by the time they
//! leave the action layer; see [`ActionError`] for the taxonomy.

use http::StatusCode;
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Message used when a validation map collapses to nothing.
const EMPTY_VALIDATION_MESSAGE: &str = "Validation failed";

// =============================================================================
// Field errors
// =============================================================================

/// Backend validation errors keyed by input field.
///
/// Insertion order of the source JSON object is preserved so the collapsed
/// message lists fields in the order the backend reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorMap {
    entries: Vec<(String, String)>,
}

impl FieldErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the backend's `error` object. String values are taken
    /// verbatim, anything else is rendered as compact JSON.
    pub fn from_json(map: &Map<String, Value>) -> Self {
        let entries = map
            .iter()
            .map(|(field, value)| {
                let message = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (field.clone(), message)
            })
            .collect();
        Self { entries }
    }

    /// Append a field error, replacing an existing entry for the same field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field, message)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collapse into one display string: one `*`-prefixed line per field.
    pub fn collapse(&self) -> String {
        self.entries
            .iter()
            .map(|(_, message)| format!("*{message}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Serialize for FieldErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Why an action failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// Backend returned a field -> message map; `message` is its collapsed form.
    #[error("{message}")]
    FieldValidation {
        message: String,
        fields: FieldErrorMap,
    },

    /// Backend returned a plain error string, passed through unchanged.
    /// `body` holds every other field of the error body.
    #[error("{message}")]
    Api {
        status: StatusCode,
        message: String,
        body: Map<String, Value>,
    },

    /// A read asked for an entity the backend does not know.
    #[error("{message}")]
    NotFound { message: String },

    /// Network failure, timeout, or an unparseable body.
    #[error("{message}")]
    Transport { message: String },
}

impl ActionError {
    /// Build a validation failure from a collected field map.
    pub fn field_validation(fields: FieldErrorMap) -> Self {
        let message = if fields.is_empty() {
            EMPTY_VALIDATION_MESSAGE.to_string()
        } else {
            fields.collapse()
        };
        Self::FieldValidation { message, fields }
    }

    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            body: Map::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// The single human-readable string shown to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::FieldValidation { message, .. }
            | Self::Api { message, .. }
            | Self::NotFound { message }
            | Self::Transport { message } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status reported by the backend, if the failure came from one.
    pub fn http_status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            _ => None,
        }
    }
}

/// Failure of a page-level data loader.
///
/// Loaders propagate this with `?` so the page shows a full-screen
/// not-found or error view instead of an inline toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Failed(String),
}

impl From<ActionError> for PageError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::NotFound { message } => Self::NotFound(message),
            other => Self::Failed(other.message().to_string()),
        }
    }
}

// =============================================================================
// Result
// =============================================================================

/// Outcome of one action call.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<T> {
    Success(T),
    Failure(ActionError),
}

impl<T> ActionResult<T> {
    /// `true` on success. The sole discriminant consumers branch on.
    pub fn status(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Display string of a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err.message()),
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ActionError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionResult<U> {
        match self {
            Self::Success(payload) => ActionResult::Success(f(payload)),
            Self::Failure(err) => ActionResult::Failure(err),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> ActionResult<U>) -> ActionResult<U> {
        match self {
            Self::Success(payload) => f(payload),
            Self::Failure(err) => ActionResult::Failure(err),
        }
    }

    pub fn into_result(self) -> Result<T, ActionError> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure(err) => Err(err),
        }
    }

    /// Convert for a page loader that re-raises to its error boundary.
    pub fn into_page(self) -> Result<T, PageError> {
        self.into_result().map_err(PageError::from)
    }
}

impl<T> From<Result<T, ActionError>> for ActionResult<T> {
    fn from(result: Result<T, ActionError>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(err) => Self::Failure(err),
        }
    }
}

/// Wire shape: `{ "status": true, ...payload }` or
/// `{ "status": false, ...body, "error": message }`.
///
/// A payload field named `status` is shadowed by the discriminant.
impl<T: Serialize> Serialize for ActionResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Self::Success(payload) => {
                map.serialize_entry("status", &true)?;
                match serde_json::to_value(payload).map_err(S::Error::custom)? {
                    Value::Object(fields) => {
                        for (key, value) in fields.iter().filter(|(k, _)| k.as_str() != "status") {
                            map.serialize_entry(key, value)?;
                        }
                    }
                    Value::Null => {}
                    other => map.serialize_entry("data", &other)?,
                }
            }
            Self::Failure(err) => {
                map.serialize_entry("status", &false)?;
                if let ActionError::Api { body, .. } = err {
                    for (key, value) in body
                        .iter()
                        .filter(|(k, _)| !matches!(k.as_str(), "status" | "error"))
                    {
                        map.serialize_entry(key, value)?;
                    }
                }
                map.serialize_entry("error", err.message())?;
            }
        }
        map.end()
    }
}
