//! Result normalizer
//!
//! Turns a raw HTTP response into an [`ActionResult`]:
//!
//! | status | body                        | result                      |
//! |--------|-----------------------------|-----------------------------|
//! | 2xx    | JSON object (or empty)      | `Success(every field)`      |
//! | non-2xx| `error` is an object        | `FieldValidation`           |
//! | non-2xx| `error` is the not-found msg| `NotFound` (reads only)     |
//! | non-2xx| anything else               | `Api` with body passthrough |
//! | any    | unparseable / not an object | `Transport`                 |

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ActionError, ActionResult, FieldErrorMap, Payload};

use crate::endpoint::Endpoint;
use crate::http::RawResponse;

/// Normalize a response received for `endpoint`.
///
/// A success body keeps every field, but a top-level `status` field is
/// shadowed by the discriminant when the result is serialized; it stays
/// readable through [`ActionResult::payload`].
pub fn normalize(endpoint: &Endpoint, response: &RawResponse) -> ActionResult<Payload> {
    if response.is_success() {
        let body = success_body(response);
        if let Ok(payload) = &body {
            if let Some(status) = payload.get("status") {
                tracing::debug!(
                    action = endpoint.name,
                    %status,
                    "Body field `status` shadowed by result discriminant"
                );
            }
        }
        return body.into();
    }

    let mut body = match parse_object(&response.body) {
        Ok(body) => body,
        Err(reason) => {
            return ActionResult::Failure(ActionError::transport(format!(
                "Unreadable error response (status {}): {reason}",
                response.status.as_u16()
            )));
        }
    };

    let error = match body.remove("error") {
        Some(Value::Object(fields)) => {
            ActionError::field_validation(FieldErrorMap::from_json(&fields))
        }
        Some(Value::String(message)) if endpoint.is_not_found(&message) => {
            ActionError::not_found(message)
        }
        Some(Value::String(message)) => ActionError::Api {
            status: response.status,
            message,
            body,
        },
        _ => ActionError::Api {
            status: response.status,
            message: format!("request failed with status {}", response.status.as_u16()),
            body,
        },
    };
    ActionResult::Failure(error)
}

fn success_body(response: &RawResponse) -> Result<Payload, ActionError> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Payload::new());
    }
    parse_object(&response.body)
        .map_err(|reason| ActionError::transport(format!("Unreadable response: {reason}")))
}

fn parse_object(bytes: &[u8]) -> Result<Payload, String> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(format!("expected a JSON object, got {}", kind(&other))),
        Err(e) => Err(e.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode a normalized payload into its typed envelope.
///
/// A payload that doesn't fit the envelope is a transport failure: the
/// backend answered, but not with the shape this client understands.
pub fn decode<T: DeserializeOwned>(result: ActionResult<Payload>) -> ActionResult<T> {
    result.and_then(|payload| {
        serde_json::from_value::<T>(Value::Object(payload))
            .map_err(|e| ActionError::transport(format!("Unexpected response shape: {e}")))
            .into()
    })
}
