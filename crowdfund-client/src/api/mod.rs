//! Backend actions
//!
//! One method on [`CrowdfundClient`](crate::CrowdfundClient) per backend
//! operation, grouped by resource. Every action is declared as an
//! [`Endpoint`](crate::Endpoint) constant next to its method and returns an
//! [`ActionResult`]; none of them return `Err` or panic.

pub mod auth;
pub mod backings;
pub mod comments;
pub mod disputes;
pub mod experts;
pub mod feedback;
pub mod health;
pub mod projects;
pub mod rewards;
pub mod stats;
pub mod tables;
pub mod updates;
pub mod users;

use shared::util::InvalidDate;
use shared::{ActionError, ActionResult, FieldErrorMap};

/// Field failure for a form date that could not be normalized; nothing
/// is sent to the backend.
pub(crate) fn invalid_date<T>(field: &str, err: InvalidDate) -> ActionResult<T> {
    tracing::debug!(field, error = %err, "Rejected form date");
    let mut fields = FieldErrorMap::new();
    fields.insert(field, err.to_string());
    ActionResult::Failure(ActionError::field_validation(fields))
}
