//! UI consumer contract
//!
//! How a view turns an [`ActionResult`] into something on screen:
//!
//! - mutations: a toast, or [`Presentation::Relogin`] when the action
//!   ended the session
//! - page loads: nothing on success, otherwise the not-found or error page
//!
//! A failure always produces one of these, never nothing.

mod auth;
mod toggle;

pub use auth::AuthContext;
pub use toggle::{ToggleKind, ToggleState};

use shared::{ActionError, ActionResult};

use crate::endpoint::{Endpoint, SessionEffect};

pub const TOAST_SUCCESS_TITLE: &str = "Success";
pub const TOAST_ERROR_TITLE: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

/// What a view shows for an action's outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Transient notification
    Toast {
        title: String,
        description: String,
        variant: ToastVariant,
    },
    /// Full-page not-found screen
    NotFound,
    /// Full-page error screen
    ErrorPage { message: String },
    /// Session ended; send the user to the login page
    Relogin,
}

impl Presentation {
    pub fn success(description: impl Into<String>) -> Self {
        Self::Toast {
            title: TOAST_SUCCESS_TITLE.to_string(),
            description: description.into(),
            variant: ToastVariant::Success,
        }
    }

    /// Error toast carrying the failure's message verbatim.
    pub fn error(err: &ActionError) -> Self {
        Self::Toast {
            title: TOAST_ERROR_TITLE.to_string(),
            description: err.message().to_string(),
            variant: ToastVariant::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        match self {
            Self::Toast { variant, .. } => *variant == ToastVariant::Error,
            Self::NotFound | Self::ErrorPage { .. } => true,
            Self::Relogin => false,
        }
    }
}

/// Presentation of a finished mutation. `success_description` is shown in
/// the success toast; actions that clear the session present `Relogin`.
pub fn present_mutation<T>(endpoint: &Endpoint, result: &ActionResult<T>, success_description: &str) -> Presentation {
    match result {
        ActionResult::Success(_) if endpoint.session == SessionEffect::Clear => Presentation::Relogin,
        ActionResult::Success(_) => Presentation::success(success_description),
        ActionResult::Failure(err) => Presentation::error(err),
    }
}

/// Presentation of a page load: `None` renders the page.
pub fn present_page<T>(result: &ActionResult<T>) -> Option<Presentation> {
    match result {
        ActionResult::Success(_) => None,
        ActionResult::Failure(ActionError::NotFound { .. }) => Some(Presentation::NotFound),
        ActionResult::Failure(err) => Some(Presentation::ErrorPage {
            message: err.message().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::projects::DELETE_PROJECT;
    use crate::api::users::CHANGE_PASSWORD;
    use shared::http::StatusCode;
    use shared::FieldErrorMap;

    #[test]
    fn test_mutation_failure_is_error_toast() {
        let result: ActionResult<()> =
            ActionResult::Failure(ActionError::api(StatusCode::FORBIDDEN, "not yours"));
        assert_eq!(
            present_mutation(&DELETE_PROJECT, &result, "Project deleted"),
            Presentation::Toast {
                title: TOAST_ERROR_TITLE.into(),
                description: "not yours".into(),
                variant: ToastVariant::Error,
            }
        );
    }

    #[test]
    fn test_field_errors_shown_collapsed() {
        let mut fields = FieldErrorMap::new();
        fields.insert("title", "must be provided");
        fields.insert("deadline", "must be in the future");
        let result: ActionResult<()> = ActionResult::Failure(ActionError::field_validation(fields));

        match present_mutation(&DELETE_PROJECT, &result, "ok") {
            Presentation::Toast { description, .. } => {
                assert_eq!(description, "*must be provided\n*must be in the future")
            }
            other => panic!("expected toast, got {other:?}"),
        }
    }

    #[test]
    fn test_password_change_success_relogins() {
        let ok: ActionResult<()> = ActionResult::Success(());
        assert_eq!(present_mutation(&CHANGE_PASSWORD, &ok, "updated"), Presentation::Relogin);

        let failed: ActionResult<()> = ActionResult::Failure(ActionError::api(StatusCode::BAD_REQUEST, "wrong password"));
        assert!(present_mutation(&CHANGE_PASSWORD, &failed, "updated").is_error());
    }

    #[test]
    fn test_page_presentations() {
        let ok: ActionResult<u8> = ActionResult::Success(1);
        assert_eq!(present_page(&ok), None);

        let missing: ActionResult<u8> = ActionResult::Failure(ActionError::not_found("Project not found"));
        assert_eq!(present_page(&missing), Some(Presentation::NotFound));

        let down: ActionResult<u8> = ActionResult::Failure(ActionError::transport("connection refused"));
        assert_eq!(
            present_page(&down),
            Some(Presentation::ErrorPage {
                message: "connection refused".into()
            })
        );
    }
}
