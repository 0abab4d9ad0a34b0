//! Shared types for the crowdfunding platform
//!
//! Domain models, request payloads and response envelopes of the backend
//! API, plus the action result contract every action reports through.

pub mod action;
pub mod models;
pub mod request;
pub mod response;
pub mod util;

// Re-exports
pub use action::{ActionError, ActionResult, FieldErrorMap, PageError};
pub use http;
pub use response::Payload;
pub use serde::{Deserialize, Serialize};
