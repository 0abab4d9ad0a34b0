//! Crowdfund Client - typed actions against the crowdfunding backend
//!
//! Every action resolves to a [`shared::ActionResult`]: success carries the
//! decoded body, failure carries one display string. Successful mutations
//! invalidate the cache tags of the data they changed.
//!
//! ```no_run
//! use crowdfund_client::{ClientConfig, CrowdfundClient};
//!
//! # async fn run() -> Result<(), crowdfund_client::ClientError> {
//! let client = CrowdfundClient::new(ClientConfig::from_env()?)?;
//! let project = client.get_project_public(7).await;
//! if let Some(message) = project.error() {
//!     eprintln!("{message}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod consumer;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod normalize;
pub mod session;

#[cfg(test)]
mod testing;

pub use cache::{Invalidate, Tag, TagCache};
pub use client::{ClientBuilder, CrowdfundClient};
pub use config::ClientConfig;
pub use consumer::{AuthContext, Presentation, ToggleKind, ToggleState};
pub use endpoint::{CachePolicy, Endpoint, SessionEffect};
pub use error::{ClientError, ClientResult};
pub use http::{ApiRequest, HttpClient, NetworkHttpClient, RawResponse, Verb};
pub use session::{CookieSession, SessionStore};

// Re-export shared types for convenience
pub use shared;
pub use shared::{ActionError, ActionResult, FieldErrorMap, PageError};
