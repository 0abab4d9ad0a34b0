//! Data models
//!
//! Shapes of the crowdfunding backend's JSON documents. Unknown fields are
//! ignored and most fields default so older or newer backends still decode.
//! All IDs are `i64`.

pub mod backing;
pub mod comment;
pub mod dispute;
pub mod expert;
pub mod page;
pub mod project;
pub mod reward;
pub mod stats;
pub mod update;
pub mod user;

// Re-exports
pub use backing::*;
pub use comment::*;
pub use dispute::*;
pub use expert::*;
pub use page::*;
pub use project::*;
pub use reward::*;
pub use stats::*;
pub use update::*;
pub use user::*;
