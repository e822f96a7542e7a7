//! Shared types for the catalog workspace
//!
//! Data models exchanged over the HTTP API and persisted by the server,
//! plus the unified error system used by every layer.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};
