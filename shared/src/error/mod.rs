//! Unified error system for the catalog
//!
//! - [`ErrorCode`]: standardized numeric codes, one per failure kind
//! - [`ErrorCategory`]: classification of codes by range
//! - [`AppError`]: error carrying a code, a message and optional details
//! - [`ErrorResponse`]: the error body returned by every endpoint
//!
//! # Error Code Ranges
//!
//! - 0xxx: Request errors
//! - 60xx: Product field and lookup errors
//! - 61xx: Reference (brand / category / size / color) errors
//! - 62xx: Product option errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::new(ErrorCode::ProductCodeExists)
//!     .with_detail("code", "SKU1");
//!
//! let response = ErrorResponse::from(&err);
//! assert_eq!(response.error, "duplicate_code");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse};
