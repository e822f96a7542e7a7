//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: Request errors
/// - 60xx: Product errors
/// - 61xx: Reference errors
/// - 62xx: Option errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Request errors (0xxx)
    Request,
    /// Product errors (60xx)
    Product,
    /// Reference errors (61xx)
    Reference,
    /// Option errors (62xx)
    Option,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            6000..6100 => Self::Product,
            6100..6200 => Self::Reference,
            6200..6300 => Self::Option,
            9000.. => Self::System,
            _ => Self::Request,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
