//! Unified error codes for the catalog
//!
//! Codes are organized by category:
//! - 0xxx: Request errors
//! - 60xx: Product errors
//! - 61xx: Reference errors
//! - 62xx: Option errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes serialize as u16 values so clients can switch on them without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Request ====================
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 60xx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product code already used by another product
    ProductCodeExists = 6002,
    /// Product code missing, blank or too long
    ProductInvalidCode = 6003,
    /// Product name missing, blank or too long
    ProductInvalidName = 6004,
    /// Product price missing or not positive
    ProductInvalidPrice = 6005,
    /// Product description too long
    ProductInvalidDescription = 6006,
    /// Price filter is zero or negative
    InvalidPriceFilter = 6007,

    // ==================== 61xx: Reference ====================
    /// Brand id missing or zero
    BrandRequired = 6101,
    /// Category id missing or zero
    CategoryRequired = 6102,
    /// Brand id does not resolve
    BrandNotFound = 6103,
    /// Category id does not resolve
    CategoryNotFound = 6104,
    /// Size id does not resolve
    SizeNotFound = 6105,
    /// Color id does not resolve
    ColorNotFound = 6106,

    // ==================== 62xx: Option ====================
    /// Option size id missing or zero
    OptionSizeRequired = 6201,
    /// Option color id missing or zero
    OptionColorRequired = 6202,
    /// Option stock quantity missing or negative
    OptionInvalidStock = 6203,
    /// Option id is not one of the product's options
    OptionNotFound = 6204,
    /// Option id supplied while creating a product
    OptionIdNotAllowed = 6205,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Stable machine-readable name, used as the `error` field of responses
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "invalid_request",

            ErrorCode::ProductNotFound => "not_found",
            ErrorCode::ProductCodeExists => "duplicate_code",
            ErrorCode::ProductInvalidCode => "invalid_code",
            ErrorCode::ProductInvalidName => "invalid_name",
            ErrorCode::ProductInvalidPrice => "invalid_price",
            ErrorCode::ProductInvalidDescription => "invalid_description",
            ErrorCode::InvalidPriceFilter => "invalid_filter",

            ErrorCode::BrandRequired => "missing_brand",
            ErrorCode::CategoryRequired => "missing_category",
            ErrorCode::BrandNotFound => "invalid_brand_id",
            ErrorCode::CategoryNotFound => "invalid_category_id",
            ErrorCode::SizeNotFound => "invalid_size_id",
            ErrorCode::ColorNotFound => "invalid_color_id",

            ErrorCode::OptionSizeRequired => "missing_size",
            ErrorCode::OptionColorRequired => "missing_color",
            ErrorCode::OptionInvalidStock => "invalid_stock",
            ErrorCode::OptionNotFound => "unknown_option_id",
            ErrorCode::OptionIdNotAllowed => "unexpected_option_id",

            ErrorCode::DatabaseError => "storage_failure",
        }
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // Request
            ErrorCode::InvalidRequest => "Invalid request",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductCodeExists => "Product code already exists",
            ErrorCode::ProductInvalidCode => "Product code is required and cannot be blank",
            ErrorCode::ProductInvalidName => "Product name is required and cannot be blank",
            ErrorCode::ProductInvalidPrice => "Price must be greater than 0",
            ErrorCode::ProductInvalidDescription => "Product description is too long",
            ErrorCode::InvalidPriceFilter => "Max price must be greater than 0",

            // Reference
            ErrorCode::BrandRequired => "Brand id is required and cannot be 0",
            ErrorCode::CategoryRequired => "Category id is required and cannot be 0",
            ErrorCode::BrandNotFound => "Invalid brand id",
            ErrorCode::CategoryNotFound => "Invalid category id",
            ErrorCode::SizeNotFound => "Invalid size id",
            ErrorCode::ColorNotFound => "Invalid color id",

            // Option
            ErrorCode::OptionSizeRequired => "Size id is required and cannot be 0",
            ErrorCode::OptionColorRequired => "Color id is required and cannot be 0",
            ErrorCode::OptionInvalidStock => "Stock quantity must be greater than or equal to 0",
            ErrorCode::OptionNotFound => "Product option does not belong to this product",
            ErrorCode::OptionIdNotAllowed => {
                "Product option id must be 0 or absent when creating a product"
            }

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Request
            5 => Ok(ErrorCode::InvalidRequest),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductCodeExists),
            6003 => Ok(ErrorCode::ProductInvalidCode),
            6004 => Ok(ErrorCode::ProductInvalidName),
            6005 => Ok(ErrorCode::ProductInvalidPrice),
            6006 => Ok(ErrorCode::ProductInvalidDescription),
            6007 => Ok(ErrorCode::InvalidPriceFilter),

            // Reference
            6101 => Ok(ErrorCode::BrandRequired),
            6102 => Ok(ErrorCode::CategoryRequired),
            6103 => Ok(ErrorCode::BrandNotFound),
            6104 => Ok(ErrorCode::CategoryNotFound),
            6105 => Ok(ErrorCode::SizeNotFound),
            6106 => Ok(ErrorCode::ColorNotFound),

            // Option
            6201 => Ok(ErrorCode::OptionSizeRequired),
            6202 => Ok(ErrorCode::OptionColorRequired),
            6203 => Ok(ErrorCode::OptionInvalidStock),
            6204 => Ok(ErrorCode::OptionNotFound),
            6205 => Ok(ErrorCode::OptionIdNotAllowed),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
