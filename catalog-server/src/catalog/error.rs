//! Catalog error kinds
//!
//! Every failure of a catalog write or read is one of these kinds. Storage
//! failures are carried as-is so they are never confused with a rejected
//! request.

use shared::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    InvalidCode(String),

    #[error("{0}")]
    InvalidName(String),

    #[error("Price must be greater than 0")]
    InvalidPrice,

    #[error("{0}")]
    InvalidDescription(String),

    #[error("Brand ID is required and cannot be 0")]
    MissingBrand,

    #[error("Category ID is required and cannot be 0")]
    MissingCategory,

    #[error("Invalid Brand ID: {0}")]
    InvalidBrandId(i64),

    #[error("Invalid Category ID: {0}")]
    InvalidCategoryId(i64),

    #[error("Invalid Size ID: {0}")]
    InvalidSizeId(i64),

    #[error("Invalid Color ID: {0}")]
    InvalidColorId(i64),

    #[error("Option {index}: size ID is required and cannot be 0")]
    MissingSize { index: usize },

    #[error("Option {index}: color ID is required and cannot be 0")]
    MissingColor { index: usize },

    #[error("Option {index}: stock quantity must be greater than or equal to 0")]
    InvalidStock { index: usize },

    #[error("Invalid ProductOption ID: {0}")]
    UnknownOptionId(i64),

    #[error("ProductOption ID must be 0 or null when creating a new product (got {0})")]
    UnexpectedOptionId(i64),

    #[error("Product code already exists: {0}")]
    DuplicateCode(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Price can't be zero or lower")]
    InvalidFilter,

    #[error("Storage failure: {0}")]
    Storage(#[from] RepoError),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::InvalidCode(_) => ErrorCode::ProductInvalidCode,
            CatalogError::InvalidName(_) => ErrorCode::ProductInvalidName,
            CatalogError::InvalidPrice => ErrorCode::ProductInvalidPrice,
            CatalogError::InvalidDescription(_) => ErrorCode::ProductInvalidDescription,
            CatalogError::MissingBrand => ErrorCode::BrandRequired,
            CatalogError::MissingCategory => ErrorCode::CategoryRequired,
            CatalogError::InvalidBrandId(_) => ErrorCode::BrandNotFound,
            CatalogError::InvalidCategoryId(_) => ErrorCode::CategoryNotFound,
            CatalogError::InvalidSizeId(_) => ErrorCode::SizeNotFound,
            CatalogError::InvalidColorId(_) => ErrorCode::ColorNotFound,
            CatalogError::MissingSize { .. } => ErrorCode::OptionSizeRequired,
            CatalogError::MissingColor { .. } => ErrorCode::OptionColorRequired,
            CatalogError::InvalidStock { .. } => ErrorCode::OptionInvalidStock,
            CatalogError::UnknownOptionId(_) => ErrorCode::OptionNotFound,
            CatalogError::UnexpectedOptionId(_) => ErrorCode::OptionIdNotAllowed,
            CatalogError::DuplicateCode(_) => ErrorCode::ProductCodeExists,
            CatalogError::NotFound(_) => ErrorCode::ProductNotFound,
            CatalogError::InvalidFilter => ErrorCode::InvalidPriceFilter,
            CatalogError::Storage(_) => ErrorCode::DatabaseError,
        }
    }

    /// True for kinds that reject the request itself (as opposed to
    /// missing resources, conflicts or storage failures).
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            CatalogError::DuplicateCode(_) | CatalogError::NotFound(_) | CatalogError::Storage(_)
        )
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let code = err.code();
        let app = AppError::with_message(code, err.to_string());
        match err {
            CatalogError::InvalidBrandId(id) => app.with_detail("brand_id", id),
            CatalogError::InvalidCategoryId(id) => app.with_detail("category_id", id),
            CatalogError::InvalidSizeId(id) => app.with_detail("size_id", id),
            CatalogError::InvalidColorId(id) => app.with_detail("color_id", id),
            CatalogError::MissingSize { index }
            | CatalogError::MissingColor { index }
            | CatalogError::InvalidStock { index } => app.with_detail("option_index", index),
            CatalogError::UnknownOptionId(id) | CatalogError::UnexpectedOptionId(id) => {
                app.with_detail("option_id", id)
            }
            CatalogError::DuplicateCode(code) => app.with_detail("code", code),
            _ => app,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CatalogError::InvalidPrice, StatusCode::BAD_REQUEST),
            (CatalogError::UnknownOptionId(99), StatusCode::BAD_REQUEST),
            (CatalogError::InvalidFilter, StatusCode::BAD_REQUEST),
            (CatalogError::DuplicateCode("SKU1".into()), StatusCode::CONFLICT),
            (CatalogError::NotFound("Product 5".into()), StatusCode::NOT_FOUND),
            (
                CatalogError::Storage(RepoError::Database("disk".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).http_status(), status);
        }
    }

    #[test]
    fn test_repo_errors_are_storage_failures() {
        let err = CatalogError::from(RepoError::NotFound("row".into()));
        assert!(matches!(err, CatalogError::Storage(_)));

        let app = AppError::from(CatalogError::DuplicateCode("SKU1".into()));
        assert_eq!(app.message, "Product code already exists: SKU1");
        assert_eq!(app.details.unwrap().get("code").unwrap(), "SKU1");
    }

    #[test]
    fn test_details_carry_offending_id() {
        let app = AppError::from(CatalogError::InvalidSizeId(42));
        assert_eq!(app.code, ErrorCode::SizeNotFound);
        assert_eq!(app.message, "Invalid Size ID: 42");
        assert_eq!(app.details.unwrap().get("size_id").unwrap(), 42);
    }

    #[test]
    fn test_validation_kinds() {
        assert!(CatalogError::MissingBrand.is_validation());
        assert!(CatalogError::InvalidStock { index: 0 }.is_validation());
        assert!(!CatalogError::NotFound("x".into()).is_validation());
        assert!(!CatalogError::DuplicateCode("x".into()).is_validation());
    }
}
