//! Field validation for incoming product representations
//!
//! Checks run in a fixed order and the first failure wins:
//! code, name, price, brand id, category id, then the text length limits.

use shared::models::ProductUpsert;

use super::error::{CatalogError, CatalogResult};
use crate::utils::validation::{
    MAX_CODE_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, exceeds, nonzero_id, optional_text,
    required_text,
};

/// Scalar fields of a product after validation, trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub brand_id: i64,
    pub category_id: i64,
}

/// Trimmed product code if one was supplied.
pub fn candidate_code(input: &ProductUpsert) -> Option<&str> {
    required_text(input.code.as_deref())
}

pub fn validate_product(input: &ProductUpsert) -> CatalogResult<ValidatedProduct> {
    let code = candidate_code(input).ok_or_else(|| {
        CatalogError::InvalidCode("Product code is required and cannot be blank".into())
    })?;
    let name = required_text(input.name.as_deref()).ok_or_else(|| {
        CatalogError::InvalidName("Product name is required and cannot be blank".into())
    })?;
    let price = input
        .price
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or(CatalogError::InvalidPrice)?;
    let brand_id = nonzero_id(input.brand_id).ok_or(CatalogError::MissingBrand)?;
    let category_id = nonzero_id(input.category_id).ok_or(CatalogError::MissingCategory)?;

    if exceeds(code, MAX_CODE_LEN) {
        return Err(CatalogError::InvalidCode(format!(
            "Product code is too long (max {MAX_CODE_LEN} chars)"
        )));
    }
    if exceeds(name, MAX_NAME_LEN) {
        return Err(CatalogError::InvalidName(format!(
            "Product name is too long (max {MAX_NAME_LEN} chars)"
        )));
    }
    let description = optional_text(input.description.as_deref());
    if let Some(d) = description
        && exceeds(d, MAX_DESCRIPTION_LEN)
    {
        return Err(CatalogError::InvalidDescription(format!(
            "Description is too long (max {MAX_DESCRIPTION_LEN} chars)"
        )));
    }

    Ok(ValidatedProduct {
        code: code.to_string(),
        name: name.to_string(),
        description: description.map(str::to_string),
        price,
        brand_id,
        category_id,
    })
}
