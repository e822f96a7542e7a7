//! Product Model

use super::product_option::{ProductOptionFull, ProductOptionInput};
use super::reference::{Brand, Category};
use serde::{Deserialize, Serialize};

/// Product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    /// Globally unique product code (SKU)
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub brand_id: i64,
    pub category_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Product aggregate: references resolved, options owned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFull {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub brand: Brand,
    pub category: Category,
    pub options: Vec<ProductOptionFull>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ProductFull {
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }
}

/// List view projection (no options)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductSummary {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Name / price projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct NameAndPrice {
    pub name: String,
    pub price: f64,
}

/// Create / update product payload
///
/// Required fields are `Option` so a missing value surfaces as a field
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpsert {
    #[serde(default, alias = "productCode")]
    pub code: Option<String>,
    #[serde(default, alias = "productName")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, alias = "brandId")]
    pub brand_id: Option<i64>,
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<i64>,
    /// `None` on update leaves the option set untouched
    #[serde(default, alias = "productOptions", skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOptionInput>>,
}
