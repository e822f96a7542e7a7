//! Product Option Model

use super::patch::Patch;
use super::reference::{Color, Size};
use serde::{Deserialize, Serialize};

/// Product option row (one size/color/stock variant of a product)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductOption {
    pub id: i64,
    pub product_id: i64,
    pub size_id: i64,
    pub color_id: i64,
    pub stock_quantity: i64,
}

/// Product option with size and color resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOptionFull {
    pub id: i64,
    pub size: Size,
    pub color: Color,
    pub stock_quantity: i64,
}

/// Incoming option change record
///
/// Without `option_id` (or with 0) the record describes a new option and
/// every field is required. With an `option_id` it is a partial update of
/// that option: absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOptionInput {
    #[serde(default, alias = "optionId", alias = "id", skip_serializing_if = "Option::is_none")]
    pub option_id: Option<i64>,
    #[serde(default, alias = "sizeId", skip_serializing_if = "Patch::is_absent")]
    pub size_id: Patch<i64>,
    #[serde(default, alias = "colorId", skip_serializing_if = "Patch::is_absent")]
    pub color_id: Patch<i64>,
    #[serde(default, alias = "stockQuantity", skip_serializing_if = "Patch::is_absent")]
    pub stock_quantity: Patch<i64>,
}

impl ProductOptionInput {
    /// Record for a brand-new option
    pub fn new(size_id: i64, color_id: i64, stock_quantity: i64) -> Self {
        Self {
            option_id: None,
            size_id: Patch::Value(size_id),
            color_id: Patch::Value(color_id),
            stock_quantity: Patch::Value(stock_quantity),
        }
    }

    /// Record targeting an already persisted option, all fields absent
    pub fn existing(option_id: i64) -> Self {
        Self {
            option_id: Some(option_id),
            ..Default::default()
        }
    }

    /// The persisted option this record targets, treating 0 as "none"
    pub fn target_id(&self) -> Option<i64> {
        self.option_id.filter(|id| *id != 0)
    }
}
