//! Catalog core
//!
//! Validation, reference resolution and option reconciliation for product
//! writes. Everything here works against the [`ProductStore`] and
//! [`ReferenceLookup`] traits; the SQLite implementation lives in `db`.
//!
//! ```text
//! ProductUpsert ─► validator ─► resolver ─► reconciler ─► ProductDraft ─► ProductStore::save
//!                   (fields)    (brand…)     (options)
//! ```

pub mod assembler;
pub mod error;
pub mod policy;
pub mod reconciler;
pub mod resolver;
pub mod store;
pub mod validator;

#[cfg(test)]
pub(crate) mod memory;

pub use assembler::ProductAssembler;
pub use error::{CatalogError, CatalogResult};
pub use policy::{NegativeStockPolicy, OmittedOptionPolicy, ReconcilePolicy};
pub use reconciler::OptionReconciler;
pub use resolver::ReferenceResolver;
pub use store::{ProductStore, ReferenceLookup};
pub use validator::{ValidatedProduct, validate_product};

use shared::models::{Brand, Category, Color, ProductFull, ProductOptionFull, Size};

/// Commit-ready product aggregate.
///
/// `id == None` means the product has never been persisted. The store updates
/// options that carry an id, inserts the rest and deletes exactly the ids in
/// `removed_options`. Persisted options not named anywhere are left alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub brand: Brand,
    pub category: Category,
    pub options: Vec<OptionDraft>,
    pub removed_options: Vec<i64>,
}

/// Option owned by a [`ProductDraft`]; `id == None` until first saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDraft {
    pub id: Option<i64>,
    pub size: Size,
    pub color: Color,
    pub stock_quantity: i64,
}

impl From<ProductOptionFull> for OptionDraft {
    fn from(option: ProductOptionFull) -> Self {
        Self {
            id: Some(option.id),
            size: option.size,
            color: option.color,
            stock_quantity: option.stock_quantity,
        }
    }
}

impl From<ProductFull> for ProductDraft {
    fn from(product: ProductFull) -> Self {
        Self {
            id: Some(product.id),
            code: product.code,
            name: product.name,
            description: product.description,
            price: product.price,
            brand: product.brand,
            category: product.category,
            options: product.options.into_iter().map(OptionDraft::from).collect(),
            removed_options: Vec::new(),
        }
    }
}
