//! Persistence collaborator traits
//!
//! Each call is atomic on its own. The catalog never holds a transaction
//! open across calls.

use async_trait::async_trait;
use shared::models::{
    Brand, Category, Color, NameAndPrice, ProductFull, ProductSummary, Size,
};

use super::ProductDraft;
use crate::db::repository::RepoResult;

/// Lookup by id for the read-only reference tables
#[async_trait]
pub trait ReferenceLookup: Send + Sync {
    async fn find_brand(&self, id: i64) -> RepoResult<Option<Brand>>;
    async fn find_category(&self, id: i64) -> RepoResult<Option<Category>>;
    async fn find_size(&self, id: i64) -> RepoResult<Option<Size>>;
    async fn find_color(&self, id: i64) -> RepoResult<Option<Color>>;

    async fn list_brands(&self) -> RepoResult<Vec<Brand>>;
    async fn list_categories(&self) -> RepoResult<Vec<Category>>;
    async fn list_sizes(&self) -> RepoResult<Vec<Size>>;
    async fn list_colors(&self) -> RepoResult<Vec<Color>>;
}

/// Product aggregate storage
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ProductFull>>;
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<ProductFull>>;
    async fn exists_by_code(&self, code: &str) -> RepoResult<bool>;

    /// Insert or update the product, write `draft.options` and delete
    /// `draft.removed_options`. New rows get their ids assigned here.
    async fn save(&self, draft: ProductDraft) -> RepoResult<ProductFull>;

    /// Remove the product and all of its options. Returns false if it did
    /// not exist.
    async fn delete(&self, id: i64) -> RepoResult<bool>;

    async fn find_all(&self) -> RepoResult<Vec<ProductFull>>;

    async fn list_summaries(&self) -> RepoResult<Vec<ProductSummary>> {
        Ok(self.find_all().await?.iter().map(ProductFull::summary).collect())
    }

    /// Full products priced at or below `max_price`
    async fn find_up_to(&self, max_price: f64) -> RepoResult<Vec<ProductFull>> {
        let mut products = self.find_all().await?;
        products.retain(|p| p.price <= max_price);
        Ok(products)
    }

    async fn list_name_price(&self) -> RepoResult<Vec<NameAndPrice>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .map(|p| NameAndPrice {
                name: p.name,
                price: p.price,
            })
            .collect())
    }
}
