//! SQLite-backed catalog store
//!
//! Implements the catalog's persistence traits on top of the repository
//! functions. `save` and `delete` each run in a single transaction.

use async_trait::async_trait;
use shared::models::{
    Brand, Category, Color, NameAndPrice, Product, ProductFull, ProductSummary, Size,
};
use sqlx::SqlitePool;

use super::repository::product::ProductRow;
use super::repository::{RepoError, RepoResult, product, product_option, reference};
use crate::catalog::{ProductDraft, ProductStore, ReferenceLookup};

#[derive(Clone)]
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Attach brand, category and options to a product row.
    async fn load_full(&self, row: Product) -> RepoResult<ProductFull> {
        let brand = reference::find_brand(&self.pool, row.brand_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("brand {}", row.brand_id)))?;
        let category = reference::find_category(&self.pool, row.category_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("category {}", row.category_id)))?;
        let options = product_option::find_full_by_product(&self.pool, row.id).await?;

        Ok(ProductFull {
            id: row.id,
            code: row.code,
            name: row.name,
            description: row.description,
            price: row.price,
            brand,
            category,
            options,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ReferenceLookup for SqliteCatalogStore {
    async fn find_brand(&self, id: i64) -> RepoResult<Option<Brand>> {
        reference::find_brand(&self.pool, id).await
    }

    async fn find_category(&self, id: i64) -> RepoResult<Option<Category>> {
        reference::find_category(&self.pool, id).await
    }

    async fn find_size(&self, id: i64) -> RepoResult<Option<Size>> {
        reference::find_size(&self.pool, id).await
    }

    async fn find_color(&self, id: i64) -> RepoResult<Option<Color>> {
        reference::find_color(&self.pool, id).await
    }

    async fn list_brands(&self) -> RepoResult<Vec<Brand>> {
        reference::list_brands(&self.pool).await
    }

    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        reference::list_categories(&self.pool).await
    }

    async fn list_sizes(&self) -> RepoResult<Vec<Size>> {
        reference::list_sizes(&self.pool).await
    }

    async fn list_colors(&self) -> RepoResult<Vec<Color>> {
        reference::list_colors(&self.pool).await
    }
}

#[async_trait]
impl ProductStore for SqliteCatalogStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ProductFull>> {
        match product::find_by_id(&self.pool, id).await? {
            Some(row) => Ok(Some(self.load_full(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_code(&self, code: &str) -> RepoResult<Option<ProductFull>> {
        match product::find_by_code(&self.pool, code).await? {
            Some(row) => Ok(Some(self.load_full(row).await?)),
            None => Ok(None),
        }
    }

    async fn exists_by_code(&self, code: &str) -> RepoResult<bool> {
        product::exists_by_code(&self.pool, code).await
    }

    async fn save(&self, draft: ProductDraft) -> RepoResult<ProductFull> {
        let row = ProductRow {
            code: &draft.code,
            name: &draft.name,
            description: draft.description.as_deref(),
            price: draft.price,
            brand_id: draft.brand.id,
            category_id: draft.category.id,
        };

        let mut tx = self.pool.begin().await?;

        let product_id = match draft.id {
            Some(id) => {
                if !product::update(&mut tx, id, &row).await? {
                    return Err(RepoError::NotFound(format!("Product {id}")));
                }
                id
            }
            None => product::insert(&mut tx, &row).await?,
        };

        for option in &draft.options {
            match option.id {
                Some(option_id) => {
                    let updated = product_option::update(
                        &mut tx,
                        product_id,
                        option_id,
                        option.size.id,
                        option.color.id,
                        option.stock_quantity,
                    )
                    .await?;
                    if !updated {
                        return Err(RepoError::NotFound(format!(
                            "Option {option_id} of product {product_id}"
                        )));
                    }
                }
                None => {
                    product_option::insert(
                        &mut tx,
                        product_id,
                        option.size.id,
                        option.color.id,
                        option.stock_quantity,
                    )
                    .await?;
                }
            }
        }

        let removed =
            product_option::delete_ids(&mut tx, product_id, &draft.removed_options).await?;
        tx.commit().await?;

        tracing::debug!(
            product_id,
            options = draft.options.len(),
            removed_options = removed,
            "Product saved"
        );

        self.find_by_id(product_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {product_id}")))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await?;
        // Children first, then the owner
        let options = product_option::delete_by_product(&mut tx, id).await?;
        let deleted = product::delete(&mut tx, id).await?;
        tx.commit().await?;

        if deleted {
            tracing::debug!(product_id = id, options, "Product rows deleted");
        }
        Ok(deleted)
    }

    async fn find_all(&self) -> RepoResult<Vec<ProductFull>> {
        let rows = product::find_all(&self.pool).await?;
        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            products.push(self.load_full(row).await?);
        }
        Ok(products)
    }

    async fn list_summaries(&self) -> RepoResult<Vec<ProductSummary>> {
        product::find_summaries(&self.pool).await
    }

    async fn find_up_to(&self, max_price: f64) -> RepoResult<Vec<ProductFull>> {
        let rows = product::find_up_to(&self.pool, max_price).await?;
        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            products.push(self.load_full(row).await?);
        }
        Ok(products)
    }

    async fn list_name_price(&self) -> RepoResult<Vec<NameAndPrice>> {
        product::find_name_price(&self.pool).await
    }
}
