//! Catalog Service - public operation surface for products
//!
//! Writes go through [`ProductAssembler`]; reads go straight to the store.

use std::sync::Arc;

use shared::models::{
    Brand, Category, Color, NameAndPrice, ProductFull, ProductSummary, ProductUpsert, Size,
};

use crate::catalog::{
    CatalogError, CatalogResult, ProductAssembler, ProductStore, ReconcilePolicy, ReferenceLookup,
};

pub struct CatalogService<S: ?Sized> {
    store: Arc<S>,
    policy: ReconcilePolicy,
}

impl<S: ?Sized> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            policy: self.policy,
        }
    }
}

impl<S> CatalogService<S>
where
    S: ProductStore + ReferenceLookup + ?Sized,
{
    pub fn new(store: Arc<S>, policy: ReconcilePolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> ReconcilePolicy {
        self.policy
    }

    fn assembler(&self) -> ProductAssembler<'_, S> {
        ProductAssembler::new(self.store.as_ref(), self.policy)
    }

    // ========== Writes ==========

    pub async fn create(&self, input: &ProductUpsert) -> CatalogResult<ProductFull> {
        let result = self.assembler().create(input).await;
        match &result {
            Ok(product) => tracing::info!(
                product_id = product.id,
                code = %product.code,
                options = product.options.len(),
                "Product created"
            ),
            Err(e) => log_rejection("create", None, e),
        }
        result
    }

    pub async fn update(&self, id: i64, input: &ProductUpsert) -> CatalogResult<ProductFull> {
        let result = self.assembler().update(id, input).await;
        match &result {
            Ok(product) => tracing::info!(
                product_id = product.id,
                code = %product.code,
                options = product.options.len(),
                "Product updated"
            ),
            Err(e) => log_rejection("update", Some(id), e),
        }
        result
    }

    /// Delete a product together with all of its options.
    pub async fn delete(&self, id: i64) -> CatalogResult<()> {
        let not_found = || CatalogError::NotFound(format!("Product {id}"));
        if self.store.find_by_id(id).await?.is_none() {
            return Err(not_found());
        }
        // Someone else may have deleted it in between
        if !self.store.delete(id).await? {
            return Err(not_found());
        }
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    // ========== Reads ==========

    pub async fn get(&self, id: i64) -> CatalogResult<ProductFull> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Product {id}")))
    }

    pub async fn list_all(&self) -> CatalogResult<Vec<ProductSummary>> {
        Ok(self.store.list_summaries().await?)
    }

    pub async fn find_by_code(&self, code: &str) -> CatalogResult<ProductFull> {
        self.store
            .find_by_code(code)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Product with code '{code}'")))
    }

    /// `None` returns every product; a bound must be strictly positive.
    pub async fn filter_by_max_price(
        &self,
        max_price: Option<f64>,
    ) -> CatalogResult<Vec<ProductFull>> {
        match max_price {
            None => Ok(self.store.find_all().await?),
            Some(max) if max.is_nan() || max <= 0.0 => Err(CatalogError::InvalidFilter),
            Some(max) => Ok(self.store.find_up_to(max).await?),
        }
    }

    pub async fn name_and_price(&self) -> CatalogResult<Vec<NameAndPrice>> {
        Ok(self.store.list_name_price().await?)
    }

    // ========== Reference data ==========

    pub async fn list_brands(&self) -> CatalogResult<Vec<Brand>> {
        Ok(self.store.list_brands().await?)
    }

    pub async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.store.list_categories().await?)
    }

    pub async fn list_sizes(&self) -> CatalogResult<Vec<Size>> {
        Ok(self.store.list_sizes().await?)
    }

    pub async fn list_colors(&self) -> CatalogResult<Vec<Color>> {
        Ok(self.store.list_colors().await?)
    }
}

fn log_rejection(op: &'static str, product_id: Option<i64>, err: &CatalogError) {
    if let CatalogError::Storage(e) = err {
        tracing::error!(op, product_id, error = %e, "Product write failed");
    } else if err.is_validation() {
        tracing::debug!(op, product_id, error = %err, "Product write rejected");
    } else {
        tracing::info!(op, product_id, error = %err, "Product write rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::MemoryCatalog;
    use shared::models::ProductOptionInput;

    fn service() -> CatalogService<MemoryCatalog> {
        CatalogService::new(Arc::new(MemoryCatalog::seeded()), ReconcilePolicy::default())
    }

    fn upsert(code: &str, price: f64) -> ProductUpsert {
        ProductUpsert {
            code: Some(code.into()),
            name: Some(format!("Product {code}")),
            price: Some(price),
            brand_id: Some(1),
            category_id: Some(2),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_filter_by_max_price() {
        let svc = service();
        svc.create(&upsert("A", 5.0)).await.unwrap();
        svc.create(&upsert("B", 15.0)).await.unwrap();

        assert_eq!(svc.filter_by_max_price(None).await.unwrap().len(), 2);
        let cheap = svc.filter_by_max_price(Some(10.0)).await.unwrap();
        assert_eq!(cheap.len(), 1);
        assert_eq!(cheap[0].code, "A");
        assert_eq!(cheap[0].category.id, 2);

        assert!(matches!(
            svc.filter_by_max_price(Some(0.0)).await,
            Err(CatalogError::InvalidFilter)
        ));
        assert!(matches!(
            svc.filter_by_max_price(Some(-3.0)).await,
            Err(CatalogError::InvalidFilter)
        ));
        assert!(matches!(
            svc.filter_by_max_price(Some(f64::NAN)).await,
            Err(CatalogError::InvalidFilter)
        ));
    }

    #[tokio::test]
    async fn test_projections() {
        let svc = service();
        let mut input = upsert("A", 5.0);
        input.options = Some(vec![ProductOptionInput::new(1, 1, 1)]);
        svc.create(&input).await.unwrap();

        let listed = svc.list_all().await.unwrap();
        assert_eq!(listed[0].name, "Product A");
        let names = svc.name_and_price().await.unwrap();
        assert_eq!(names[0].price, 5.0);
    }

    #[tokio::test]
    async fn test_find_by_code_and_delete() {
        let svc = service();
        let created = svc.create(&upsert("A", 5.0)).await.unwrap();

        assert_eq!(svc.find_by_code("A").await.unwrap().id, created.id);
        assert!(matches!(
            svc.find_by_code("nope").await,
            Err(CatalogError::NotFound(_))
        ));

        svc.delete(created.id).await.unwrap();
        assert!(matches!(
            svc.delete(created.id).await,
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(svc.get(created.id).await, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_reference_listing() {
        let svc = service();
        assert_eq!(svc.list_sizes().await.unwrap().len(), 4);
        assert_eq!(svc.list_brands().await.unwrap()[0].name, "Generic");
    }
}
