//! Product assembly
//!
//! Runs validation, reference resolution and option reconciliation in order
//! and produces one commit-ready [`ProductDraft`]. Nothing is written until
//! every step has passed; the single `save` at the end is the only side
//! effect.

use shared::models::{ProductFull, ProductUpsert};

use super::error::{CatalogError, CatalogResult};
use crate::db::repository::RepoError;
use super::policy::ReconcilePolicy;
use super::reconciler::OptionReconciler;
use super::resolver::ReferenceResolver;
use super::store::{ProductStore, ReferenceLookup};
use super::validator::{candidate_code, validate_product};
use super::{OptionDraft, ProductDraft};

pub struct ProductAssembler<'a, S: ?Sized> {
    store: &'a S,
    reconciler: OptionReconciler,
}

impl<'a, S> ProductAssembler<'a, S>
where
    S: ProductStore + ReferenceLookup + ?Sized,
{
    pub fn new(store: &'a S, policy: ReconcilePolicy) -> Self {
        Self {
            store,
            reconciler: OptionReconciler::new(policy),
        }
    }

    pub async fn create(&self, input: &ProductUpsert) -> CatalogResult<ProductFull> {
        let draft = self.prepare_create(input).await?;
        self.commit(draft).await
    }

    pub async fn update(&self, id: i64, input: &ProductUpsert) -> CatalogResult<ProductFull> {
        let draft = self.prepare_update(id, input).await?;
        self.commit(draft).await
    }

    /// Persist a prepared draft in one store call.
    pub async fn commit(&self, draft: ProductDraft) -> CatalogResult<ProductFull> {
        let code = draft.code.clone();
        self.store.save(draft).await.map_err(|err| match err {
            // Another writer took the code after the duplicate check
            RepoError::Duplicate(_) => CatalogError::DuplicateCode(code),
            other => CatalogError::Storage(other),
        })
    }

    /// Build the draft for a new product without persisting it.
    pub async fn prepare_create(&self, input: &ProductUpsert) -> CatalogResult<ProductDraft> {
        if let Some(code) = candidate_code(input)
            && self.store.exists_by_code(code).await?
        {
            return Err(CatalogError::DuplicateCode(code.to_string()));
        }

        let fields = validate_product(input)?;

        let mut resolver = ReferenceResolver::new(self.store);
        let brand = resolver.resolve_brand(fields.brand_id).await?;
        let category = resolver.resolve_category(fields.category_id).await?;

        let records = input.options.as_deref().unwrap_or_default();
        let mut options: Vec<OptionDraft> = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if let Some(id) = record.target_id() {
                return Err(CatalogError::UnexpectedOptionId(id));
            }
            options.push(self.reconciler.new_option(&mut resolver, index, record).await?);
        }

        Ok(ProductDraft {
            id: None,
            code: fields.code,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            brand,
            category,
            options,
            removed_options: Vec::new(),
        })
    }

    /// Build the updated draft of an existing product without persisting it.
    pub async fn prepare_update(
        &self,
        id: i64,
        input: &ProductUpsert,
    ) -> CatalogResult<ProductDraft> {
        let current = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Product {id}")))?;

        if let Some(code) = candidate_code(input)
            && code != current.code
            && self.store.exists_by_code(code).await?
        {
            return Err(CatalogError::DuplicateCode(code.to_string()));
        }

        let fields = validate_product(input)?;

        let mut resolver = ReferenceResolver::new(self.store);
        let brand = resolver.resolve_brand(fields.brand_id).await?;
        let category = resolver.resolve_category(fields.category_id).await?;

        let mut draft = ProductDraft::from(current);
        draft.code = fields.code;
        draft.name = fields.name;
        draft.description = fields.description;
        draft.price = fields.price;
        draft.brand = brand;
        draft.category = category;

        if let Some(records) = &input.options {
            let options = self
                .reconciler
                .reconcile(&mut resolver, &draft.options, records)
                .await?;
            draft.removed_options = draft
                .options
                .iter()
                .filter_map(|o| o.id)
                .filter(|id| !options.iter().any(|o| o.id == Some(*id)))
                .collect();
            draft.options = options;
        }

        Ok(draft)
    }
}
