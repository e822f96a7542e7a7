//! Reference resolution
//!
//! Turns ids into reference entities. Absence of a row is the only failure
//! mode; storage errors pass through untouched. Sizes and colors are
//! memoized for the lifetime of one resolver since a request commonly
//! repeats them across options.

use std::collections::HashMap;

use shared::models::{Brand, Category, Color, Size};

use super::error::{CatalogError, CatalogResult};
use super::store::ReferenceLookup;

pub struct ReferenceResolver<'a, L: ReferenceLookup + ?Sized> {
    lookup: &'a L,
    sizes: HashMap<i64, Size>,
    colors: HashMap<i64, Color>,
}

impl<'a, L: ReferenceLookup + ?Sized> ReferenceResolver<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self {
            lookup,
            sizes: HashMap::new(),
            colors: HashMap::new(),
        }
    }

    pub async fn resolve_brand(&self, id: i64) -> CatalogResult<Brand> {
        self.lookup
            .find_brand(id)
            .await?
            .ok_or(CatalogError::InvalidBrandId(id))
    }

    pub async fn resolve_category(&self, id: i64) -> CatalogResult<Category> {
        self.lookup
            .find_category(id)
            .await?
            .ok_or(CatalogError::InvalidCategoryId(id))
    }

    pub async fn resolve_size(&mut self, id: i64) -> CatalogResult<Size> {
        if let Some(size) = self.sizes.get(&id) {
            return Ok(size.clone());
        }
        let size = self
            .lookup
            .find_size(id)
            .await?
            .ok_or(CatalogError::InvalidSizeId(id))?;
        self.sizes.insert(id, size.clone());
        Ok(size)
    }

    pub async fn resolve_color(&mut self, id: i64) -> CatalogResult<Color> {
        if let Some(color) = self.colors.get(&id) {
            return Ok(color.clone());
        }
        let color = self
            .lookup
            .find_color(id)
            .await?
            .ok_or(CatalogError::InvalidColorId(id))?;
        self.colors.insert(id, color.clone());
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::MemoryCatalog;

    #[tokio::test]
    async fn test_resolve_known_and_unknown() {
        let catalog = MemoryCatalog::seeded();
        let resolver = ReferenceResolver::new(&catalog);

        assert_eq!(resolver.resolve_brand(1).await.unwrap().id, 1);
        assert!(matches!(
            resolver.resolve_brand(42).await,
            Err(CatalogError::InvalidBrandId(42))
        ));
        assert!(matches!(
            resolver.resolve_category(0).await,
            Err(CatalogError::InvalidCategoryId(0))
        ));
    }

    #[tokio::test]
    async fn test_sizes_and_colors_are_memoized() {
        let catalog = MemoryCatalog::seeded();
        let mut resolver = ReferenceResolver::new(&catalog);

        for _ in 0..3 {
            resolver.resolve_size(2).await.unwrap();
            resolver.resolve_color(3).await.unwrap();
        }
        assert_eq!(catalog.reference_lookups(), 2);

        assert!(matches!(
            resolver.resolve_color(99).await,
            Err(CatalogError::InvalidColorId(99))
        ));
    }
}
