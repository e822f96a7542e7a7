//! In-memory store for unit tests

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use shared::models::{Brand, Category, Color, ProductFull, ProductOptionFull, Size};

use super::ProductDraft;
use super::store::{ProductStore, ReferenceLookup};
use crate::db::repository::{RepoError, RepoResult};

#[derive(Default)]
struct Tables {
    products: BTreeMap<i64, ProductFull>,
    next_product_id: i64,
    next_option_id: i64,
}

pub struct MemoryCatalog {
    brands: Vec<Brand>,
    categories: Vec<Category>,
    sizes: Vec<Size>,
    colors: Vec<Color>,
    tables: Mutex<Tables>,
    lookups: AtomicUsize,
    saves: AtomicUsize,
}

fn named<T>(names: &[&str], make: impl Fn(i64, String) -> T) -> Vec<T> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| make(i as i64 + 1, n.to_string()))
        .collect()
}

impl MemoryCatalog {
    /// Same reference rows as the SQLite seed migration
    pub fn seeded() -> Self {
        Self {
            brands: named(&["Generic", "Northwind", "Contoso"], |id, name| Brand { id, name }),
            categories: named(&["Shirts", "Trousers", "Shoes"], |id, name| Category { id, name }),
            sizes: named(&["S", "M", "L", "XL"], |id, name| Size { id, name }),
            colors: named(&["Black", "White", "Red", "Blue"], |id, name| Color { id, name }),
            tables: Mutex::new(Tables::default()),
            lookups: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of size/color lookups served
    pub fn reference_lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReferenceLookup for MemoryCatalog {
    async fn find_brand(&self, id: i64) -> RepoResult<Option<Brand>> {
        Ok(self.brands.iter().find(|b| b.id == id).cloned())
    }

    async fn find_category(&self, id: i64) -> RepoResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_size(&self, id: i64) -> RepoResult<Option<Size>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.sizes.iter().find(|s| s.id == id).cloned())
    }

    async fn find_color(&self, id: i64) -> RepoResult<Option<Color>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.colors.iter().find(|c| c.id == id).cloned())
    }

    async fn list_brands(&self) -> RepoResult<Vec<Brand>> {
        Ok(self.brands.clone())
    }

    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn list_sizes(&self) -> RepoResult<Vec<Size>> {
        Ok(self.sizes.clone())
    }

    async fn list_colors(&self) -> RepoResult<Vec<Color>> {
        Ok(self.colors.clone())
    }
}

#[async_trait]
impl ProductStore for MemoryCatalog {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ProductFull>> {
        Ok(self.tables.lock().unwrap().products.get(&id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> RepoResult<Option<ProductFull>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.products.values().find(|p| p.code == code).cloned())
    }

    async fn exists_by_code(&self, code: &str) -> RepoResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.products.values().any(|p| p.code == code))
    }

    async fn save(&self, draft: ProductDraft) -> RepoResult<ProductFull> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut tables = self.tables.lock().unwrap();
        let now = shared::util::now_millis();

        if tables
            .products
            .values()
            .any(|p| p.code == draft.code && Some(p.id) != draft.id)
        {
            return Err(RepoError::Duplicate(draft.code));
        }

        let (id, created_at, mut options) = match draft.id {
            Some(id) => {
                let existing = tables
                    .products
                    .get(&id)
                    .ok_or_else(|| RepoError::NotFound(format!("product {id}")))?;
                (id, existing.created_at, existing.options.clone())
            }
            None => {
                tables.next_product_id += 1;
                (tables.next_product_id, now, Vec::new())
            }
        };

        options.retain(|o| !draft.removed_options.contains(&o.id));
        for option in draft.options {
            let option_id = match option.id {
                Some(id) => id,
                None => {
                    tables.next_option_id += 1;
                    tables.next_option_id
                }
            };
            let saved = ProductOptionFull {
                id: option_id,
                size: option.size,
                color: option.color,
                stock_quantity: option.stock_quantity,
            };
            match options.iter_mut().find(|o| o.id == option_id) {
                Some(slot) => *slot = saved,
                None => options.push(saved),
            }
        }

        let product = ProductFull {
            id,
            code: draft.code,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            brand: draft.brand,
            category: draft.category,
            options,
            created_at,
            updated_at: now,
        };
        tables.products.insert(id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.tables.lock().unwrap().products.remove(&id).is_some())
    }

    async fn find_all(&self) -> RepoResult<Vec<ProductFull>> {
        Ok(self.tables.lock().unwrap().products.values().cloned().collect())
    }
}
