//! Option reconciliation
//!
//! Merges an incoming, ordered list of option records into a product's
//! persisted option set:
//!
//! - a record without an id (or with id `0`) becomes a new option, appended
//!   in request order
//! - a record with an id patches that option; only supplied fields change
//! - persisted options the request does not mention are kept, unless the
//!   policy says to remove them
//!
//! Work happens on a copy of the current set. On the first error the copy is
//! dropped and the caller's set is untouched.

use std::collections::{HashMap, HashSet};

use shared::models::{Patch, ProductOptionInput};

use super::OptionDraft;
use super::error::{CatalogError, CatalogResult};
use super::policy::{NegativeStockPolicy, OmittedOptionPolicy, ReconcilePolicy};
use super::resolver::ReferenceResolver;
use super::store::ReferenceLookup;
use crate::utils::validation::nonzero_id;

#[derive(Debug, Clone, Copy, Default)]
pub struct OptionReconciler {
    policy: ReconcilePolicy,
}

impl OptionReconciler {
    pub fn new(policy: ReconcilePolicy) -> Self {
        Self { policy }
    }

    /// Build a brand-new option. `index` is the record's position in the
    /// request and is reported back in errors.
    pub async fn new_option<L: ReferenceLookup + ?Sized>(
        &self,
        resolver: &mut ReferenceResolver<'_, L>,
        index: usize,
        record: &ProductOptionInput,
    ) -> CatalogResult<OptionDraft> {
        let size_id =
            nonzero_id(record.size_id.value().copied()).ok_or(CatalogError::MissingSize { index })?;
        let size = resolver.resolve_size(size_id).await?;

        let color_id = nonzero_id(record.color_id.value().copied())
            .ok_or(CatalogError::MissingColor { index })?;
        let color = resolver.resolve_color(color_id).await?;

        let stock_quantity = record
            .stock_quantity
            .value()
            .copied()
            .filter(|q| *q >= 0)
            .ok_or(CatalogError::InvalidStock { index })?;

        Ok(OptionDraft {
            id: None,
            size,
            color,
            stock_quantity,
        })
    }

    /// Produce the new authoritative option set for a product.
    pub async fn reconcile<L: ReferenceLookup + ?Sized>(
        &self,
        resolver: &mut ReferenceResolver<'_, L>,
        current: &[OptionDraft],
        incoming: &[ProductOptionInput],
    ) -> CatalogResult<Vec<OptionDraft>> {
        let mut result: Vec<OptionDraft> = current.to_vec();
        let positions: HashMap<i64, usize> = result
            .iter()
            .enumerate()
            .filter_map(|(pos, o)| o.id.map(|id| (id, pos)))
            .collect();
        let mut mentioned: HashSet<i64> = HashSet::new();

        for (index, record) in incoming.iter().enumerate() {
            match record.target_id() {
                None => {
                    let option = self.new_option(resolver, index, record).await?;
                    result.push(option);
                }
                Some(id) => {
                    let pos = *positions
                        .get(&id)
                        .ok_or(CatalogError::UnknownOptionId(id))?;
                    mentioned.insert(id);
                    self.patch_existing(resolver, index, &mut result[pos], record)
                        .await?;
                }
            }
        }

        if self.policy.omitted_options == OmittedOptionPolicy::Remove {
            result.retain(|o| o.id.is_none_or(|id| mentioned.contains(&id)));
        }

        Ok(result)
    }

    async fn patch_existing<L: ReferenceLookup + ?Sized>(
        &self,
        resolver: &mut ReferenceResolver<'_, L>,
        index: usize,
        option: &mut OptionDraft,
        record: &ProductOptionInput,
    ) -> CatalogResult<()> {
        match record.size_id {
            Patch::Absent => {}
            Patch::Null => return Err(CatalogError::MissingSize { index }),
            Patch::Value(id) => option.size = resolver.resolve_size(id).await?,
        }

        match record.color_id {
            Patch::Absent => {}
            Patch::Null => return Err(CatalogError::MissingColor { index }),
            Patch::Value(id) => option.color = resolver.resolve_color(id).await?,
        }

        match record.stock_quantity {
            Patch::Absent => {}
            Patch::Null => return Err(CatalogError::InvalidStock { index }),
            Patch::Value(q) if q >= 0 => option.stock_quantity = q,
            Patch::Value(q) => match self.policy.negative_stock {
                NegativeStockPolicy::Ignore => {
                    tracing::debug!(
                        option_id = ?option.id,
                        stock_quantity = q,
                        "Ignoring negative stock on existing option"
                    );
                }
                NegativeStockPolicy::Reject => return Err(CatalogError::InvalidStock { index }),
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::MemoryCatalog;
    use shared::models::{Color, Size};

    fn existing(id: i64, size: i64, color: i64, stock: i64) -> OptionDraft {
        OptionDraft {
            id: Some(id),
            size: Size {
                id: size,
                name: format!("size-{size}"),
            },
            color: Color {
                id: color,
                name: format!("color-{color}"),
            },
            stock_quantity: stock,
        }
    }

    async fn run(
        policy: ReconcilePolicy,
        current: &[OptionDraft],
        incoming: &[ProductOptionInput],
    ) -> CatalogResult<Vec<OptionDraft>> {
        let catalog = MemoryCatalog::seeded();
        let mut resolver = ReferenceResolver::new(&catalog);
        OptionReconciler::new(policy)
            .reconcile(&mut resolver, current, incoming)
            .await
    }

    #[tokio::test]
    async fn test_appends_new_option_and_keeps_existing() {
        let current = vec![existing(99, 1, 1, 7)];
        let out = run(
            ReconcilePolicy::default(),
            &current,
            &[ProductOptionInput::new(2, 3, 10)],
        )
        .await
        .unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], current[0]);
        assert_eq!(out[1].id, None);
        assert_eq!(out[1].size.id, 2);
        assert_eq!(out[1].color.id, 3);
        assert_eq!(out[1].stock_quantity, 10);
    }

    #[tokio::test]
    async fn test_negative_stock_on_existing_is_ignored_by_default() {
        let current = vec![existing(99, 1, 1, 7)];
        let record = ProductOptionInput {
            stock_quantity: Patch::Value(-1),
            ..ProductOptionInput::existing(99)
        };
        let out = run(ReconcilePolicy::default(), &current, &[record.clone()])
            .await
            .unwrap();
        assert_eq!(out, current);

        let strict = ReconcilePolicy {
            negative_stock: NegativeStockPolicy::Reject,
            ..Default::default()
        };
        assert!(matches!(
            run(strict, &current, &[record]).await,
            Err(CatalogError::InvalidStock { index: 0 })
        ));
    }

    #[tokio::test]
    async fn test_partial_update_touches_only_supplied_fields() {
        let current = vec![existing(5, 1, 1, 7), existing(6, 2, 2, 3)];
        let record = ProductOptionInput {
            color_id: Patch::Value(4),
            ..ProductOptionInput::existing(6)
        };
        let out = run(ReconcilePolicy::default(), &current, &[record])
            .await
            .unwrap();

        assert_eq!(out[0], current[0]);
        assert_eq!(out[1].size, current[1].size);
        assert_eq!(out[1].color.id, 4);
        assert_eq!(out[1].color.name, "Blue");
        assert_eq!(out[1].stock_quantity, 3);
    }

    #[tokio::test]
    async fn test_explicit_null_is_not_omission() {
        let current = vec![existing(5, 1, 1, 7)];
        let record = ProductOptionInput {
            size_id: Patch::Null,
            ..ProductOptionInput::existing(5)
        };
        assert!(matches!(
            run(ReconcilePolicy::default(), &current, &[record]).await,
            Err(CatalogError::MissingSize { index: 0 })
        ));
    }

    #[tokio::test]
    async fn test_unknown_option_id_fails() {
        let current = vec![existing(5, 1, 1, 7)];
        assert!(matches!(
            run(
                ReconcilePolicy::default(),
                &current,
                &[ProductOptionInput::existing(99)]
            )
            .await,
            Err(CatalogError::UnknownOptionId(99))
        ));
    }

    #[tokio::test]
    async fn test_zero_id_means_new_option() {
        let record = ProductOptionInput {
            option_id: Some(0),
            ..ProductOptionInput::new(1, 1, 0)
        };
        let out = run(ReconcilePolicy::default(), &[], &[record])
            .await
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, None);
    }

    #[tokio::test]
    async fn test_new_option_check_order() {
        let missing_all = ProductOptionInput::default();
        assert!(matches!(
            run(ReconcilePolicy::default(), &[], &[missing_all]).await,
            Err(CatalogError::MissingSize { index: 0 })
        ));

        // Unresolvable size is reported before the missing color
        let bad_size = ProductOptionInput {
            size_id: Patch::Value(42),
            ..Default::default()
        };
        assert!(matches!(
            run(ReconcilePolicy::default(), &[], &[bad_size]).await,
            Err(CatalogError::InvalidSizeId(42))
        ));

        let no_color = ProductOptionInput {
            color_id: Patch::Value(0),
            ..ProductOptionInput::new(1, 1, 1)
        };
        assert!(matches!(
            run(ReconcilePolicy::default(), &[], &[no_color]).await,
            Err(CatalogError::MissingColor { index: 0 })
        ));

        let negative = ProductOptionInput::new(1, 1, -3);
        let ok = ProductOptionInput::new(1, 1, 3);
        assert!(matches!(
            run(ReconcilePolicy::default(), &[], &[ok, negative]).await,
            Err(CatalogError::InvalidStock { index: 1 })
        ));
    }

    #[tokio::test]
    async fn test_omitted_options_removed_under_remove_policy() {
        let current = vec![existing(5, 1, 1, 7), existing(6, 2, 2, 3)];
        let incoming = [
            ProductOptionInput::existing(6),
            ProductOptionInput::new(3, 3, 1),
        ];

        let kept = run(ReconcilePolicy::default(), &current, &incoming)
            .await
            .unwrap();
        assert_eq!(kept.len(), 3);

        let remove = ReconcilePolicy {
            omitted_options: OmittedOptionPolicy::Remove,
            ..Default::default()
        };
        let out = run(remove, &current, &incoming).await.unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, Some(6));
        assert_eq!(out[1].id, None);
    }

    #[tokio::test]
    async fn test_failure_after_partial_progress_leaves_input_untouched() {
        let current = vec![existing(5, 1, 1, 7)];
        let incoming = [
            ProductOptionInput {
                stock_quantity: Patch::Value(50),
                ..ProductOptionInput::existing(5)
            },
            ProductOptionInput::existing(404),
        ];
        let before = current.clone();
        assert!(run(ReconcilePolicy::default(), &current, &incoming).await.is_err());
        assert_eq!(current, before);
    }
}
