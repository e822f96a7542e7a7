//! Product Option Repository
//!
//! Options are only ever written inside the owning product's transaction.

use super::{RepoResult, Tx};
use shared::models::{Color, ProductOption, ProductOptionFull, Size};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Option joined with its size and color names
#[derive(Debug, sqlx::FromRow)]
struct OptionJoinRow {
    id: i64,
    size_id: i64,
    size_name: String,
    color_id: i64,
    color_name: String,
    stock_quantity: i64,
}

impl From<OptionJoinRow> for ProductOptionFull {
    fn from(row: OptionJoinRow) -> Self {
        Self {
            id: row.id,
            size: Size {
                id: row.size_id,
                name: row.size_name,
            },
            color: Color {
                id: row.color_id,
                name: row.color_name,
            },
            stock_quantity: row.stock_quantity,
        }
    }
}

pub async fn find_by_product(pool: &SqlitePool, product_id: i64) -> RepoResult<Vec<ProductOption>> {
    let rows = sqlx::query_as::<_, ProductOption>(
        "SELECT id, product_id, size_id, color_id, stock_quantity FROM product_option WHERE product_id = ? ORDER BY id",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_full_by_product(
    pool: &SqlitePool,
    product_id: i64,
) -> RepoResult<Vec<ProductOptionFull>> {
    let rows = sqlx::query_as::<_, OptionJoinRow>(
        "SELECT po.id, s.id AS size_id, s.name AS size_name, c.id AS color_id, c.name AS color_name, po.stock_quantity FROM product_option po JOIN size s ON s.id = po.size_id JOIN color c ON c.id = po.color_id WHERE po.product_id = ? ORDER BY po.id",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn insert(
    tx: &mut Tx<'_>,
    product_id: i64,
    size_id: i64,
    color_id: i64,
    stock_quantity: i64,
) -> RepoResult<i64> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO product_option (product_id, size_id, color_id, stock_quantity) VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(product_id)
    .bind(size_id)
    .bind(color_id)
    .bind(stock_quantity)
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}

/// Update an option in place. Scoped to `product_id` so an option can never
/// be moved to another product; returns false when nothing matched.
pub async fn update(
    tx: &mut Tx<'_>,
    product_id: i64,
    option_id: i64,
    size_id: i64,
    color_id: i64,
    stock_quantity: i64,
) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE product_option SET size_id = ?1, color_id = ?2, stock_quantity = ?3 WHERE id = ?4 AND product_id = ?5",
    )
    .bind(size_id)
    .bind(color_id)
    .bind(stock_quantity)
    .bind(option_id)
    .bind(product_id)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete the listed options of one product. Ids owned by another product
/// are not touched.
pub async fn delete_ids(tx: &mut Tx<'_>, product_id: i64, ids: &[i64]) -> RepoResult<u64> {
    if ids.is_empty() {
        return Ok(0);
    }
    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new("DELETE FROM product_option WHERE product_id = ");
    qb.push_bind(product_id);
    qb.push(" AND id IN (");
    let mut separated = qb.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");
    let result = qb.build().execute(&mut **tx).await?;
    Ok(result.rows_affected())
}

pub async fn delete_by_product(tx: &mut Tx<'_>, product_id: i64) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM product_option WHERE product_id = ?")
        .bind(product_id)
        .execute(&mut **tx)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::product::{self, ProductRow};

    async fn seeded_product(db: &DbService) -> i64 {
        let mut tx = db.pool.begin().await.unwrap();
        let id = product::insert(
            &mut tx,
            &ProductRow {
                code: "SKU1",
                name: "Shirt",
                description: None,
                price: 10.0,
                brand_id: 1,
                category_id: 1,
            },
        )
        .await
        .unwrap();
        tx.commit().await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_insert_and_join() {
        let db = DbService::in_memory().await.unwrap();
        let product_id = seeded_product(&db).await;

        let mut tx = db.pool.begin().await.unwrap();
        insert(&mut tx, product_id, 2, 3, 10).await.unwrap();
        tx.commit().await.unwrap();

        let options = find_full_by_product(&db.pool, product_id).await.unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].size.name, "M");
        assert_eq!(options[0].color.name, "Red");
        assert_eq!(options[0].stock_quantity, 10);
    }

    #[tokio::test]
    async fn test_delete_ids_removes_only_listed_options() {
        let db = DbService::in_memory().await.unwrap();
        let product_id = seeded_product(&db).await;

        let mut tx = db.pool.begin().await.unwrap();
        let a = insert(&mut tx, product_id, 1, 1, 1).await.unwrap();
        let b = insert(&mut tx, product_id, 2, 2, 2).await.unwrap();
        assert_eq!(delete_ids(&mut tx, product_id, &[]).await.unwrap(), 0);
        assert_eq!(delete_ids(&mut tx, product_id + 1, &[b]).await.unwrap(), 0);
        let removed = delete_ids(&mut tx, product_id, &[b]).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(removed, 1);
        let left = find_by_product(&db.pool, product_id).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, a);
    }

    #[tokio::test]
    async fn test_update_scoped_to_owner() {
        let db = DbService::in_memory().await.unwrap();
        let product_id = seeded_product(&db).await;

        let mut tx = db.pool.begin().await.unwrap();
        let id = insert(&mut tx, product_id, 1, 1, 1).await.unwrap();
        assert!(update(&mut tx, product_id, id, 2, 2, 9).await.unwrap());
        assert!(!update(&mut tx, product_id + 1, id, 2, 2, 9).await.unwrap());
        tx.commit().await.unwrap();

        let left = find_by_product(&db.pool, product_id).await.unwrap();
        assert_eq!(left[0].stock_quantity, 9);
    }

    #[tokio::test]
    async fn test_negative_stock_rejected_by_schema() {
        let db = DbService::in_memory().await.unwrap();
        let product_id = seeded_product(&db).await;

        let mut tx = db.pool.begin().await.unwrap();
        assert!(insert(&mut tx, product_id, 1, 1, -1).await.is_err());
    }
}
