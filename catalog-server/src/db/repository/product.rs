//! Product Repository

use super::{RepoResult, Tx};
use shared::models::{NameAndPrice, Product, ProductSummary};
use sqlx::SqlitePool;

const PRODUCT_COLUMNS: &str =
    "id, code, name, description, price, brand_id, category_id, created_at, updated_at";

/// Scalar columns written on insert/update
#[derive(Debug, Clone)]
pub struct ProductRow<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub brand_id: i64,
    pub category_id: i64,
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let row = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM product WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Exact match on code; lowest id wins if legacy duplicates exist.
pub async fn find_by_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<Product>> {
    let row = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM product WHERE code = ? ORDER BY id LIMIT 1"
    ))
    .bind(code)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn exists_by_code(pool: &SqlitePool, code: &str) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    let rows = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM product ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_summaries(pool: &SqlitePool) -> RepoResult<Vec<ProductSummary>> {
    let rows = sqlx::query_as::<_, ProductSummary>(
        "SELECT id, code, name, description, price FROM product ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_up_to(pool: &SqlitePool, max_price: f64) -> RepoResult<Vec<Product>> {
    let rows = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM product WHERE price <= ? ORDER BY id"
    ))
    .bind(max_price)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_name_price(pool: &SqlitePool) -> RepoResult<Vec<NameAndPrice>> {
    let rows = sqlx::query_as::<_, NameAndPrice>("SELECT name, price FROM product ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn insert(tx: &mut Tx<'_>, row: &ProductRow<'_>) -> RepoResult<i64> {
    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO product (code, name, description, price, brand_id, category_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7) RETURNING id",
    )
    .bind(row.code)
    .bind(row.name)
    .bind(row.description)
    .bind(row.price)
    .bind(row.brand_id)
    .bind(row.category_id)
    .bind(now)
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}

/// Overwrite every scalar column. Returns false when the row is gone.
pub async fn update(tx: &mut Tx<'_>, id: i64, row: &ProductRow<'_>) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE product SET code = ?1, name = ?2, description = ?3, price = ?4, brand_id = ?5, category_id = ?6, updated_at = ?7 WHERE id = ?8",
    )
    .bind(row.code)
    .bind(row.name)
    .bind(row.description)
    .bind(row.price)
    .bind(row.brand_id)
    .bind(row.category_id)
    .bind(now)
    .bind(id)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(tx: &mut Tx<'_>, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM product WHERE id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(result.rows_affected() > 0)
}
