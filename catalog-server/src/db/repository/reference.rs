//! Reference Data Repository
//!
//! Brand, category, size and color share one shape (`id`, `name`) and are
//! read-only here.

use super::RepoResult;
use shared::models::{Brand, Category, Color, Size};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;

async fn find_one<T>(pool: &SqlitePool, table: &'static str, id: i64) -> RepoResult<Option<T>>
where
    T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
{
    let row = sqlx::query_as::<_, T>(&format!("SELECT id, name FROM {table} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

async fn list<T>(pool: &SqlitePool, table: &'static str) -> RepoResult<Vec<T>>
where
    T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
{
    let rows = sqlx::query_as::<_, T>(&format!("SELECT id, name FROM {table} ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_brand(pool: &SqlitePool, id: i64) -> RepoResult<Option<Brand>> {
    find_one(pool, "brand", id).await
}

pub async fn find_category(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    find_one(pool, "category", id).await
}

pub async fn find_size(pool: &SqlitePool, id: i64) -> RepoResult<Option<Size>> {
    find_one(pool, "size", id).await
}

pub async fn find_color(pool: &SqlitePool, id: i64) -> RepoResult<Option<Color>> {
    find_one(pool, "color", id).await
}

pub async fn list_brands(pool: &SqlitePool) -> RepoResult<Vec<Brand>> {
    list(pool, "brand").await
}

pub async fn list_categories(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    list(pool, "category").await
}

pub async fn list_sizes(pool: &SqlitePool) -> RepoResult<Vec<Size>> {
    list(pool, "size").await
}

pub async fn list_colors(pool: &SqlitePool) -> RepoResult<Vec<Color>> {
    list(pool, "color").await
}
