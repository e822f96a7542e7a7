//! Product API Handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use shared::models::{NameAndPrice, ProductFull, ProductSummary, ProductUpsert};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Request bodies that fail to parse get the unified error body too
fn parse_body(body: Result<Json<ProductUpsert>, JsonRejection>) -> AppResult<ProductUpsert> {
    body.map(|Json(input)| input)
        .map_err(|rejection| AppError::invalid_request(rejection.body_text()))
}

fn parse_id(id: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|rejection| AppError::invalid_request(rejection.body_text()))
}

/// GET /api/products - 商品列表 (不含规格选项)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ProductSummary>>> {
    Ok(Json(state.catalog.list_all().await?))
}

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    #[serde(default, alias = "maxPrice")]
    pub max_price: Option<f64>,
}

/// GET /api/products/filter?max_price= - 按最高价格筛选
pub async fn filter(
    State(state): State<ServerState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> AppResult<Json<Vec<ProductFull>>> {
    let Query(query) =
        query.map_err(|rejection| AppError::invalid_request(rejection.body_text()))?;
    Ok(Json(state.catalog.filter_by_max_price(query.max_price).await?))
}

/// GET /api/products/name-price - 名称与价格投影
pub async fn name_price(State(state): State<ServerState>) -> AppResult<Json<Vec<NameAndPrice>>> {
    Ok(Json(state.catalog.name_and_price().await?))
}

/// GET /api/products/code/:code
pub async fn get_by_code(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<ProductFull>> {
    Ok(Json(state.catalog.find_by_code(&code).await?))
}

/// GET /api/products/:id - 获取完整商品 (含品牌、分类、规格选项)
pub async fn get_by_id(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<ProductFull>> {
    let id = parse_id(id)?;
    Ok(Json(state.catalog.get(id).await?))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<ProductUpsert>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProductFull>)> {
    let input = parse_body(body)?;
    let product = state.catalog.create(&input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/:id - 更新商品并合并规格选项
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductUpsert>, JsonRejection>,
) -> AppResult<Json<ProductFull>> {
    let id = parse_id(id)?;
    let input = parse_body(body)?;
    Ok(Json(state.catalog.update(id, &input).await?))
}

/// DELETE /api/products/:id - 删除商品及其全部规格选项
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = parse_id(id)?;
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
