use axum::{Json, extract::State};
use shared::models::{Brand, Category, Color, Size};

use crate::core::ServerState;
use crate::utils::AppResult;

pub async fn list_brands(State(state): State<ServerState>) -> AppResult<Json<Vec<Brand>>> {
    Ok(Json(state.catalog.list_brands().await?))
}

pub async fn list_categories(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.catalog.list_categories().await?))
}

pub async fn list_sizes(State(state): State<ServerState>) -> AppResult<Json<Vec<Size>>> {
    Ok(Json(state.catalog.list_sizes().await?))
}

pub async fn list_colors(State(state): State<ServerState>) -> AppResult<Json<Vec<Color>>> {
    Ok(Json(state.catalog.list_colors().await?))
}
