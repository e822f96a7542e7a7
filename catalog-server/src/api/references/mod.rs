//! Reference data API (read-only)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/brands", get(handler::list_brands))
        .route("/api/categories", get(handler::list_categories))
        .route("/api/sizes", get(handler::list_sizes))
        .route("/api/colors", get(handler::list_colors))
}
