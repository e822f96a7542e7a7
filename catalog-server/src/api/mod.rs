//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 商品管理接口
//! - [`references`] - 品牌/分类/尺码/颜色 (只读)

pub mod health;
pub mod products;
pub mod references;

use axum::Router;

use crate::core::ServerState;

/// All routes, without middleware layers
pub fn routes() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(references::router())
}
