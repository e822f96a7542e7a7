//! 服务层
//!
//! - [`CatalogService`] - 商品目录的读写操作入口

pub mod catalog_service;

pub use catalog_service::CatalogService;
