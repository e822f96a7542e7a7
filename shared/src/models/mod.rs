//! Data models
//!
//! Shared between catalog-server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod patch;
pub mod product;
pub mod product_option;
pub mod reference;

// Re-exports
pub use patch::*;
pub use product::*;
pub use product_option::*;
pub use reference::*;
