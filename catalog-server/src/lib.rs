//! Catalog Server - 商品目录维护服务
//!
//! # 架构概述
//!
//! - **目录核心** (`catalog`): 字段校验、引用解析、规格选项合并
//! - **服务层** (`services`): `CatalogService` 读写入口
//! - **数据库** (`db`): SQLite 连接池、迁移、仓储函数与 `SqliteCatalogStore`
//! - **HTTP API** (`api`): RESTful 接口
//!
//! # 模块结构
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── catalog/       # 校验 → 解析 → 合并 → 组装
//! ├── services/      # CatalogService
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 日志、校验工具
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use catalog::{CatalogError, ReconcilePolicy};
pub use self::core::{Config, Server, ServerState, build_router};
pub use db::{DbService, SqliteCatalogStore};
pub use services::CatalogService;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 加载 .env 与配置并初始化日志
pub fn setup_environment() -> self::core::Result<Config> {
    // .env is optional
    let _ = dotenv::dotenv();

    let config = Config::from_env()?;
    std::fs::create_dir_all(&config.work_dir)?;
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#
    );
}
