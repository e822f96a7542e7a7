use std::sync::Arc;

use crate::core::Config;
use crate::core::error::Result;
use crate::db::{DbService, SqliteCatalogStore};
use crate::services::CatalogService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | db | SQLite 连接池 |
/// | catalog | 商品目录服务 |
///
/// Clone 只复制引用计数。
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub catalog: CatalogService<SqliteCatalogStore>,
}

impl ServerState {
    /// 打开数据库 (含迁移) 并组装服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        if let Some(parent) = std::path::Path::new(&config.database_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::with_db(config.clone(), db))
    }

    /// 使用已有数据库组装状态 (测试可传入内存数据库)
    pub fn with_db(config: Config, db: DbService) -> Self {
        let store = Arc::new(SqliteCatalogStore::new(db.pool.clone()));
        let catalog = CatalogService::new(store, config.reconcile);
        Self {
            config: Arc::new(config),
            db,
            catalog,
        }
    }
}
