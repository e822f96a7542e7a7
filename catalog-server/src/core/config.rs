use std::path::PathBuf;

use crate::catalog::{NegativeStockPolicy, OmittedOptionPolicy, ReconcilePolicy};
use crate::core::error::{Result, ServerError};

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | DATABASE_PATH | $WORK_DIR/catalog.db | SQLite 数据库文件 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 日志输出 |
/// | LOG_DIR | (none) | 按天滚动的日志目录 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | STOCK_POLICY | ignore_negative | 已有规格负库存: ignore_negative / reject_negative |
/// | OMITTED_OPTIONS | keep | 更新时未提及的规格: keep / remove |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/catalog HTTP_PORT=8080 OMITTED_OPTIONS=remove cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub database_path: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub request_timeout_ms: u64,
    /// 规格合并策略
    pub reconcile: ReconcilePolicy,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；数值无法解析时同样回退到默认值，
    /// 策略变量无法识别时返回错误。
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置 (测试用)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let work_dir = lookup("WORK_DIR").unwrap_or_else(|| "./data".into());
        let database_path = lookup("DATABASE_PATH").unwrap_or_else(|| {
            PathBuf::from(&work_dir)
                .join("catalog.db")
                .to_string_lossy()
                .into_owned()
        });

        let negative_stock = match lookup("STOCK_POLICY") {
            Some(v) => v
                .parse::<NegativeStockPolicy>()
                .map_err(|e| ServerError::Config(format!("STOCK_POLICY: {e}")))?,
            None => NegativeStockPolicy::default(),
        };
        let omitted_options = match lookup("OMITTED_OPTIONS") {
            Some(v) => v
                .parse::<OmittedOptionPolicy>()
                .map_err(|e| ServerError::Config(format!("OMITTED_OPTIONS: {e}")))?,
            None => OmittedOptionPolicy::default(),
        };

        Ok(Self {
            database_path,
            http_port: parsed(lookup("HTTP_PORT")).unwrap_or(3000),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: parsed(lookup("LOG_JSON")).unwrap_or(false),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            request_timeout_ms: parsed(lookup("REQUEST_TIMEOUT_MS")).unwrap_or(30000),
            reconcile: ReconcilePolicy {
                negative_stock,
                omitted_options,
            },
            work_dir,
        })
    }
}

fn parsed<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}
