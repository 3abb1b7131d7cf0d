use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::{AppError, AppResult};

/// 服务器状态 - 显式构造、逐层传递的共享状态
///
/// 持有配置和数据库连接池。连接池内部是 `Arc`，Clone 成本极低；
/// 所有 handler 通过 axum `State` 提取器访问，不存在进程级全局句柄。
///
/// # 使用示例
///
/// ```ignore
/// let config = Config::from_env();
/// let state = ServerState::initialize(&config).await?;
/// let pool = &state.pool;
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/intake.db, 启动时建表)
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_path();
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self::new(config.clone(), db_service.pool))
    }

    /// 获取数据库连接池
    pub fn get_pool(&self) -> SqlitePool {
        self.pool.clone()
    }
}
