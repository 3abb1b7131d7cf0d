//! Intake Server - 设备状态报告接收服务
//!
//! # 架构概述
//!
//! 一个小型的设备状态报告接收服务：用户通过网页表单提交故障描述、
//! 设备序列号和三个指示灯状态，服务端校验输入、按规则表推导诊断结果、
//! 持久化提交记录并把诊断结果渲染回页面。
//!
//! # 模块结构
//!
//! ```text
//! intake-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器 (intake, health)
//! ├── db/            # 数据库层 (SQLite + 仓储)
//! ├── diagnostics.rs # 诊断规则引擎
//! └── utils/         # 错误类型、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod diagnostics;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_app};
pub use diagnostics::{ResponseStatus, calculate_response_status};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置进程环境：加载 .env 并初始化日志
///
/// 必须在 [`Config::from_env`] 之前调用，否则 .env 中的配置不生效
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____      __        __
   /  _/___  / /_____ _/ /_____
   / // __ \/ __/ __ `/ //_/ _ \
 _/ // / / / /_/ /_/ / ,< /  __/
/___/_/ /_/\__/\__,_/_/|_|\___/
    "#
    );
}
