//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResult`] - 应用级 Result 别名
//! - 日志等工具

pub mod error;
pub mod logger;

pub use error::{AppError, AppResponse, AppResult};
