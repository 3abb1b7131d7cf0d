//! Intake API 模块 (设备状态报告提交)
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 报告表单页面 |
//! | /process_input | POST | 提交报告 (form-encoded) |

mod handler;
mod views;

pub mod validate;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::index))
        .route("/process_input", post(handler::process_input))
}
