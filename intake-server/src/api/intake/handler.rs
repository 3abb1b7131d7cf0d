//! Intake Handlers
//!
//! 单一线性流程：读取表单 → 校验 → 计算诊断结果 → 持久化 → 渲染。
//! 校验失败时收集全部错误并随表单页一起返回，不写库；存储故障映射为
//! 通用失败响应。

use axum::{
    extract::{Form, State},
    response::Html,
};

use super::validate::IntakeForm;
use super::{validate, views};
use crate::core::ServerState;
use crate::db::repository::submission;
use crate::diagnostics;
use crate::utils::AppResult;

/// GET / - 报告表单页面
pub async fn index() -> Html<String> {
    Html(views::render_form(&[]))
}

/// POST /process_input - 提交报告
pub async fn process_input(
    State(state): State<ServerState>,
    Form(form): Form<IntakeForm>,
) -> AppResult<Html<String>> {
    let errors = validate::validate(&form);
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "Submission rejected by validation");
        return Ok(Html(views::render_form(&errors)));
    }

    let data = form.into_submission();
    let status = diagnostics::calculate_response_status(
        &data.device_serial_number,
        &data.light1,
        &data.light2,
        &data.light3,
    );

    let record = submission::create(&state.pool, data, status.as_str()).await?;
    tracing::info!(id = record.id, status = %status, "Submission recorded");

    Ok(Html(views::render_status(status.as_str())))
}
