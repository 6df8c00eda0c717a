//! 统一错误转换
//!
//! 所有处理函数返回 `ServiceResult`，错误经由 `IntoResponse` 汇总到 [`render_error`]

use axum::response::{IntoResponse, Response};
use tracing::{error, info};

use crate::error::ServiceError;

/// 将服务错误渲染为 HTTP 响应
///
/// `ProductNotFound` 使用其携带的状态码和消息；基础设施错误只返回通用描述，
/// 具体原因写入日志
pub fn render_error(err: &ServiceError) -> Response {
    match err {
        ServiceError::NotFound(e) => {
            info!(status = e.status().as_u16(), "{}", e.message());
            (e.status(), e.message().to_string()).into_response()
        }
        ServiceError::App(e) => {
            let status = e.status_code();
            error!(status = status.as_u16(), error = %e, "Request failed");
            let reason = status.canonical_reason().unwrap_or("Internal Server Error");
            (status, reason).into_response()
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        render_error(&self)
    }
}
