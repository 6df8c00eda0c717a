//! 服务错误类型

use axum::http::StatusCode;
use catalog_errors::AppError;
use thiserror::Error;

use crate::domain::ProductId;

/// 产品不存在
///
/// 携带显式的 HTTP 状态码，错误处理方必须使用该状态码而不是假定 404
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProductNotFound {
    message: String,
    status: StatusCode,
}

impl ProductNotFound {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// 按 ID 查询未命中
    pub fn for_id(id: ProductId) -> Self {
        Self::new(
            format!("Product details not found for ID: {}", id),
            StatusCode::NOT_FOUND,
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// 服务层错误
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    NotFound(#[from] ProductNotFound),

    #[error(transparent)]
    App(#[from] AppError),
}

impl ServiceError {
    /// 错误对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(e) => e.status(),
            Self::App(e) => e.status_code(),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
