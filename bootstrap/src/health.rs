//! 健康检查与 metrics 端点
//!
//! - `GET /health`：存活检查，不访问依赖
//! - `GET /ready`：就绪检查，数据库不可用时返回 503
//! - `GET /metrics`：Prometheus 文本格式

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use catalog_adapter_postgres::check_connection;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Healthy,
    Unhealthy,
}

/// 单个依赖的检查结果
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: &'static str,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 健康报告，任一依赖不健康则整体不健康
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: Status,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<ComponentHealth>,
}

impl HealthReport {
    fn new() -> Self {
        Self {
            status: Status::Healthy,
            version: env!("CARGO_PKG_VERSION"),
            checks: Vec::new(),
        }
    }

    fn with_check(mut self, check: ComponentHealth) -> Self {
        if check.status == Status::Unhealthy {
            self.status = Status::Unhealthy;
        }
        self.checks.push(check);
        self
    }

    fn http_status(&self) -> StatusCode {
        match self.status {
            Status::Healthy => StatusCode::OK,
            Status::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

pub struct HealthChecker {
    pool: PgPool,
}

impl HealthChecker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn liveness(&self) -> HealthReport {
        HealthReport::new()
    }

    pub async fn readiness(&self) -> HealthReport {
        let postgres = match check_connection(&self.pool).await {
            Ok(()) => ComponentHealth {
                name: "postgres",
                status: Status::Healthy,
                message: None,
            },
            Err(e) => ComponentHealth {
                name: "postgres",
                status: Status::Unhealthy,
                message: Some(e.to_string()),
            },
        };
        HealthReport::new().with_check(postgres)
    }
}

#[derive(Clone)]
struct HealthState {
    checker: Arc<HealthChecker>,
    metrics: Option<PrometheusHandle>,
}

/// 构建健康检查与 metrics 路由
///
/// 未安装 recorder 时 `/metrics` 返回 404
pub fn health_routes(checker: Arc<HealthChecker>, metrics: Option<PrometheusHandle>) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/ready", get(readiness))
        .route("/metrics", get(render_metrics))
        .with_state(HealthState { checker, metrics })
}

async fn liveness(State(state): State<HealthState>) -> Json<HealthReport> {
    Json(state.checker.liveness())
}

async fn readiness(State(state): State<HealthState>) -> Response {
    let report = state.checker.readiness().await;
    (report.http_status(), Json(report)).into_response()
}

async fn render_metrics(State(state): State<HealthState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
