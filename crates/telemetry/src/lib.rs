//! telemetry - 日志与 metrics 初始化

use catalog_errors::{AppError, AppResult};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 人类可读格式，本地开发使用
    Text,
    /// 每行一个 JSON 对象，便于日志采集
    Json,
}

impl LogFormat {
    /// 生产环境输出 JSON，其余环境输出文本
    pub fn for_app_env(app_env: &str) -> Self {
        if app_env == "production" {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// 初始化全局 tracing subscriber
///
/// `RUST_LOG` 存在时优先于配置的日志级别
pub fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

/// 安装 Prometheus recorder，返回用于渲染 /metrics 的句柄
///
/// 进程内只能安装一次
pub fn init_metrics() -> AppResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::internal(format!("Failed to install Prometheus recorder: {}", e)))
}
