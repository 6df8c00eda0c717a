//! HTTP 服务启动器

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use catalog_config::AppConfig;
use catalog_errors::AppResult;
use catalog_telemetry::init_metrics;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::health::{HealthChecker, health_routes};
use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};

/// 启动 HTTP 服务并阻塞到收到关闭信号
///
/// 启动顺序：
/// 1. 从 `config_dir` 加载配置并解析监听地址
/// 2. 初始化日志与 Prometheus recorder
/// 3. 连接数据库（带重试）
/// 4. 调用 `router_builder` 构建业务路由
/// 5. 合并 /health、/ready、/metrics 并挂载请求追踪
/// 6. 监听端口，Ctrl+C / SIGTERM 时优雅退出
///
/// # 示例
///
/// ```ignore
/// use catalog_bootstrap::run_http_server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http_server("config", |infra| async move {
///         Ok(my_routes(infra.postgres_pool()))
///     })
///     .await
/// }
/// ```
pub async fn run_http_server<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(config_dir)?;
    let addr = config.server.socket_addr()?;

    init_runtime(&config);
    info!("Starting {} service", config.app_name);

    // recorder 安装失败不影响业务，/metrics 返回 404
    let metrics = init_metrics()
        .inspect_err(|e| warn!("{}, continuing without metrics", e))
        .ok();

    let infra = Infrastructure::from_config(config).await?;
    let health_checker = Arc::new(HealthChecker::new(infra.postgres_pool()));

    let app = router_builder(infra)
        .await?
        .merge(health_routes(health_checker, metrics))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");
    Ok(())
}
