//! 服务运行时

use catalog_config::AppConfig;
use catalog_telemetry::{LogFormat, init_tracing};
use tracing::{error, info};

/// 初始化日志，按运行环境选择输出格式
pub fn init_runtime(config: &AppConfig) {
    let format = LogFormat::for_app_env(&config.app_env);
    init_tracing(&config.telemetry.log_level, format);

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        ?format,
        "Runtime initialized"
    );
}

/// Ctrl+C 或 SIGTERM 到达时返回
///
/// 信号处理器安装失败只记录日志，对应分支永不完成
pub async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
