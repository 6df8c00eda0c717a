//! 启动期创建的共享资源

use catalog_adapter_postgres::{PostgresConfig, create_pool};
use catalog_config::AppConfig;
use catalog_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryConfig, with_retry};

/// 交给服务构建闭包的资源集合
pub struct Infrastructure {
    config: AppConfig,
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 连接数据库（失败时按默认策略重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let database = &config.database;
        let pg_config = PostgresConfig::new(database.url.expose_secret())
            .with_max_connections(database.max_connections)
            .with_min_connections(database.min_connections);

        let postgres_pool =
            with_retry(&RetryConfig::default(), "postgres", || create_pool(&pg_config)).await?;
        info!(
            max_connections = database.max_connections,
            "PostgreSQL connection pool created"
        );

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// PgPool 内部是 Arc，clone 只增加引用计数
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }
}
