//! 表结构初始化
//!
//! 服务启动时执行幂等的 DDL，不做版本化迁移

use catalog_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::info;

/// 执行幂等 DDL（如 `CREATE TABLE IF NOT EXISTS`）
pub async fn ensure_schema(pool: &PgPool, ddl: &str) -> AppResult<()> {
    sqlx::raw_sql(ddl)
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to apply schema: {}", e)))?;

    info!("Database schema ensured");
    Ok(())
}
