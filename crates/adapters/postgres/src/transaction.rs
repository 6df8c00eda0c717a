//! 事务边界

use catalog_errors::{AppError, AppResult};
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use tracing::debug;

/// 开启事务的入口
#[derive(Clone)]
pub struct TransactionManager {
    pool: PgPool,
}

impl TransactionManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 不需要事务的读操作直接使用连接池
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn begin(&self) -> AppResult<ScopedTransaction> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))?;
        debug!("Transaction started");
        Ok(ScopedTransaction { tx })
    }
}

/// 作用域事务
///
/// 只有显式 [`commit`](Self::commit) 才会提交；提前返回或出错导致 drop 时自动回滚
pub struct ScopedTransaction {
    tx: Transaction<'static, Postgres>,
}

impl ScopedTransaction {
    /// 事务内的连接，作为 sqlx 查询的 executor
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> AppResult<()> {
        self.tx
            .commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {}", e)))?;
        debug!("Transaction committed");
        Ok(())
    }
}
