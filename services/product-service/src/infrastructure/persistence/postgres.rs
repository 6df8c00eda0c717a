//! PostgreSQL repository implementation

use async_trait::async_trait;
use catalog_adapter_postgres::TransactionManager;
use catalog_errors::{AppError, AppResult};
use catalog_ports::Repository;
use sqlx::PgPool;

use crate::domain::{Product, ProductId};

use super::rows::ProductRow;

pub struct PostgresProductRepository {
    tx_manager: TransactionManager,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            tx_manager: TransactionManager::new(pool),
        }
    }
}

#[async_trait]
impl Repository<Product, ProductId> for PostgresProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, quantity
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(*id)
        .fetch_optional(self.tx_manager.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to query product: {}", e)))?;

        Ok(row.map(Product::from))
    }

    async fn save(&self, product: Product) -> AppResult<Product> {
        // 产品创建后不可修改，ID 只能由序列生成
        if let Some(id) = product.id() {
            return Err(AppError::internal(format!(
                "Product {} is already persisted",
                id
            )));
        }

        // 写入与 ID 回填在同一事务内，出错时事务随 drop 回滚
        let mut tx = self.tx_manager.begin().await?;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, price, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, quantity
            "#,
        )
        .bind(product.name())
        .bind(product.price())
        .bind(product.quantity())
        .fetch_one(tx.conn())
        .await
        .map_err(|e| AppError::database(format!("Failed to save product: {}", e)))?;

        tx.commit().await?;

        Ok(row.into())
    }
}
