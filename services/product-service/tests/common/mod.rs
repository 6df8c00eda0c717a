//! 测试辅助：内存仓储

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

use async_trait::async_trait;
use axum::Router;
use catalog_errors::{AppError, AppResult};
use catalog_ports::Repository;
use product_service::api;
use product_service::application::ProductServiceImpl;
use product_service::domain::{Product, ProductId};

/// 内存产品仓储，ID 从 1 开始自增
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<HashMap<ProductId, Product>>,
    last_id: AtomicI64,
}

#[async_trait]
impl Repository<Product, ProductId> for InMemoryProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        Ok(self.products.lock().unwrap().get(id).cloned())
    }

    async fn save(&self, product: Product) -> AppResult<Product> {
        if let Some(id) = product.id() {
            return Err(AppError::internal(format!("Product {} is already persisted", id)));
        }
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Product::restore(
            id,
            product.name().map(str::to_string),
            product.price(),
            product.quantity(),
        );
        self.products.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }
}

/// 写入总是失败的仓储，记录调用次数
#[derive(Default)]
pub struct FailingProductRepository {
    pub save_calls: AtomicU32,
}

#[async_trait]
impl Repository<Product, ProductId> for FailingProductRepository {
    async fn find_by_id(&self, _id: &ProductId) -> AppResult<Option<Product>> {
        Ok(None)
    }

    async fn save(&self, _product: Product) -> AppResult<Product> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::database("duplicate key value violates unique constraint"))
    }
}

pub fn app_with_memory_store() -> Router {
    let repo = Arc::new(InMemoryProductRepository::default());
    api::routes(Arc::new(ProductServiceImpl::new(repo)))
}
