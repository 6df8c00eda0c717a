//! product-service 入口

use std::sync::Arc;

use catalog_adapter_postgres::ensure_schema;
use catalog_bootstrap::{Infrastructure, run_http_server};
use tracing::info;

use product_service::api;
use product_service::application::ProductServiceImpl;
use product_service::infrastructure::persistence::{PRODUCTS_DDL, PostgresProductRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 不存在时忽略
    dotenvy::dotenv().ok();

    run_http_server("config", |infra: Infrastructure| async move {
        info!("Initializing {}...", infra.config().app_name);

        let pool = infra.postgres_pool();
        ensure_schema(&pool, PRODUCTS_DDL).await?;

        let product_repo = Arc::new(PostgresProductRepository::new(pool));
        let product_service = Arc::new(ProductServiceImpl::new(product_repo));
        info!("Product service initialized");

        Ok(api::routes(product_service))
    })
    .await
}
