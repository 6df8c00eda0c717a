//! 产品应用服务

use std::sync::Arc;

use async_trait::async_trait;
use catalog_errors::AppError;
use catalog_ports::Repository;
use metrics::counter;
use tracing::{debug, info};

use crate::domain::{ProductId, ProductRepository};
use crate::error::{ProductNotFound, ServiceResult};

use super::{ProductDto, new_product_from_dto};

/// 产品服务
#[async_trait]
pub trait ProductService: Send + Sync {
    /// 保存产品，返回生成的 ID
    async fn save_product_details(&self, dto: ProductDto) -> ServiceResult<ProductId>;

    /// 按 ID 查询产品
    async fn get_product_details(&self, id: ProductId) -> ServiceResult<ProductDto>;
}

pub struct ProductServiceImpl {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductServiceImpl {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn save_product_details(&self, dto: ProductDto) -> ServiceResult<ProductId> {
        let product = new_product_from_dto(dto);

        // 仓储在单个事务内完成写入与 ID 回填，失败时原样向上传播
        let saved = self.product_repo.save(product).await?;
        let id = saved
            .id()
            .ok_or_else(|| AppError::internal("Repository returned a product without id"))?;

        counter!("products_created_total").increment(1);
        info!(product_id = id, "Product persisted");

        Ok(id)
    }

    async fn get_product_details(&self, id: ProductId) -> ServiceResult<ProductDto> {
        let Some(product) = self.product_repo.find_by_id(&id).await? else {
            counter!("product_lookups_total", "outcome" => "not_found").increment(1);
            return Err(ProductNotFound::for_id(id).into());
        };

        counter!("product_lookups_total", "outcome" => "found").increment(1);
        debug!(product_id = id, "Product found");

        Ok(ProductDto::from(&product))
    }
}
