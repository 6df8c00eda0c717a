//! 产品接口处理函数

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::application::ProductDto;
use crate::domain::ProductId;
use crate::error::ServiceResult;

use super::AppState;

/// POST /web/api/v1/product
pub async fn create_product(
    State(state): State<AppState>,
    Json(dto): Json<ProductDto>,
) -> ServiceResult<(StatusCode, Json<ProductId>)> {
    info!("Saving product details");
    let id = state.product_service.save_product_details(dto).await?;
    info!(product_id = id, "Product details saved successfully");
    Ok((StatusCode::CREATED, Json(id)))
}

/// GET /web/api/v1/product/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> ServiceResult<Json<ProductDto>> {
    info!("Fetching product details for given ID: {}", id);
    let dto = state.product_service.get_product_details(id).await?;
    Ok(Json(dto))
}
