//! HTTP 接口层

mod error_handler;
mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::ProductService;

pub use error_handler::render_error;

/// 产品接口的路由前缀
pub const BASE_PATH: &str = "/web/api/v1/product";

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
}

/// 构建产品路由
pub fn routes(product_service: Arc<dyn ProductService>) -> Router {
    Router::new()
        .route(BASE_PATH, post(handlers::create_product))
        .route(&format!("{}/{{id}}", BASE_PATH), get(handlers::get_product))
        .with_state(AppState { product_service })
}
