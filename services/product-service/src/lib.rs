//! product-service - 产品信息服务
//!
//! 提供产品的创建与按 ID 查询

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
