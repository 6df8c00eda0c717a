//! 传输对象

use serde::{Deserialize, Serialize};

use crate::domain::ProductId;

/// 产品的对外表示
///
/// 所有字段可缺省，缺失字段反序列化为 `None`，不做必填校验
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDto {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}
