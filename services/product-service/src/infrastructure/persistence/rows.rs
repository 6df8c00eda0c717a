//! 数据库行映射结构

use sqlx::FromRow;

use crate::domain::Product;

/// 产品数据库行
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::restore(row.id, row.name, row.price, row.quantity)
    }
}
