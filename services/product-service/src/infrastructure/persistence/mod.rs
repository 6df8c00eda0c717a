//! 持久化实现

mod postgres;
mod rows;

pub use postgres::*;

/// products 表结构
pub const PRODUCTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id       BIGSERIAL PRIMARY KEY,
    name     TEXT,
    price    DOUBLE PRECISION,
    quantity INTEGER
)
"#;
