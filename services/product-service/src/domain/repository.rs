//! 产品仓储接口

use catalog_ports::Repository;

use super::{Product, ProductId};

/// 产品仓储
///
/// 任何 `Repository<Product, ProductId>` 实现都自动满足该 trait
pub trait ProductRepository: Repository<Product, ProductId> {}

impl<T> ProductRepository for T where T: Repository<Product, ProductId> {}
