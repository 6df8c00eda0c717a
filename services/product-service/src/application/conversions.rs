//! DTO 与实体之间的转换

use crate::domain::Product;

use super::ProductDto;

/// 由请求 DTO 构建待保存的产品，忽略请求中的 `id`
pub fn new_product_from_dto(dto: ProductDto) -> Product {
    Product::new(dto.name, dto.price, dto.quantity)
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().map(str::to_string),
            price: product.price(),
            quantity: product.quantity(),
        }
    }
}
