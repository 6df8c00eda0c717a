//! 产品实体

/// 产品 ID，由存储层生成
pub type ProductId = i64;

/// 产品实体
///
/// `id` 在首次保存前为 `None`，保存后由存储层分配且不再改变。
/// 名称、价格、数量均允许为空，不做校验。
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: Option<ProductId>,
    name: Option<String>,
    price: Option<f64>,
    quantity: Option<i32>,
}

impl Product {
    /// 创建尚未持久化的产品
    pub fn new(name: Option<String>, price: Option<f64>, quantity: Option<i32>) -> Self {
        Self {
            id: None,
            name,
            price,
            quantity,
        }
    }

    /// 从存储层重建已持久化的产品
    pub fn restore(
        id: ProductId,
        name: Option<String>,
        price: Option<f64>,
        quantity: Option<i32>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            price,
            quantity,
        }
    }

    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn quantity(&self) -> Option<i32> {
        self.quantity
    }
}
