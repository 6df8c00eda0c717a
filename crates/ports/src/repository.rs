//! Repository trait 定义

use async_trait::async_trait;
use catalog_errors::AppResult;

/// 基础 Repository trait
///
/// 标识由存储层生成：`save` 接收未分配 ID 的实体，返回带有 ID 的持久化结果
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// 根据 ID 查找
    async fn find_by_id(&self, id: &ID) -> AppResult<Option<T>>;

    /// 保存实体，返回分配了 ID 的实体
    async fn save(&self, entity: T) -> AppResult<T>;
}
