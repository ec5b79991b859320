// ==========================================
// 备件库存管理系统 - 库存 Repository Trait
// ==========================================
// 职责: 定义存储协作方契约（不包含实现）
// 红线: Repository 不含业务规则，只做数据 CRUD
// ==========================================

use crate::domain::item::{NewStockItem, StockItem, StockItemPatch};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// StockRepository Trait
// ==========================================
// 用途: 库存数据访问主接口
// 实现者: SqliteStockRepository
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// 创建库存记录
    ///
    /// id 与 created_at/updated_at 由存储层生成。
    ///
    /// # 返回
    /// - Ok(StockItem): 含生成字段的完整记录
    /// - Err(Conflict): part_no 与已有记录冲突
    /// - Err(WriteError): 其他写入失败
    async fn create(&self, item: NewStockItem) -> RepositoryResult<StockItem>;

    /// 局部更新库存记录（仅写入 patch 中为 Some 的字段）
    ///
    /// # 返回
    /// - Ok(StockItem): 更新后的完整记录
    /// - Err(NotFound): id 不存在
    /// - Err(Conflict): 改写 part_no 撞上已有记录
    async fn update(&self, id: &str, patch: StockItemPatch) -> RepositoryResult<StockItem>;

    /// 删除库存记录
    ///
    /// # 返回
    /// - Err(NotFound): id 不存在
    async fn delete(&self, id: &str) -> RepositoryResult<()>;

    /// 按 id 读取单条记录
    async fn get(&self, id: &str) -> RepositoryResult<StockItem>;

    /// 读取工作集：按创建时间倒序，最多 limit 条
    ///
    /// 启动时一次性加载（上限由调用方给出，默认 5000）。
    async fn list(&self, limit: usize) -> RepositoryResult<Vec<StockItem>>;
}
