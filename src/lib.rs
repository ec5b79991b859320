// ==========================================
// 备件库存管理系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 小微门店备件台账（批量导入 + 库存维护）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 定价规则与库存视图
pub mod engine;

// 导入层 - 表格批量导入
pub mod importer;

// 配置层 - 运行参数
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA/建表统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Kategori, TabFilter};

// 领域实体
pub use domain::{
    ImportLedger, ImportProgress, ImportRowError, InventoryStats, NewStockItem, StockItem,
    StockItemDraft, StockItemPatch,
};

// 引擎
pub use engine::{sell_price, InventoryView, ViewConfig};

// 导入
pub use importer::{CodeAllocator, ImportError, StockImporter, StockImporterImpl};

// 仓储
pub use repository::{SqliteStockRepository, StockRepository};

// API
pub use api::{ApiError, InventoryApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "备件库存管理系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
