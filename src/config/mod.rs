// ==========================================
// 备件库存管理系统 - 配置层
// ==========================================
// 职责: 运行参数的默认值与读取接口
// 存储: config_kv 表（按部署覆写，默认值内置）
// ==========================================

pub mod config_manager;
pub mod inventory_config_trait;

pub use config_manager::ConfigManager;
pub use inventory_config_trait::InventoryConfigReader;

// ===== 默认运行参数 =====

/// 低库存阈值（数量 < 阈值 记为 Stok Kritis）
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// 列表每页条数
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// 工作集加载上限
pub const DEFAULT_LIST_LIMIT: usize = 5000;

/// 备用件号前缀
pub const DEFAULT_AUTO_CODE_PREFIX: &str = "VR_AUTO";

/// 品牌缺省哨兵值
pub const DEFAULT_BRAND: &str = "VR_AUTO";

/// 货架位置缺省值
pub const DEFAULT_POSITION: &str = "-";
