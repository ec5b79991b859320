// ==========================================
// 备件库存管理系统 - 库存配置读取 Trait
// ==========================================
// 职责: 定义库存/导入模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use async_trait::async_trait;
use std::error::Error;

// ==========================================
// InventoryConfigReader Trait
// ==========================================
// 用途: 运行参数读取接口
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait InventoryConfigReader: Send + Sync {
    /// 低库存阈值（数量 < 阈值 记为 Stok Kritis）
    ///
    /// # 默认值
    /// - 5
    async fn get_low_stock_threshold(&self) -> Result<u32, Box<dyn Error>>;

    /// 列表每页条数
    ///
    /// # 默认值
    /// - 15
    async fn get_page_size(&self) -> Result<usize, Box<dyn Error>>;

    /// 工作集加载上限（启动时一次性加载的最大条数）
    ///
    /// # 默认值
    /// - 5000
    async fn get_list_limit(&self) -> Result<usize, Box<dyn Error>>;

    /// 备用件号前缀（件号缺失时自动生成 "<前缀>_<6位数字>"）
    ///
    /// # 默认值
    /// - "VR_AUTO"
    async fn get_auto_code_prefix(&self) -> Result<String, Box<dyn Error>>;

    /// 品牌缺省哨兵值（导入行缺少品牌时写入）
    ///
    /// # 默认值
    /// - "VR_AUTO"
    async fn get_default_brand(&self) -> Result<String, Box<dyn Error>>;

    /// 货架位置缺省值
    ///
    /// # 默认值
    /// - "-"
    async fn get_default_position(&self) -> Result<String, Box<dyn Error>>;
}
