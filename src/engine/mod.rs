// ==========================================
// 备件库存管理系统 - 引擎层
// ==========================================
// 职责: 业务规则（定价）与库存视图派生
// ==========================================

pub mod inventory;
pub mod pricing;

pub use inventory::{InventoryView, ViewConfig};
pub use pricing::sell_price;
