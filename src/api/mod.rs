// ==========================================
// 备件库存管理系统 - API 层
// ==========================================
// 职责: 面向调用方的业务接口与用户可读错误
// ==========================================

pub mod error;
pub mod inventory_api;

pub use error::{ApiError, ApiResult};
pub use inventory_api::InventoryApi;
