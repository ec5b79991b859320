// ==========================================
// 备件库存管理系统 - 导入层
// ==========================================
// 职责: 表格文件批量导入（解析 → 规整 → 逐行落库 → 台账）
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod code_allocator;
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod row_normalizer;
pub mod stock_importer_impl;
pub mod stock_importer_trait;

// 重导出核心类型
pub use code_allocator::CodeAllocator;
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use row_normalizer::{RowNormalizer, RowOutcome};
pub use stock_importer_impl::StockImporterImpl;

// 重导出 Trait 接口
pub use stock_importer_trait::{FileParser as FileParserTrait, StockImporter};

// ===== 导入约定 =====

/// 展示行号偏移：数据首行在表格中是第 2 行（第 1 行为表头）
pub const HEADER_ROW_OFFSET: usize = 2;

/// 跨运行撞号（存储层唯一约束拦截）时改写的用户提示
pub const MSG_PART_NO_EXISTS: &str = "GAGAL: Part Number ini sudah ada di database.";
