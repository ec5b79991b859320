// ==========================================
// 备件库存管理系统 - 库存导入 Trait
// ==========================================
// 职责: 定义导入接口（不包含实现）
// ==========================================

use crate::domain::item::ImportLedger;
use crate::importer::error::ImportError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// StockImporter Trait
// ==========================================
// 用途: 批量导入主接口
// 实现者: StockImporterImpl
#[async_trait]
pub trait StockImporter: Send + Sync {
    /// 从表格文件导入库存数据
    ///
    /// # 参数
    /// - file_path: 文件路径（.xlsx/.xls/.csv）
    ///
    /// # 返回
    /// - Ok(ImportLedger): 运行台账（成功/失败/跳过计数 + 失败明细）
    /// - Err: 仅当无法获得行序列（文件不存在、格式错误）时返回；
    ///        任何单行失败都不会中止运行，只会记入台账
    ///
    /// # 导入流程
    /// 1. 文件读取与解析（失败即中止，运行不开始）
    /// 2. 逐行: 字段映射 → 行规整 → 落库（严格串行，一行写完再写下一行）
    /// 3. 每行处理后重算并发布进度
    /// 4. 汇总台账返回
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> Result<ImportLedger, ImportError>;

    /// 从已解析的有序行序列导入（解析与编排解耦，测试直接走此入口）
    async fn import_rows(
        &self,
        rows: Vec<HashMap<String, String>>,
    ) -> Result<ImportLedger, ImportError>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（表格协作方契约）
// 实现者: ExcelParser, CsvParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// 解析文件为有序原始行记录（HashMap<列名, 值>）
    ///
    /// 约定: 只取首个工作表；首行为表头；整行物理空白的行被丢弃
    fn parse_to_raw_rows(
        &self,
        file_path: &Path,
    ) -> Result<Vec<HashMap<String, String>>, ImportError>;
}
