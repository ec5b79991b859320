// ==========================================
// 备件库存管理系统 - 库存导入器实现
// ==========================================
// 职责: 整合导入流程，从文件到存储
// 流程: 解析 → 映射 → 规整 → 逐行落库 → 台账汇总
// 红线: 逐行严格串行，每行写入完成（无论成败）后才开始下一行，
//       以保证逐行计账、稳定进度与运行内查重不出现并发竞态；
//       单行失败永不中止运行
// ==========================================

use crate::config::InventoryConfigReader;
use crate::domain::item::{ImportLedger, ImportProgress};
use crate::importer::code_allocator::CodeAllocator;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::row_normalizer::{RowNormalizer, RowOutcome};
use crate::importer::stock_importer_trait::{FileParser, StockImporter};
use crate::importer::{HEADER_ROW_OFFSET, MSG_PART_NO_EXISTS};
use crate::repository::StockRepository;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// StockImporterImpl - 库存导入器实现
// ==========================================
pub struct StockImporterImpl<R, C>
where
    R: StockRepository,
    C: InventoryConfigReader,
{
    // 数据访问层
    repo: R,

    // 配置读取器
    config: C,

    // 导入组件
    file_parser: Box<dyn FileParser>,
    field_mapper: FieldMapper,

    // 行级进度发布（可选）
    progress_tx: Option<watch::Sender<ImportProgress>>,
}

impl<R, C> StockImporterImpl<R, C>
where
    R: StockRepository,
    C: InventoryConfigReader,
{
    /// 创建新的 StockImporter 实例（默认按扩展名自动选择解析器）
    pub fn new(repo: R, config: C) -> Self {
        Self {
            repo,
            config,
            file_parser: Box::new(UniversalFileParser),
            field_mapper: FieldMapper,
            progress_tx: None,
        }
    }

    /// 替换文件解析器（测试注入用）
    pub fn with_file_parser(mut self, parser: Box<dyn FileParser>) -> Self {
        self.file_parser = parser;
        self
    }

    /// 挂接进度通道：每处理完一行（无论结果）发布一次
    pub fn with_progress(mut self, tx: watch::Sender<ImportProgress>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    fn publish_progress(&self, processed: usize, total: usize) {
        let progress = ImportProgress::new(processed, total);
        if let Some(tx) = &self.progress_tx {
            // 接收端全部关闭不算错误，导入照常进行
            let _ = tx.send(progress);
        }
        debug!(
            processed = progress.processed,
            total = progress.total,
            "进度更新"
        );
    }
}

#[async_trait::async_trait]
impl<R, C> StockImporter for StockImporterImpl<R, C>
where
    R: StockRepository + Send + Sync,
    C: InventoryConfigReader + Send + Sync,
{
    #[instrument(skip(self, file_path))]
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportLedger> {
        let file_path_str = file_path.as_ref().display().to_string();
        info!(file = %file_path_str, "开始导入库存数据");

        // === 步骤 1: 解析文件（失败即中止，运行不开始）===
        let rows = self
            .file_parser
            .parse_to_raw_rows(file_path.as_ref())
            .map_err(|e| {
                error!(file = %file_path_str, error = %e, "文件解析失败");
                e
            })?;

        info!(total_rows = rows.len(), "文件解析完成");

        // === 步骤 2: 逐行导入 ===
        self.import_rows(rows).await
    }

    async fn import_rows(
        &self,
        rows: Vec<HashMap<String, String>>,
    ) -> ImportResult<ImportLedger> {
        let start_time = Instant::now();
        let total = rows.len();
        let mut ledger = ImportLedger::new(total);

        // 运行态全部新建：件号登记表与行规整器的生命周期只有这一次运行
        let prefix = self
            .config
            .get_auto_code_prefix()
            .await
            .map_err(|e| ImportError::ConfigError(e.to_string()))?;
        let default_brand = self
            .config
            .get_default_brand()
            .await
            .map_err(|e| ImportError::ConfigError(e.to_string()))?;
        let default_position = self
            .config
            .get_default_position()
            .await
            .map_err(|e| ImportError::ConfigError(e.to_string()))?;

        let mut allocator = CodeAllocator::new(prefix);
        let normalizer = RowNormalizer::new(default_brand, default_position);

        // 逐行严格串行：一行的写入 await 完成后才进入下一行
        for (idx, row) in rows.into_iter().enumerate() {
            let row_number = idx + HEADER_ROW_OFFSET;
            let raw = self.field_mapper.map_to_raw_row(row, row_number);

            match normalizer.normalize(&raw, &mut allocator) {
                RowOutcome::Skip => {
                    ledger.skipped += 1;
                    debug!(row = row_number, "空白填充行，跳过");
                }
                RowOutcome::Reject(err) => {
                    warn!(row = row_number, reason = %err, "行校验失败");
                    ledger.record_failure(row_number, err.to_string());
                }
                RowOutcome::Accept(item) => match self.repo.create(item).await {
                    Ok(created) => {
                        ledger.success += 1;
                        debug!(row = row_number, part_no = %created.part_no, "行导入成功");
                    }
                    Err(err) if err.is_conflict() => {
                        // 跨运行撞号：改写为面向用户的提示
                        warn!(row = row_number, error = %err, "件号已存在于数据库");
                        ledger.record_failure(row_number, MSG_PART_NO_EXISTS);
                    }
                    Err(err) => {
                        error!(row = row_number, error = %err, "行写入失败");
                        ledger.record_failure(row_number, err.to_string());
                    }
                },
            }

            // 每行处理后重算并发布进度（无论结果）
            self.publish_progress(idx + 1, total);
        }

        ledger.elapsed = start_time.elapsed();

        debug!(
            ledger_json = %serde_json::to_string(&ledger).unwrap_or_default(),
            "台账明细"
        );
        info!(
            total = ledger.total_rows,
            success = ledger.success,
            failed = ledger.failed,
            skipped = ledger.skipped,
            elapsed_ms = ledger.elapsed.as_millis() as u64,
            "库存数据导入完成"
        );

        Ok(ledger)
    }
}
