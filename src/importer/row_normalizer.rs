// ==========================================
// 备件库存管理系统 - 行规整器实现
// ==========================================
// 职责: 单行原始数据 → 可落库记录 / 结构化拒绝 / 跳过信号
// 处理顺序（不可调换）:
//   1. 空白填充行跳过（part_no/merk/deskripsi 全缺）
//   2. 品牌缺省哨兵值
//   3. deskripsi 必填校验
//   4. 件号解析（空或 "-" → 备用件号；显式件号永不改写）
//   5. 运行内重复件号校验
//   6. 数值宽松清洗（失败归 0；成本与库存负值钳到 0）
//   7. 售价派生（定价规则）
//   8. 分类/货位缺省值
// ==========================================

use crate::domain::item::{NewStockItem, RawStockRow};
use crate::domain::types::Kategori;
use crate::engine::pricing::sell_price;
use crate::importer::code_allocator::CodeAllocator;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::ImportError;

// ==========================================
// RowOutcome - 单行处理结果
// ==========================================
#[derive(Debug)]
pub enum RowOutcome {
    /// 空白填充行：不计成功也不计失败
    Skip,
    /// 行被拒绝：记入台账，运行继续
    Reject(ImportError),
    /// 规整完成，待落库
    Accept(NewStockItem),
}

// ==========================================
// RowNormalizer - 行规整器
// ==========================================
pub struct RowNormalizer {
    cleaner: DataCleaner,
    default_brand: String,
    default_position: String,
}

impl RowNormalizer {
    pub fn new(default_brand: impl Into<String>, default_position: impl Into<String>) -> Self {
        Self {
            cleaner: DataCleaner,
            default_brand: default_brand.into(),
            default_position: default_position.into(),
        }
    }

    /// 规整一行
    ///
    /// # 参数
    /// - raw: 字段映射后的原始行（含展示行号）
    /// - allocator: 本次运行的件号登记表（重复校验与备用件号共用）
    pub fn normalize(&self, raw: &RawStockRow, allocator: &mut CodeAllocator) -> RowOutcome {
        // 1. 空白填充行：三个标识字段全缺即跳过
        if raw.part_no.is_none() && raw.merk.is_none() && raw.deskripsi.is_none() {
            return RowOutcome::Skip;
        }

        // 2. 品牌：缺失回落到哨兵值
        let merk = match &raw.merk {
            Some(m) => self.cleaner.clean_text(m),
            None => self.default_brand.clone(),
        };

        // 3. deskripsi 必填
        let deskripsi = match self.cleaner.normalize_null(raw.deskripsi.clone()) {
            Some(d) => d,
            None => {
                return RowOutcome::Reject(ImportError::Validation {
                    row: raw.row_number,
                    message: "Nama Barang (Deskripsi) kosong".to_string(),
                })
            }
        };

        // 4. 件号：空或占位符 "-" → 备用件号（显式件号永不自动生成）
        let trimmed = raw.part_no.as_deref().map(str::trim).unwrap_or("");
        let (part_no, generated) = if trimmed.is_empty() || trimmed == "-" {
            (allocator.allocate(), true)
        } else {
            (trimmed.to_string(), false)
        };

        // 5. 运行内重复校验（备用件号在生成时已登记且必然唯一）
        if !generated && !allocator.claim(&part_no) {
            return RowOutcome::Reject(ImportError::DuplicateInFile {
                row: raw.row_number,
                part_no,
            });
        }

        // 6. 数值清洗：失败归 0；成本与库存按数据模型钳为非负，
        //    毛利率保持宽松（允许负值折价）
        let harga_modal = self
            .cleaner
            .clean_number_opt(raw.harga_modal.as_deref())
            .max(0.0);
        let margin = self.cleaner.clean_number_opt(raw.margin.as_deref());
        let stok_barang = self
            .cleaner
            .clean_number_opt(raw.stok_barang.as_deref())
            .trunc()
            .max(0.0) as u32;

        // 7. 售价派生
        let harga_jual = sell_price(harga_modal, margin);

        // 8. 分类与货位缺省值
        let kategori = raw
            .kategori
            .as_deref()
            .map(Kategori::parse_lenient)
            .unwrap_or(Kategori::Lainnya);
        let posisi = match self.cleaner.normalize_null(raw.posisi.clone()) {
            Some(p) => p,
            None => self.default_position.clone(),
        };

        RowOutcome::Accept(NewStockItem {
            part_no,
            merk,
            kategori,
            deskripsi,
            posisi,
            stok_barang,
            harga_modal,
            margin,
            harga_jual,
        })
    }
}
