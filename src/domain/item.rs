// ==========================================
// 备件库存管理系统 - 库存领域模型
// ==========================================
// 对齐: db.rs barang 表
// ==========================================

use crate::domain::types::Kategori;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// ==========================================
// StockItem - 库存主数据
// ==========================================
// 用途: 存储层读写的持久化实体
// 红线: harga_jual 为派生列（modal + modal * margin / 100），
//       任何写入路径都必须先重算，不接受外部传入的售价
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    // ===== 主键 =====
    pub id: String, // 存储层生成（UUID v4），创建后不可变

    // ===== 标识信息 =====
    pub part_no: String,   // 件号，全库唯一
    pub merk: String,      // 品牌，缺省哨兵值 "VR_AUTO"
    pub kategori: Kategori, // 分类，未知值回落 Lainnya
    pub deskripsi: String, // 品名/描述，必填非空
    pub posisi: String,    // 货架位置，缺省 "-"

    // ===== 库存与价格 =====
    pub stok_barang: u32, // 库存数量（非负）
    pub harga_modal: f64, // 成本价（非负）
    pub margin: f64,      // 毛利率（百分比，允许为负 = 折价）
    pub harga_jual: f64,  // 售价（派生列，冗余存储）

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间（存储层赋值）
    pub updated_at: DateTime<Utc>, // 记录更新时间（存储层赋值）
}

// ==========================================
// NewStockItem - 创建载荷
// ==========================================
// 用途: 导入管道与手工录入的写入载荷（id/时间戳由存储层生成）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStockItem {
    pub part_no: String,
    pub merk: String,
    pub kategori: Kategori,
    pub deskripsi: String,
    pub posisi: String,
    pub stok_barang: u32,
    pub harga_modal: f64,
    pub margin: f64,
    pub harga_jual: f64,
}

// ==========================================
// StockItemDraft - 表单草稿
// ==========================================
// 用途: 手工录入/行内编辑的可编辑字段集
// 注意: 故意不含 harga_jual，售价只能由定价规则重算得出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItemDraft {
    pub part_no: String,
    pub merk: String,
    pub kategori: Kategori,
    pub deskripsi: String,
    pub posisi: String,
    pub stok_barang: u32,
    pub harga_modal: f64,
    pub margin: f64,
}

// ==========================================
// StockItemPatch - 局部更新载荷
// ==========================================
// 用途: 存储层 update 契约（仅写入 Some 字段）
// harga_jual 只由 API 层在重算后填入
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockItemPatch {
    pub part_no: Option<String>,
    pub merk: Option<String>,
    pub kategori: Option<Kategori>,
    pub deskripsi: Option<String>,
    pub posisi: Option<String>,
    pub stok_barang: Option<u32>,
    pub harga_modal: Option<f64>,
    pub margin: Option<f64>,
    pub harga_jual: Option<f64>,
}

impl StockItemPatch {
    /// 是否没有任何待写字段
    pub fn is_empty(&self) -> bool {
        self.part_no.is_none()
            && self.merk.is_none()
            && self.kategori.is_none()
            && self.deskripsi.is_none()
            && self.posisi.is_none()
            && self.stok_barang.is_none()
            && self.harga_modal.is_none()
            && self.margin.is_none()
            && self.harga_jual.is_none()
    }
}

// ==========================================
// RawStockRow - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物（文件解析 → 字段映射 → 此结构）
// 生命周期: 仅在导入流程内
// 数值字段保留原始文本，由数据清洗器宽松解析（失败归 0，不报错）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStockRow {
    pub part_no: Option<String>,
    pub merk: Option<String>,
    pub kategori: Option<String>,
    pub deskripsi: Option<String>,
    pub posisi: Option<String>,
    pub stok_barang: Option<String>,
    pub harga_modal: Option<String>,
    pub margin: Option<String>,

    // 元信息
    pub row_number: usize, // 展示行号（数据行序号 + 表头偏移，用于错误报告）
}

// ==========================================
// ImportRowError - 单行失败记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRowError {
    pub row: usize,      // 展示行号（1 基，含表头偏移）
    pub message: String, // 面向用户的失败原因
}

impl fmt::Display for ImportRowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Baris {}: {}", self.row, self.message)
    }
}

// ==========================================
// ImportLedger - 导入结果台账
// ==========================================
// 用途: 一次导入运行的最终汇总（成功/失败/跳过 + 失败明细）
// 生命周期: 每次运行新建，运行之间不保留任何状态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportLedger {
    pub total_rows: usize,           // 解析出的数据行总数
    pub success: usize,              // 落库成功行数
    pub failed: usize,               // 失败行数（校验失败 + 写入失败）
    pub skipped: usize,              // 空白填充行（不计成功也不计失败）
    pub errors: Vec<ImportRowError>, // 失败明细，按行号出现顺序
    pub elapsed: Duration,           // 运行耗时
}

impl ImportLedger {
    pub fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            success: 0,
            failed: 0,
            skipped: 0,
            errors: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// 记录一行失败（计数 + 明细，保持行号顺序）
    pub fn record_failure(&mut self, row: usize, message: impl Into<String>) {
        self.failed += 1;
        self.errors.push(ImportRowError {
            row,
            message: message.into(),
        });
    }
}

// ==========================================
// ImportProgress - 行级进度
// ==========================================
// 每处理完一行（无论结果）重算并发布一次
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportProgress {
    pub processed: usize,
    pub total: usize,
}

impl ImportProgress {
    pub fn new(processed: usize, total: usize) -> Self {
        Self { processed, total }
    }

    /// 进度分数 processed / total（total 为 0 时返回 1.0）
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f32 / self.total as f32
        }
    }
}

// ==========================================
// InventoryStats - 仪表盘统计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_items: usize, // 在册条目数
    pub total_asset: f64,   // 库存资产 Σ(harga_modal × stok_barang)
    pub low_stock: usize,   // 低库存条目数（数量 < 阈值）
}
