// ==========================================
// 备件库存管理系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 备件分类 (Kategori)
// ==========================================
// 固定小集合，未知/缺失输入一律回落到 Lainnya
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kategori {
    Oli,     // 油品/润滑
    Ban,     // 轮胎/轮毂
    Kampas,  // 刹车片
    Mesin,   // 发动机件
    #[serde(rename = "CVT")]
    Cvt,     // CVT 传动件
    Body,    // 车身件
    Lainnya, // 其他
}

impl Kategori {
    /// 全部分类（分类页签渲染顺序）
    pub const ALL: [Kategori; 7] = [
        Kategori::Oli,
        Kategori::Ban,
        Kategori::Kampas,
        Kategori::Mesin,
        Kategori::Cvt,
        Kategori::Body,
        Kategori::Lainnya,
    ];

    /// 宽松解析：大小写不敏感，未识别值回落到 Lainnya
    pub fn parse_lenient(value: &str) -> Kategori {
        match value.trim().to_lowercase().as_str() {
            "oli" => Kategori::Oli,
            "ban" => Kategori::Ban,
            "kampas" => Kategori::Kampas,
            "mesin" => Kategori::Mesin,
            "cvt" => Kategori::Cvt,
            "body" => Kategori::Body,
            _ => Kategori::Lainnya,
        }
    }

    /// 数据库/界面使用的规范名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Kategori::Oli => "Oli",
            Kategori::Ban => "Ban",
            Kategori::Kampas => "Kampas",
            Kategori::Mesin => "Mesin",
            Kategori::Cvt => "CVT",
            Kategori::Body => "Body",
            Kategori::Lainnya => "Lainnya",
        }
    }
}

impl fmt::Display for Kategori {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 列表页签过滤器 (Tab Filter)
// ==========================================
// Semua = 全部；StokKritis = 低库存伪分类（数量 < 阈值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabFilter {
    Semua,
    StokKritis,
    Kategori(Kategori),
}

impl fmt::Display for TabFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabFilter::Semua => write!(f, "Semua"),
            TabFilter::StokKritis => write!(f, "Stok Kritis"),
            TabFilter::Kategori(k) => write!(f, "{}", k),
        }
    }
}
