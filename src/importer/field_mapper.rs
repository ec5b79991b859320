// ==========================================
// 备件库存管理系统 - 字段映射器实现
// ==========================================
// 职责: 源字段 → 标准字段映射（HashMap 行 → RawStockRow）
// 说明: 数值字段保留原始文本，交由数据清洗器宽松解析，
//       因此映射本身永不失败
// ==========================================

use crate::domain::item::RawStockRow;
use std::collections::HashMap;

pub struct FieldMapper;

impl FieldMapper {
    pub fn map_to_raw_row(&self, row: HashMap<String, String>, row_number: usize) -> RawStockRow {
        RawStockRow {
            part_no: self.get_string(&row, "part_no"),
            merk: self.get_string(&row, "merk"),
            kategori: self.get_string(&row, "kategori"),
            deskripsi: self.get_string(&row, "deskripsi"),
            posisi: self.get_string(&row, "posisi"),
            stok_barang: self.get_string(&row, "stok_barang"),
            harga_modal: self.get_string(&row, "harga_modal"),
            margin: self.get_string(&row, "margin"),
            row_number,
        }
    }

    /// 提取字符串字段（返回 Option），支持多个可能的列名（别名）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        // 定义列名别名映射（模板列名 + 常见表头写法）
        let aliases: Vec<&str> = match key {
            "part_no" => vec!["part_no", "Part No", "Part Number"],
            "merk" => vec!["merk", "Merk", "Brand"],
            "kategori" => vec!["kategori", "Kategori"],
            "deskripsi" => vec!["deskripsi", "Deskripsi", "Nama Barang"],
            "posisi" => vec!["posisi", "Posisi", "Rak"],
            "stok_barang" => vec!["stok_barang", "Stok", "Stok Barang"],
            "harga_modal" => vec!["harga_modal", "Modal", "Harga Modal"],
            "margin" => vec!["margin", "Margin"],
            _ => vec![key],
        };

        // 尝试所有可能的列名
        for alias in aliases {
            if let Some(v) = row.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_map_template_headers() {
        let mapper = FieldMapper;
        let raw = mapper.map_to_raw_row(
            row_of(&[
                ("part_no", "5TL-H2021"),
                ("merk", "Yamaha"),
                ("deskripsi", "Kampas rem depan"),
                ("stok_barang", "12"),
                ("harga_modal", "45000"),
                ("margin", "20"),
            ]),
            2,
        );

        assert_eq!(raw.part_no.as_deref(), Some("5TL-H2021"));
        assert_eq!(raw.merk.as_deref(), Some("Yamaha"));
        assert_eq!(raw.deskripsi.as_deref(), Some("Kampas rem depan"));
        assert_eq!(raw.harga_modal.as_deref(), Some("45000"));
        assert_eq!(raw.row_number, 2);
    }

    #[test]
    fn test_map_alias_headers() {
        let mapper = FieldMapper;
        let raw = mapper.map_to_raw_row(
            row_of(&[
                ("Part No", "ND-550"),
                ("Brand", "Aspira"),
                ("Nama Barang", "Ban dalam"),
                ("Rak", "B-02"),
            ]),
            3,
        );

        assert_eq!(raw.part_no.as_deref(), Some("ND-550"));
        assert_eq!(raw.merk.as_deref(), Some("Aspira"));
        assert_eq!(raw.deskripsi.as_deref(), Some("Ban dalam"));
        assert_eq!(raw.posisi.as_deref(), Some("B-02"));
    }

    #[test]
    fn test_blank_cells_become_none() {
        let mapper = FieldMapper;
        let raw = mapper.map_to_raw_row(row_of(&[("part_no", "  "), ("merk", "")]), 4);
        assert!(raw.part_no.is_none());
        assert!(raw.merk.is_none());
        assert!(raw.deskripsi.is_none());
    }
}
