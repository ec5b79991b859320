// ==========================================
// 备件库存管理系统 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / 宽松数值清洗
// 红线: 数值清洗永不报错，解析失败一律归 0
// ==========================================

pub struct DataCleaner;

impl DataCleaner {
    /// 清洗文本字段（TRIM）
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// 标准化 NULL 值（空字符串/空白 → None）
    pub fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 宽松数值清洗
    ///
    /// 规则：仅保留数字、小数点与负号，其余字符全部剔除，
    /// 然后按十进制解析；得不到合法数值时归 0（不报错）。
    ///
    /// 例: "Rp 12.500" → "12.500" → 12.5（保留小数点，按十进制解析）
    pub fn clean_number(&self, value: &str) -> f64 {
        let stripped: String = value
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        stripped.parse::<f64>().unwrap_or(0.0)
    }

    /// Option 版数值清洗（缺失同样归 0）
    pub fn clean_number_opt(&self, value: Option<&str>) -> f64 {
        value.map(|v| self.clean_number(v)).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_basic() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_text("  5TL-H2021  "), "5TL-H2021");
    }

    #[test]
    fn test_normalize_null() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_null(Some("  ".to_string())), None);
        assert_eq!(cleaner.normalize_null(Some("".to_string())), None);
        assert_eq!(
            cleaner.normalize_null(Some("  value  ".to_string())),
            Some("value".to_string())
        );
        assert_eq!(cleaner.normalize_null(None), None);
    }

    #[test]
    fn test_clean_number_plain() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_number("12500"), 12_500.0);
        assert_eq!(cleaner.clean_number("12.75"), 12.75);
        assert_eq!(cleaner.clean_number("-5"), -5.0);
    }

    #[test]
    fn test_clean_number_strips_currency() {
        let cleaner = DataCleaner;
        // 仅保留数字/小数点/负号后按十进制解析
        assert_eq!(cleaner.clean_number("Rp 12.500"), 12.5);
        assert_eq!(cleaner.clean_number("Rp12500"), 12_500.0);
        assert_eq!(cleaner.clean_number("20 %"), 20.0);
    }

    #[test]
    fn test_clean_number_invalid_is_zero() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_number("tidak ada"), 0.0);
        assert_eq!(cleaner.clean_number(""), 0.0);
        // 剥离后仍非法（两个小数点）同样归 0
        assert_eq!(cleaner.clean_number("12.500.75"), 0.0);
    }

    #[test]
    fn test_clean_number_opt_missing_is_zero() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_number_opt(None), 0.0);
        assert_eq!(cleaner.clean_number_opt(Some("15")), 15.0);
    }
}
