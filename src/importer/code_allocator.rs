// ==========================================
// 备件库存管理系统 - 备用件号分配器
// ==========================================
// 职责: 件号缺失时生成 "<前缀>_<6位数字>" 备用件号，
//       并登记本次运行已占用的全部件号（含显式件号）
// 红线: 唯一性范围仅限单次导入运行，分配器随运行新建、
//       随运行丢弃，不查询存储层；跨运行撞号由存储层唯一
//       约束在写入时拦截
// ==========================================

use rand::Rng;
use std::collections::HashSet;

// ==========================================
// CodeAllocator - 备用件号分配器 + 占用登记表
// ==========================================
pub struct CodeAllocator {
    prefix: String,
    consumed: HashSet<String>,
}

impl CodeAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            consumed: HashSet::new(),
        }
    }

    /// 生成一个本次运行内未被占用的备用件号并登记
    ///
    /// 数字段在 100000..=999999 上均匀抽取；
    /// 撞上已占用件号时重新生成，直到取到未占用值。
    pub fn allocate(&mut self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let code = format!("{}_{}", self.prefix, rng.gen_range(100_000..=999_999));
            if self.consumed.insert(code.clone()) {
                return code;
            }
        }
    }

    /// 登记显式件号
    ///
    /// # 返回
    /// - true: 登记成功（本次运行首次出现）
    /// - false: 件号已被占用（重复行）
    pub fn claim(&mut self, code: &str) -> bool {
        self.consumed.insert(code.to_string())
    }

    /// 件号是否已被本次运行占用
    pub fn is_consumed(&self, code: &str) -> bool {
        self.consumed.contains(code)
    }

    /// 已占用件号数量
    pub fn consumed_count(&self) -> usize {
        self.consumed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_code_shape(code: &str, prefix: &str) {
        let digits = code
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or_else(|| panic!("前缀不符: {}", code));
        assert_eq!(digits.len(), 6, "数字段应为6位: {}", code);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_allocate_shape() {
        let mut allocator = CodeAllocator::new("VR_AUTO");
        for _ in 0..100 {
            let code = allocator.allocate();
            assert_code_shape(&code, "VR_AUTO");
        }
    }

    #[test]
    fn test_allocate_10k_no_duplicates() {
        let mut allocator = CodeAllocator::new("VR_AUTO");
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let code = allocator.allocate();
            assert!(seen.insert(code.clone()), "件号重复: {}", code);
        }
        assert_eq!(allocator.consumed_count(), 10_000);
    }

    #[test]
    fn test_claim_duplicate_rejected() {
        let mut allocator = CodeAllocator::new("VR_AUTO");
        assert!(allocator.claim("5TL-H2021"));
        assert!(!allocator.claim("5TL-H2021"));
        assert!(allocator.is_consumed("5TL-H2021"));
    }

    #[test]
    fn test_allocate_avoids_claimed_codes() {
        let mut allocator = CodeAllocator::new("VR_AUTO");
        // 预先占用一批生成域内的件号，再分配不应重复
        for n in 100_000..100_050 {
            assert!(allocator.claim(&format!("VR_AUTO_{}", n)));
        }
        for _ in 0..1_000 {
            let code = allocator.allocate();
            assert_code_shape(&code, "VR_AUTO");
        }
        // HashSet 语义下 allocate 登记成功即意味着与已占用集合无交集
        assert_eq!(allocator.consumed_count(), 1_050);
    }
}
