// ==========================================
// 备件库存管理系统 - 库存视图模型
// ==========================================
// 职责: 工作集内存缓存 + 页签过滤 + 全文搜索 + 定长分页 + 统计
// 红线: 缓存只反映已确认的存储结果，
//       apply_* 仅在存储层返回成功后由发起方调用
// ==========================================

use crate::domain::item::{InventoryStats, StockItem};
use crate::domain::types::TabFilter;

// ==========================================
// ViewConfig - 视图参数
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    pub page_size: usize,         // 每页条数
    pub low_stock_threshold: u32, // 低库存阈值（数量 < 阈值 记为 Stok Kritis）
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: crate::config::DEFAULT_PAGE_SIZE,
            low_stock_threshold: crate::config::DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

// ==========================================
// InventoryView - 库存视图
// ==========================================
// 工作集按创建时间倒序持有；过滤结果保持原序；
// 任何过滤条件变化都会重派生并回到第一页。
pub struct InventoryView {
    items: Vec<StockItem>, // 工作集（最新在前）
    filtered: Vec<usize>,  // 当前过滤结果（指向 items 的下标，保序）
    tab: TabFilter,
    search: String,
    page: usize,
    config: ViewConfig,
}

impl InventoryView {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            tab: TabFilter::Semua,
            search: String::new(),
            page: 0,
            config,
        }
    }

    /// 装载工作集（启动时一次性加载的结果）
    pub fn set_items(&mut self, items: Vec<StockItem>) {
        self.items = items;
        self.refilter();
    }

    pub fn items(&self) -> &[StockItem] {
        &self.items
    }

    pub fn tab(&self) -> TabFilter {
        self.tab
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// 切换页签（同时清空搜索词）
    pub fn set_tab(&mut self, tab: TabFilter) {
        self.tab = tab;
        self.search.clear();
        self.refilter();
    }

    /// 设置搜索词（大小写不敏感的子串匹配）
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.refilter();
    }

    fn matches(&self, item: &StockItem) -> bool {
        let tab_ok = match self.tab {
            TabFilter::Semua => true,
            TabFilter::StokKritis => item.stok_barang < self.config.low_stock_threshold,
            TabFilter::Kategori(k) => item.kategori == k,
        };
        if !tab_ok {
            return false;
        }

        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        item.deskripsi.to_lowercase().contains(&term)
            || item.part_no.to_lowercase().contains(&term)
            || item.merk.to_lowercase().contains(&term)
    }

    /// 重派生过滤结果并回到第一页
    fn refilter(&mut self) {
        self.filtered = (0..self.items.len())
            .filter(|&i| self.matches(&self.items[i]))
            .collect();
        self.page = 0;
    }

    // ===== 分页 =====

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(self.config.page_size)
    }

    /// 当前页的定长窗口（保序）
    pub fn page_items(&self) -> Vec<&StockItem> {
        let start = self.page * self.config.page_size;
        self.filtered
            .iter()
            .skip(start)
            .take(self.config.page_size)
            .map(|&i| &self.items[i])
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn next_page(&mut self) {
        if (self.page + 1) * self.config.page_size < self.filtered.len() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    // ===== 统计 =====

    /// 仪表盘统计：条目数 / 库存资产 / 低库存数
    pub fn stats(&self) -> InventoryStats {
        let total_asset = self
            .items
            .iter()
            .map(|i| i.harga_modal * i.stok_barang as f64)
            .sum();
        InventoryStats {
            total_items: self.items.len(),
            total_asset,
            low_stock: self
                .items
                .iter()
                .filter(|i| i.stok_barang < self.config.low_stock_threshold)
                .count(),
        }
    }

    // ===== 已确认变更的缓存回写 =====

    /// 新增（最新在前）
    pub fn apply_created(&mut self, item: StockItem) {
        self.items.insert(0, item);
        self.refilter();
    }

    /// 以存储层返回的记录替换缓存中的同 id 条目
    pub fn apply_updated(&mut self, item: StockItem) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.id == item.id) {
            *slot = item;
        }
        self.refilter();
    }

    /// 删除已确认移除的条目
    pub fn apply_deleted(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
        self.refilter();
    }
}
