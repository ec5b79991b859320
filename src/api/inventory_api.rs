// ==========================================
// 备件库存管理系统 - 库存业务接口
// ==========================================
// 职责: 手工录入 / 行内编辑 / 删除 / 工作集加载
// 红线: 售价只在此处由定价规则重算后写入，
//       创建与编辑路径的 Draft 都不携带售价字段
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::item::{NewStockItem, StockItem, StockItemDraft, StockItemPatch};
use crate::engine::pricing::sell_price;
use crate::repository::StockRepository;
use tracing::{debug, info};

// ==========================================
// InventoryApi - 库存业务接口
// ==========================================
pub struct InventoryApi<R: StockRepository> {
    repo: R,
}

impl<R: StockRepository> InventoryApi<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// 表单必填校验（part_no / merk / deskripsi 非空）
    fn validate_draft(draft: &StockItemDraft) -> ApiResult<()> {
        if draft.part_no.trim().is_empty() {
            return Err(ApiError::InvalidInput("Part Number wajib diisi".to_string()));
        }
        if draft.merk.trim().is_empty() {
            return Err(ApiError::InvalidInput("Merk wajib diisi".to_string()));
        }
        if draft.deskripsi.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "Nama Barang (Deskripsi) wajib diisi".to_string(),
            ));
        }
        Ok(())
    }

    /// 手工录入：校验 → 售价重算 → 落库
    ///
    /// # 返回
    /// - Ok(StockItem): 含生成字段的完整记录（调用方据此回写缓存）
    /// - Err(DuplicatePartNo): 件号已存在
    pub async fn create_item(&self, draft: StockItemDraft) -> ApiResult<StockItem> {
        Self::validate_draft(&draft)?;

        let harga_jual = sell_price(draft.harga_modal, draft.margin);
        let item = NewStockItem {
            part_no: draft.part_no.trim().to_string(),
            merk: draft.merk.trim().to_string(),
            kategori: draft.kategori,
            deskripsi: draft.deskripsi.trim().to_string(),
            posisi: draft.posisi.trim().to_string(),
            stok_barang: draft.stok_barang,
            harga_modal: draft.harga_modal,
            margin: draft.margin,
            harga_jual,
        };

        let created = self.repo.create(item).await?;
        info!(id = %created.id, part_no = %created.part_no, "库存条目创建成功");
        Ok(created)
    }

    /// 行内编辑：校验 → 售价按草稿的成本/毛利重算 → 局部更新
    ///
    /// 编辑任一价格字段时，另一字段取草稿当前值参与重算，
    /// 保证落库瞬间派生不变量成立。
    pub async fn update_item(&self, id: &str, draft: StockItemDraft) -> ApiResult<StockItem> {
        Self::validate_draft(&draft)?;

        let harga_jual = sell_price(draft.harga_modal, draft.margin);
        let patch = StockItemPatch {
            part_no: Some(draft.part_no.trim().to_string()),
            merk: Some(draft.merk.trim().to_string()),
            kategori: Some(draft.kategori),
            deskripsi: Some(draft.deskripsi.trim().to_string()),
            posisi: Some(draft.posisi.trim().to_string()),
            stok_barang: Some(draft.stok_barang),
            harga_modal: Some(draft.harga_modal),
            margin: Some(draft.margin),
            harga_jual: Some(harga_jual),
        };

        let updated = self.repo.update(id, patch).await?;
        debug!(id = %updated.id, harga_jual = updated.harga_jual, "库存条目更新成功");
        Ok(updated)
    }

    /// 删除条目
    pub async fn delete_item(&self, id: &str) -> ApiResult<()> {
        self.repo.delete(id).await?;
        info!(id = %id, "库存条目删除成功");
        Ok(())
    }

    /// 按 id 读取单条记录
    pub async fn get_item(&self, id: &str) -> ApiResult<StockItem> {
        Ok(self.repo.get(id).await?)
    }

    /// 加载工作集（按创建时间倒序，上限 limit）
    ///
    /// 启动时调用一次，结果交给 InventoryView 做缓存与派生。
    pub async fn load_working_set(&self, limit: usize) -> ApiResult<Vec<StockItem>> {
        let items = self.repo.list(limit).await?;
        debug!(count = items.len(), "工作集加载完成");
        Ok(items)
    }
}
