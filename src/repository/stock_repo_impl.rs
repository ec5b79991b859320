// ==========================================
// 备件库存管理系统 - 库存 Repository 实现
// ==========================================
// 存储: SQLite (rusqlite)，barang 表
// id 为 UUID v4，时间戳为 UTC（RFC3339 文本列）
// ==========================================

use crate::db::open_and_init;
use crate::domain::item::{NewStockItem, StockItem, StockItemPatch};
use crate::domain::types::Kategori;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::stock_repo::StockRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// SqliteStockRepository
// ==========================================
pub struct SqliteStockRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStockRepository {
    /// 创建新的 Repository 实例（打开连接并完成建表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_and_init(db_path)
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建（测试与入口共享连接时使用）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 行映射: barang 表 → StockItem
    fn map_row(row: &Row<'_>) -> rusqlite::Result<StockItem> {
        let kategori_raw: String = row.get("kategori")?;
        let stok: i64 = row.get("stok_barang")?;

        Ok(StockItem {
            id: row.get("id")?,
            part_no: row.get("part_no")?,
            merk: row.get("merk")?,
            kategori: Kategori::parse_lenient(&kategori_raw),
            deskripsi: row.get("deskripsi")?,
            posisi: row.get("posisi")?,
            stok_barang: stok.max(0) as u32,
            harga_modal: row.get("harga_modal")?,
            margin: row.get("margin")?,
            harga_jual: row.get("harga_jual")?,
            created_at: row.get::<_, DateTime<Utc>>("created_at")?,
            updated_at: row.get::<_, DateTime<Utc>>("updated_at")?,
        })
    }

    const SELECT_COLS: &'static str = "id, part_no, merk, kategori, deskripsi, posisi, \
         stok_barang, harga_modal, margin, harga_jual, created_at, updated_at";

    fn get_by_id(conn: &Connection, id: &str) -> RepositoryResult<StockItem> {
        let sql = format!("SELECT {} FROM barang WHERE id = ?1", Self::SELECT_COLS);
        conn.query_row(&sql, params![id], Self::map_row)
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                    entity: "barang".to_string(),
                    id: id.to_string(),
                },
                other => other.into(),
            })
    }
}

#[async_trait]
impl StockRepository for SqliteStockRepository {
    async fn create(&self, item: NewStockItem) -> RepositoryResult<StockItem> {
        let conn = self.lock()?;
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        conn.execute(
            r#"
            INSERT INTO barang (
                id, part_no, merk, kategori, deskripsi, posisi,
                stok_barang, harga_modal, margin, harga_jual,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                id,
                item.part_no,
                item.merk,
                item.kategori.as_str(),
                item.deskripsi,
                item.posisi,
                item.stok_barang as i64,
                item.harga_modal,
                item.margin,
                item.harga_jual,
                now,
                now,
            ],
        )?;

        Ok(StockItem {
            id,
            part_no: item.part_no,
            merk: item.merk,
            kategori: item.kategori,
            deskripsi: item.deskripsi,
            posisi: item.posisi,
            stok_barang: item.stok_barang,
            harga_modal: item.harga_modal,
            margin: item.margin,
            harga_jual: item.harga_jual,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, id: &str, patch: StockItemPatch) -> RepositoryResult<StockItem> {
        let conn = self.lock()?;

        // 读取现状并合并 patch（仅 Some 字段生效）
        let current = Self::get_by_id(&conn, id)?;
        let now = Utc::now();

        let merged = StockItem {
            id: current.id.clone(),
            part_no: patch.part_no.unwrap_or(current.part_no),
            merk: patch.merk.unwrap_or(current.merk),
            kategori: patch.kategori.unwrap_or(current.kategori),
            deskripsi: patch.deskripsi.unwrap_or(current.deskripsi),
            posisi: patch.posisi.unwrap_or(current.posisi),
            stok_barang: patch.stok_barang.unwrap_or(current.stok_barang),
            harga_modal: patch.harga_modal.unwrap_or(current.harga_modal),
            margin: patch.margin.unwrap_or(current.margin),
            harga_jual: patch.harga_jual.unwrap_or(current.harga_jual),
            created_at: current.created_at,
            updated_at: now,
        };

        conn.execute(
            r#"
            UPDATE barang SET
                part_no = ?1, merk = ?2, kategori = ?3, deskripsi = ?4,
                posisi = ?5, stok_barang = ?6, harga_modal = ?7,
                margin = ?8, harga_jual = ?9, updated_at = ?10
            WHERE id = ?11
            "#,
            params![
                merged.part_no,
                merged.merk,
                merged.kategori.as_str(),
                merged.deskripsi,
                merged.posisi,
                merged.stok_barang as i64,
                merged.harga_modal,
                merged.margin,
                merged.harga_jual,
                now,
                id,
            ],
        )?;

        Ok(merged)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.lock()?;

        let affected = conn.execute("DELETE FROM barang WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "barang".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> RepositoryResult<StockItem> {
        let conn = self.lock()?;
        Self::get_by_id(&conn, id)
    }

    async fn list(&self, limit: usize) -> RepositoryResult<Vec<StockItem>> {
        let conn = self.lock()?;

        let sql = format!(
            "SELECT {} FROM barang ORDER BY created_at DESC, rowid DESC LIMIT ?1",
            Self::SELECT_COLS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![limit as i64], Self::map_row)?;

        let mut items = Vec::new();
        for row in rows {
            items.push(row?);
        }
        Ok(items)
    }
}
