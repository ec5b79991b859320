// ==========================================
// 备件库存管理系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::inventory_config_trait::InventoryConfigReader;
use crate::config::{
    DEFAULT_AUTO_CODE_PREFIX, DEFAULT_BRAND, DEFAULT_LIST_LIMIT, DEFAULT_LOW_STOCK_THRESHOLD,
    DEFAULT_PAGE_SIZE, DEFAULT_POSITION,
};
use crate::db::open_and_init;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_and_init(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 从 config_kv 表读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// 写入配置值（UPSERT，scope_id='global'）
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

#[async_trait]
impl InventoryConfigReader for ConfigManager {
    async fn get_low_stock_threshold(&self) -> Result<u32, Box<dyn Error>> {
        let raw = self.get_config_or_default(
            "inventory/low_stock_threshold",
            &DEFAULT_LOW_STOCK_THRESHOLD.to_string(),
        )?;
        Ok(raw.parse().unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD))
    }

    async fn get_page_size(&self) -> Result<usize, Box<dyn Error>> {
        let raw = self
            .get_config_or_default("inventory/page_size", &DEFAULT_PAGE_SIZE.to_string())?;
        Ok(raw.parse().unwrap_or(DEFAULT_PAGE_SIZE))
    }

    async fn get_list_limit(&self) -> Result<usize, Box<dyn Error>> {
        let raw = self
            .get_config_or_default("inventory/list_limit", &DEFAULT_LIST_LIMIT.to_string())?;
        Ok(raw.parse().unwrap_or(DEFAULT_LIST_LIMIT))
    }

    async fn get_auto_code_prefix(&self) -> Result<String, Box<dyn Error>> {
        self.get_config_or_default("import/auto_code_prefix", DEFAULT_AUTO_CODE_PREFIX)
    }

    async fn get_default_brand(&self) -> Result<String, Box<dyn Error>> {
        self.get_config_or_default("import/default_brand", DEFAULT_BRAND)
    }

    async fn get_default_position(&self) -> Result<String, Box<dyn Error>> {
        self.get_config_or_default("import/default_position", DEFAULT_POSITION)
    }
}
