// ==========================================
// 备件库存管理系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 行级错误的 Display 即面向用户的失败原因（不含行号，
//       行号由台账在记录时统一前缀为 "Baris N: ..."）
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误（获取行序列失败，运行开始前即中止）=====
    #[error("File tidak ditemukan: {0}")]
    FileNotFound(String),

    #[error("Format file tidak didukung: {0} (hanya .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("Gagal membaca file: {0}")]
    FileReadError(String),

    #[error("Gagal membaca Excel: {0}")]
    ExcelParseError(String),

    #[error("Gagal membaca CSV: {0}")]
    CsvParseError(String),

    // ===== 行级错误（记入台账，运行继续）=====
    #[error("{message}")]
    Validation { row: usize, message: String },

    #[error("Kode '{part_no}' ganda di dalam file Excel ini.")]
    DuplicateInFile { row: usize, part_no: String },

    // ===== 配置错误 =====
    #[error("Gagal membaca konfigurasi: {0}")]
    ConfigError(String),

    // ===== 存储层透传 =====
    #[error(transparent)]
    Storage(#[from] RepositoryError),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// 行级错误携带的展示行号
    pub fn row(&self) -> Option<usize> {
        match self {
            ImportError::Validation { row, .. } | ImportError::DuplicateInFile { row, .. } => {
                Some(*row)
            }
            _ => None,
        }
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
