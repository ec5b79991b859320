// ==========================================
// 备件库存管理系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换Repository错误为用户可读的错误消息
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
/// Display 即面向用户的提示文案
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 业务规则错误 =====
    #[error("{0}")]
    DuplicatePartNo(String),

    #[error("Data tidak ditemukan: {0}")]
    NotFound(String),

    #[error("Input tidak valid: {0}")]
    InvalidInput(String),

    // ===== 数据访问错误 =====
    #[error("Gagal mengakses penyimpanan: {0}")]
    Storage(String),

    // ===== 通用错误 =====
    #[error("Kesalahan internal: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// 目的: 将存储层的技术错误转换为用户可读的业务错误
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(_) => ApiError::DuplicatePartNo(
                crate::importer::MSG_PART_NO_EXISTS.to_string(),
            ),
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={})", entity, id))
            }
            RepositoryError::ConnectionError(msg)
            | RepositoryError::LockError(msg)
            | RepositoryError::WriteError(msg) => ApiError::Storage(msg),
            RepositoryError::InternalError(msg) => ApiError::Internal(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
