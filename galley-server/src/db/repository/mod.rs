//! Repository Module
//!
//! Per-entity persistence gateways over the embedded SurrealDB connection.
//! Repositories hold no business rules; cross-entity invariants live in the
//! domain services.

mod menu;
mod menu_group;
mod order;
mod order_table;
mod product;
mod table_group;

// Re-exports
pub use menu::MenuRepository;
pub use menu_group::MenuGroupRepository;
pub use order::OrderRepository;
pub use order_table::OrderTableRepository;
pub use product::ProductRepository;
pub use table_group::TableGroupRepository;

use shared::error::{AppError, ErrorCode};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: let id: RecordId = "product:abc".parse()?;
//   - 创建: let id = RecordId::from_table_key("product", "abc");
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId
//
// 链接字段 (order_table, menu_group, table_group, ...) 以 "table:id" 字符串
// 形式存储；对链接字段的查询绑定字符串，对主键 id 的查询绑定 RecordId。

/// Parse an id that may or may not carry its table prefix
pub(crate) fn parse_record_id(table: &str, id: &str) -> RecordId {
    id.parse()
        .unwrap_or_else(|_| RecordId::from_table_key(table, id))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
