//! Database Module
//!
//! Handles the embedded SurrealDB connection (RocksDB backend in production,
//! in-memory engine for tests).

pub mod models;
pub mod repository;

use shared::error::AppError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "galley";
const DATABASE: &str = "pos";

/// Database service — owns the embedded SurrealDB connection
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Create a new database service backed by RocksDB at the given path
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            "Database connection established (embedded SurrealDB, RocksDB at {})",
            db_path.display()
        );

        Ok(Self { db })
    }

    /// Create a database service backed by the in-memory engine
    ///
    /// Used by tests; nothing is persisted.
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        Ok(Self { db })
    }
}
