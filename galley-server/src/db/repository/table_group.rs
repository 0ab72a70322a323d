//! Table Group Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::TableGroup;
use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "table_group";

#[derive(Clone)]
pub struct TableGroupRepository {
    base: BaseRepository,
}

impl TableGroupRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find table group by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<TableGroup>> {
        let thing = parse_record_id(TABLE, id);
        let group: Option<TableGroup> = self.base.db().select(thing).await?;
        Ok(group)
    }

    /// Create a new table group stamped with the current time
    pub async fn create(&self) -> RepoResult<TableGroup> {
        let group = TableGroup {
            id: None,
            created_date: Utc::now(),
        };

        let created: Option<TableGroup> = self.base.db().create(TABLE).content(group).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create table group".to_string()))
    }

    /// Delete a table group record
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let thing = parse_record_id(TABLE, id);
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?
            .check()?;
        Ok(())
    }
}
