//! Menu Group Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{MenuGroup, MenuGroupCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu_group";

#[derive(Clone)]
pub struct MenuGroupRepository {
    base: BaseRepository,
}

impl MenuGroupRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu groups ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<MenuGroup>> {
        let groups: Vec<MenuGroup> = self
            .base
            .db()
            .query("SELECT * FROM menu_group ORDER BY name")
            .await?
            .take(0)?;
        Ok(groups)
    }

    /// Find menu group by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuGroup>> {
        let thing = parse_record_id(TABLE, id);
        let group: Option<MenuGroup> = self.base.db().select(thing).await?;
        Ok(group)
    }

    /// Check whether a menu group exists
    pub async fn exists(&self, id: &str) -> RepoResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Create a new menu group
    pub async fn create(&self, data: MenuGroupCreate) -> RepoResult<MenuGroup> {
        let group = MenuGroup {
            id: None,
            name: data.name,
        };

        let created: Option<MenuGroup> = self.base.db().create(TABLE).content(group).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu group".to_string()))
    }
}
