//! Menu Group Service

use crate::db::models::{MenuGroup, MenuGroupCreate};
use crate::db::repository::MenuGroupRepository;
use shared::error::AppResult;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct MenuGroupService {
    menu_groups: MenuGroupRepository,
}

impl MenuGroupService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            menu_groups: MenuGroupRepository::new(db),
        }
    }

    /// Create a menu group
    pub async fn create(&self, data: MenuGroupCreate) -> AppResult<MenuGroup> {
        Ok(self.menu_groups.create(data).await?)
    }

    /// List all menu groups
    pub async fn list(&self) -> AppResult<Vec<MenuGroup>> {
        Ok(self.menu_groups.find_all().await?)
    }
}
