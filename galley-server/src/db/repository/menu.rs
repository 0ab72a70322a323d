//! Menu Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Menu, MenuCreate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "menu";

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menus with embedded menu products
    pub async fn find_all(&self) -> RepoResult<Vec<Menu>> {
        let menus: Vec<Menu> = self
            .base
            .db()
            .query("SELECT * FROM menu ORDER BY name")
            .await?
            .take(0)?;
        Ok(menus)
    }

    /// Find menu by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Menu>> {
        let thing = parse_record_id(TABLE, id);
        let menu: Option<Menu> = self.base.db().select(thing).await?;
        Ok(menu)
    }

    /// Count how many of the given menu ids exist
    pub async fn count_by_ids(&self, ids: &[RecordId]) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM menu WHERE id IN $ids GROUP ALL")
            .bind(("ids", ids.to_vec()))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Create a new menu
    pub async fn create(&self, data: MenuCreate) -> RepoResult<Menu> {
        let menu = Menu {
            id: None,
            name: data.name,
            price: data.price,
            menu_group: data.menu_group,
            menu_products: data.menu_products,
        };

        let created: Option<Menu> = self.base.db().create(TABLE).content(menu).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu".to_string()))
    }
}
