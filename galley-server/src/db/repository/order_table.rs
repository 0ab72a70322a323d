//! Order Table Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{OrderTable, OrderTableCreate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "order_table";

#[derive(Clone)]
pub struct OrderTableRepository {
    base: BaseRepository,
}

impl OrderTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all order tables
    pub async fn find_all(&self) -> RepoResult<Vec<OrderTable>> {
        let tables: Vec<OrderTable> = self
            .base
            .db()
            .query("SELECT * FROM order_table")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find table by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<OrderTable>> {
        let thing = parse_record_id(TABLE, id);
        let table: Option<OrderTable> = self.base.db().select(thing).await?;
        Ok(table)
    }

    /// Find all tables among the given ids
    pub async fn find_by_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<OrderTable>> {
        let tables: Vec<OrderTable> = self
            .base
            .db()
            .query("SELECT * FROM order_table WHERE id IN $ids")
            .bind(("ids", ids.to_vec()))
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find all member tables of a group
    pub async fn find_by_group(&self, group: &RecordId) -> RepoResult<Vec<OrderTable>> {
        let tables: Vec<OrderTable> = self
            .base
            .db()
            .query("SELECT * FROM order_table WHERE table_group = $group")
            .bind(("group", group.to_string()))
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Create a new order table (ungrouped)
    pub async fn create(&self, data: OrderTableCreate) -> RepoResult<OrderTable> {
        let table = OrderTable {
            id: None,
            number_of_guests: data.number_of_guests,
            empty: data.empty,
            table_group: None,
        };

        let created: Option<OrderTable> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order table".to_string()))
    }

    /// Set the empty flag of a table
    pub async fn set_empty(&self, id: &str, empty: bool) -> RepoResult<OrderTable> {
        let thing = parse_record_id(TABLE, id);
        self.base
            .db()
            .query("UPDATE $thing SET empty = $empty")
            .bind(("thing", thing))
            .bind(("empty", empty))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order table {} not found", id)))
    }

    /// Set the guest count of a table
    pub async fn set_number_of_guests(&self, id: &str, guests: i64) -> RepoResult<OrderTable> {
        let thing = parse_record_id(TABLE, id);
        self.base
            .db()
            .query("UPDATE $thing SET number_of_guests = $guests")
            .bind(("thing", thing))
            .bind(("guests", guests))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order table {} not found", id)))
    }

    /// Assign all given tables to a group and mark them occupied
    ///
    /// Single statement, so the assignment is atomic across members.
    pub async fn assign_group(&self, group: &RecordId, ids: &[RecordId]) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE order_table SET table_group = $group, empty = false WHERE id IN $ids")
            .bind(("group", group.to_string()))
            .bind(("ids", ids.to_vec()))
            .await?
            .check()?;
        Ok(())
    }

    /// Clear the group reference of all member tables
    ///
    /// The empty flag is left untouched.
    pub async fn clear_group(&self, group: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE order_table SET table_group = NONE WHERE table_group = $group")
            .bind(("group", group.to_string()))
            .await?
            .check()?;
        Ok(())
    }
}
