//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{ACTIVE_ORDER_STATUSES, Order, OrderStatus};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders with embedded line items
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY ordered_time")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing = parse_record_id(TABLE, id);
        let order: Option<Order> = self.base.db().select(thing).await?;
        Ok(order)
    }

    /// Create a new order
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Overwrite the status of an order
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let thing = parse_record_id(TABLE, id);
        self.base
            .db()
            .query("UPDATE $thing SET status = $status")
            .bind(("thing", thing))
            .bind(("status", status))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Check whether the table has an order in COOKING or MEAL status
    pub async fn exists_active_for_table(&self, table_id: &str) -> RepoResult<bool> {
        let table = parse_record_id("order_table", table_id).to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM order WHERE order_table = $table AND status IN $statuses GROUP ALL")
            .bind(("table", table))
            .bind(("statuses", ACTIVE_ORDER_STATUSES))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0) > 0)
    }

    /// Check whether any of the tables has an order in COOKING or MEAL status
    pub async fn exists_active_for_tables(&self, table_ids: &[RecordId]) -> RepoResult<bool> {
        let tables: Vec<String> = table_ids.iter().map(|id| id.to_string()).collect();
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM order WHERE order_table IN $tables AND status IN $statuses GROUP ALL")
            .bind(("tables", tables))
            .bind(("statuses", ACTIVE_ORDER_STATUSES))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0) > 0)
    }
}
