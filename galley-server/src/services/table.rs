//! Table Service

use super::require;
use crate::db::models::{OrderTable, OrderTableCreate};
use crate::db::repository::{OrderRepository, OrderTableRepository};
use shared::error::{AppError, AppResult, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct TableService {
    tables: OrderTableRepository,
    orders: OrderRepository,
}

impl TableService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            tables: OrderTableRepository::new(db.clone()),
            orders: OrderRepository::new(db),
        }
    }

    /// Create an order table (always ungrouped)
    pub async fn create(&self, data: OrderTableCreate) -> AppResult<OrderTable> {
        if data.number_of_guests < 0 {
            return Err(AppError::with_message(
                ErrorCode::GuestCountInvalid,
                "Number of guests must not be negative",
            ));
        }

        Ok(self.tables.create(data).await?)
    }

    /// Change the empty flag of a table
    ///
    /// Rejected while the table belongs to a group or has an order in
    /// COOKING or MEAL status.
    pub async fn change_empty(&self, id: &str, empty: bool) -> AppResult<OrderTable> {
        let table = require(self.tables.find_by_id(id).await?, ErrorCode::TableNotFound)?;

        if table.table_group.is_some() {
            return Err(AppError::with_message(
                ErrorCode::TableGrouped,
                "Cannot change a table that belongs to a table group",
            ));
        }

        if self.orders.exists_active_for_table(id).await? {
            return Err(AppError::with_message(
                ErrorCode::TableHasActiveOrders,
                "Cannot change a table with orders in cooking or meal status",
            ));
        }

        Ok(self.tables.set_empty(id, empty).await?)
    }

    /// Change the guest count of a table
    ///
    /// The count must not be negative and the table must be occupied.
    pub async fn change_number_of_guests(&self, id: &str, guests: i64) -> AppResult<OrderTable> {
        if guests < 0 {
            return Err(AppError::with_message(
                ErrorCode::GuestCountInvalid,
                "Number of guests must not be negative",
            ));
        }

        let table = require(self.tables.find_by_id(id).await?, ErrorCode::TableNotFound)?;

        if table.empty {
            return Err(AppError::with_message(
                ErrorCode::TableEmpty,
                "Cannot change the number of guests on an empty table",
            ));
        }

        Ok(self.tables.set_number_of_guests(id, guests).await?)
    }

    /// List all order tables
    pub async fn list(&self) -> AppResult<Vec<OrderTable>> {
        Ok(self.tables.find_all().await?)
    }

    /// Get a table by id
    pub async fn get(&self, id: &str) -> AppResult<OrderTable> {
        require(self.tables.find_by_id(id).await?, ErrorCode::TableNotFound)
    }
}
