//! Order Service

use super::require;
use crate::db::models::{Order, OrderCreate, OrderLineItem, OrderStatus};
use crate::db::repository::{MenuRepository, OrderRepository, OrderTableRepository};
use chrono::Utc;
use shared::error::{AppError, AppResult, ErrorCode};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    menus: MenuRepository,
    tables: OrderTableRepository,
}

impl OrderService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            menus: MenuRepository::new(db.clone()),
            tables: OrderTableRepository::new(db),
        }
    }

    /// Create an order with status COOKING
    ///
    /// The target table must exist and be occupied, and every referenced
    /// menu must exist (checked by comparing the count of stored menus
    /// against the distinct requested ids). Each line item snapshots the
    /// menu's name and price at order time.
    pub async fn create(&self, data: OrderCreate) -> AppResult<Order> {
        let table = require(
            self.tables
                .find_by_id(&data.order_table.to_string())
                .await?,
            ErrorCode::TableNotFound,
        )?;
        if table.empty {
            return Err(AppError::with_message(
                ErrorCode::OrderTableEmpty,
                "Cannot create an order for an empty table",
            ));
        }

        for item in &data.line_items {
            if item.quantity < 0 {
                return Err(AppError::with_message(
                    ErrorCode::OrderQuantityInvalid,
                    "Order line item quantity must not be negative",
                ));
            }
        }

        let mut distinct_menus: Vec<RecordId> = Vec::new();
        for item in &data.line_items {
            if !distinct_menus.contains(&item.menu) {
                distinct_menus.push(item.menu.clone());
            }
        }
        let found = self.menus.count_by_ids(&distinct_menus).await?;
        if found != distinct_menus.len() as i64 {
            return Err(AppError::with_message(
                ErrorCode::MenuNotFound,
                "Order references a menu that does not exist",
            ));
        }

        let mut line_items = Vec::with_capacity(data.line_items.len());
        for item in data.line_items {
            let menu = require(
                self.menus.find_by_id(&item.menu.to_string()).await?,
                ErrorCode::MenuNotFound,
            )?;
            line_items.push(OrderLineItem {
                menu: item.menu,
                name: menu.name,
                price: menu.price,
                quantity: item.quantity,
            });
        }

        let order = Order {
            id: None,
            order_table: data.order_table,
            status: OrderStatus::Cooking,
            ordered_time: Utc::now(),
            line_items,
        };

        Ok(self.orders.create(order).await?)
    }

    /// Overwrite the status of an order
    ///
    /// COMPLETION is terminal; no further transitions are allowed.
    pub async fn change_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let order = require(self.orders.find_by_id(id).await?, ErrorCode::OrderNotFound)?;

        if order.status.is_terminal() {
            return Err(AppError::with_message(
                ErrorCode::OrderAlreadyCompleted,
                "Cannot change the status of a completed order",
            ));
        }

        Ok(self.orders.update_status(id, status).await?)
    }

    /// List all orders with embedded line items
    pub async fn list(&self) -> AppResult<Vec<Order>> {
        Ok(self.orders.find_all().await?)
    }

    /// Get an order by id
    pub async fn get(&self, id: &str) -> AppResult<Order> {
        require(self.orders.find_by_id(id).await?, ErrorCode::OrderNotFound)
    }
}
