//! Order Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Cooking,
    Meal,
    Completion,
}

/// Statuses that block table mutations (emptying, ungrouping)
pub const ACTIVE_ORDER_STATUSES: [OrderStatus; 2] = [OrderStatus::Cooking, OrderStatus::Meal];

impl OrderStatus {
    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completion)
    }

    /// Active orders keep their table occupied
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Cooking | OrderStatus::Meal)
    }
}

/// A snapshotted (name, price, quantity) record of a menu as ordered
///
/// Name and price are owned copies taken at order time; later menu changes
/// do not affect persisted orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Menu reference
    #[serde(with = "serde_helpers::record_id")]
    pub menu: RecordId,
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}

/// Order entity (订单) with embedded line items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Order table reference
    #[serde(with = "serde_helpers::record_id")]
    pub order_table: RecordId,
    pub status: OrderStatus,
    pub ordered_time: DateTime<Utc>,
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub order_table: RecordId,
    #[serde(default)]
    pub line_items: Vec<OrderLineItemCreate>,
}

/// Line item of a create order payload (menu reference plus quantity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItemCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub menu: RecordId,
    pub quantity: i64,
}

/// Change order status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusChange {
    pub status: OrderStatus,
}
