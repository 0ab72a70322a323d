//! Data Models
//!
//! Serde entities stored in SurrealDB. Record links are serialized as
//! "table:id" strings via [`serde_helpers`].

pub mod serde_helpers;

mod menu;
mod menu_group;
mod order;
mod order_table;
mod product;
mod table_group;

pub use menu::{Menu, MenuCreate, MenuProduct};
pub use menu_group::{MenuGroup, MenuGroupCreate};
pub use order::{
    ACTIVE_ORDER_STATUSES, Order, OrderCreate, OrderLineItem, OrderLineItemCreate, OrderStatus,
    OrderStatusChange,
};
pub use order_table::{EmptyChange, GuestCountChange, OrderTable, OrderTableCreate};
pub use product::{Product, ProductCreate};
pub use table_group::{TableGroup, TableGroupCreate, TableGroupDetail};
