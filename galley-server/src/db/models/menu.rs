//! Menu Model

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// A quantity of a product included in a menu
///
/// Used to enforce the menu price ceiling against constituent product prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuProduct {
    /// Product reference
    #[serde(with = "serde_helpers::record_id")]
    pub product: RecordId,
    pub quantity: i64,
}

/// Menu entity (菜单) with embedded menu products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    /// Selling price; must not exceed the sum of product prices times quantities
    pub price: Decimal,
    /// Menu group reference
    #[serde(with = "serde_helpers::record_id")]
    pub menu_group: RecordId,
    #[serde(default)]
    pub menu_products: Vec<MenuProduct>,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreate {
    pub name: String,
    pub price: Decimal,
    #[serde(with = "serde_helpers::record_id")]
    pub menu_group: RecordId,
    #[serde(default)]
    pub menu_products: Vec<MenuProduct>,
}
