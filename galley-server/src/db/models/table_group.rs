//! Table Group Model

use super::order_table::OrderTable;
use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Table group entity (并桌)
///
/// A set of order tables jointly assigned, e.g. merged for a party.
/// Member tables point back at the group via their `table_group` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGroup {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub created_date: DateTime<Utc>,
}

/// Create table group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGroupCreate {
    /// Member table references; at least two
    #[serde(with = "serde_helpers::vec_record_id")]
    pub order_tables: Vec<RecordId>,
}

/// Table group with member tables resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGroupDetail {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub created_date: DateTime<Utc>,
    pub order_tables: Vec<OrderTable>,
}
