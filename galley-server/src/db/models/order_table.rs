//! Order Table Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order table entity (桌台)
///
/// A physical seating unit tracked for occupancy and guest count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTable {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub number_of_guests: i64,
    pub empty: bool,
    /// Table group reference; None while ungrouped
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub table_group: Option<RecordId>,
}

/// Create order table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTableCreate {
    pub number_of_guests: i64,
    pub empty: bool,
}

/// Change empty flag payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyChange {
    pub empty: bool,
}

/// Change guest count payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestCountChange {
    pub number_of_guests: i64,
}
