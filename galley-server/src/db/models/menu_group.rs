//! Menu Group Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Menu group entity (菜单分组)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGroup {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
}

/// Create menu group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGroupCreate {
    pub name: String,
}
