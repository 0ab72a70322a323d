//! Table Group Service

use super::require;
use crate::db::models::{TableGroupCreate, TableGroupDetail};
use crate::db::repository::{OrderRepository, OrderTableRepository, TableGroupRepository};
use shared::error::{AppError, AppResult, ErrorCode};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct TableGroupService {
    groups: TableGroupRepository,
    tables: OrderTableRepository,
    orders: OrderRepository,
}

impl TableGroupService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            groups: TableGroupRepository::new(db.clone()),
            tables: OrderTableRepository::new(db.clone()),
            orders: OrderRepository::new(db),
        }
    }

    /// Group at least two empty, ungrouped tables
    ///
    /// Members get the group reference assigned and their empty flag
    /// cleared in a single statement.
    pub async fn create(&self, data: TableGroupCreate) -> AppResult<TableGroupDetail> {
        if data.order_tables.len() < 2 {
            return Err(AppError::with_message(
                ErrorCode::TableGroupTooSmall,
                "A table group requires at least two tables",
            ));
        }

        let members = self.tables.find_by_ids(&data.order_tables).await?;
        if members.len() != data.order_tables.len() {
            return Err(AppError::new(ErrorCode::TableNotFound));
        }

        if members
            .iter()
            .any(|t| !t.empty || t.table_group.is_some())
        {
            return Err(AppError::with_message(
                ErrorCode::TableNotGroupable,
                "Tables must be empty and ungrouped to be grouped",
            ));
        }

        let group = self.groups.create().await?;
        let group_id = self.group_id(&group.id)?;
        self.tables
            .assign_group(&group_id, &data.order_tables)
            .await?;

        let order_tables = self.tables.find_by_group(&group_id).await?;
        Ok(TableGroupDetail {
            id: group.id,
            created_date: group.created_date,
            order_tables,
        })
    }

    /// Dissolve a table group
    ///
    /// Rejected while any member table has an order in COOKING or MEAL
    /// status. Member tables keep empty = false; the group record is
    /// deleted.
    pub async fn ungroup(&self, id: &str) -> AppResult<()> {
        let group = require(
            self.groups.find_by_id(id).await?,
            ErrorCode::TableGroupNotFound,
        )?;
        let group_id = self.group_id(&group.id)?;

        let members = self.tables.find_by_group(&group_id).await?;
        let member_ids: Vec<RecordId> = members.into_iter().filter_map(|t| t.id).collect();

        if !member_ids.is_empty() && self.orders.exists_active_for_tables(&member_ids).await? {
            return Err(AppError::with_message(
                ErrorCode::TableHasActiveOrders,
                "Cannot ungroup tables with orders in cooking or meal status",
            ));
        }

        self.tables.clear_group(&group_id).await?;
        self.groups.delete(id).await?;
        Ok(())
    }

    fn group_id(&self, id: &Option<RecordId>) -> AppResult<RecordId> {
        id.clone()
            .ok_or_else(|| AppError::internal("table group record has no id"))
    }
}
