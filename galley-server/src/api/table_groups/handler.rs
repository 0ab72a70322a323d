//! Table Group API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use crate::core::ServerState;
use crate::db::models::{TableGroupCreate, TableGroupDetail};
use crate::services::TableGroupService;
use shared::error::AppResult;

/// POST /api/table-groups - 并桌
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableGroupCreate>,
) -> AppResult<Json<TableGroupDetail>> {
    let service = TableGroupService::new(state.db.clone());
    let group = service.create(payload).await?;

    tracing::info!(tables = group.order_tables.len(), "Table group created");
    Ok(Json(group))
}

/// DELETE /api/table-groups/:id - 解除并桌
pub async fn ungroup(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let service = TableGroupService::new(state.db.clone());
    service.ungroup(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
