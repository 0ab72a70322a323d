//! Order Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{EmptyChange, GuestCountChange, OrderTable, OrderTableCreate};
use crate::services::TableService;
use shared::error::AppResult;

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderTable>>> {
    let service = TableService::new(state.db.clone());
    Ok(Json(service.list().await?))
}

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderTable>> {
    let service = TableService::new(state.db.clone());
    Ok(Json(service.get(&id).await?))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderTableCreate>,
) -> AppResult<Json<OrderTable>> {
    let service = TableService::new(state.db.clone());
    Ok(Json(service.create(payload).await?))
}

/// PUT /api/tables/:id/empty - 变更空桌标记
pub async fn change_empty(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmptyChange>,
) -> AppResult<Json<OrderTable>> {
    let service = TableService::new(state.db.clone());
    Ok(Json(service.change_empty(&id, payload.empty).await?))
}

/// PUT /api/tables/:id/number-of-guests - 变更客人数
pub async fn change_number_of_guests(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<GuestCountChange>,
) -> AppResult<Json<OrderTable>> {
    let service = TableService::new(state.db.clone());
    Ok(Json(
        service
            .change_number_of_guests(&id, payload.number_of_guests)
            .await?,
    ))
}
