//! Menu Group API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{MenuGroup, MenuGroupCreate};
use crate::services::MenuGroupService;
use shared::error::AppResult;

/// GET /api/menu-groups - 获取所有菜单分组
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuGroup>>> {
    let service = MenuGroupService::new(state.db.clone());
    Ok(Json(service.list().await?))
}

/// POST /api/menu-groups - 创建菜单分组
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuGroupCreate>,
) -> AppResult<Json<MenuGroup>> {
    let service = MenuGroupService::new(state.db.clone());
    Ok(Json(service.create(payload).await?))
}
