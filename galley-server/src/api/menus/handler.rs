//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Menu, MenuCreate};
use crate::services::MenuService;
use shared::error::AppResult;

/// GET /api/menus - 获取所有菜单 (含菜单商品)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Menu>>> {
    let service = MenuService::new(state.db.clone());
    Ok(Json(service.list().await?))
}

/// GET /api/menus/:id - 获取单个菜单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Menu>> {
    let service = MenuService::new(state.db.clone());
    Ok(Json(service.get(&id).await?))
}

/// POST /api/menus - 创建菜单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCreate>,
) -> AppResult<Json<Menu>> {
    let service = MenuService::new(state.db.clone());
    let menu = service.create(payload).await?;

    tracing::info!(name = %menu.name, "Menu created");
    Ok(Json(menu))
}
