//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderStatusChange};
use crate::services::OrderService;
use shared::error::AppResult;

/// GET /api/orders - 获取所有订单 (含明细)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let service = OrderService::new(state.db.clone());
    Ok(Json(service.list().await?))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let service = OrderService::new(state.db.clone());
    Ok(Json(service.get(&id).await?))
}

/// POST /api/orders - 下单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let service = OrderService::new(state.db.clone());
    let order = service.create(payload).await?;

    tracing::info!(
        table = %order.order_table,
        items = order.line_items.len(),
        "Order created"
    );
    Ok(Json(order))
}

/// PUT /api/orders/:id/order-status - 变更订单状态
pub async fn change_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusChange>,
) -> AppResult<Json<Order>> {
    let service = OrderService::new(state.db.clone());
    Ok(Json(service.change_status(&id, payload.status).await?))
}
