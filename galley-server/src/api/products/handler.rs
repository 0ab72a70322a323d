//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate};
use crate::services::ProductService;
use shared::error::AppResult;

/// GET /api/products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.db.clone());
    Ok(Json(service.list().await?))
}

/// GET /api/products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.db.clone());
    Ok(Json(service.get(&id).await?))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.db.clone());
    let product = service.create(payload).await?;

    tracing::info!(name = %product.name, "Product created");
    Ok(Json(product))
}
