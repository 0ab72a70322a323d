//! Table Group API 模块

mod handler;

use axum::{Router, routing::delete, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/table-groups", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", delete(handler::ungroup))
}
