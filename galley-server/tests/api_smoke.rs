//! HTTP-level smoke tests driving the full router

use axum::body::Body;
use galley_server::api;
use galley_server::core::{Config, ServerState};
use galley_server::db::DbService;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> axum::Router {
    let db = DbService::memory().await.unwrap().db;
    let state = ServerState::new(Config::with_overrides("/tmp/galley-test", 0), db);
    api::build_app().with_state(state)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_create_and_list_products() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(post(
            "/api/products",
            json!({"name": "Fried chicken", "price": 16000}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let product = body_json(response).await;
    assert_eq!(product["name"], "Fried chicken");
    assert!(product["id"].as_str().unwrap().starts_with("product:"));

    let response = app.oneshot(get("/api/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products = body_json(response).await;
    assert_eq!(products.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_product_with_negative_price_is_rejected() {
    let app = app().await;

    let response = app
        .oneshot(post("/api/products", json!({"name": "Bad", "price": -1})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 6002);
}

#[tokio::test]
async fn test_unknown_product_returns_not_found() {
    let app = app().await;

    let response = app.oneshot(get("/api/products/product:missing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], 6001);
}

#[tokio::test]
async fn test_guest_count_change_on_empty_table_is_rejected() {
    let app = app().await;

    // Table created with guests=0, empty=true
    let response = app
        .clone()
        .oneshot(post(
            "/api/tables",
            json!({"number_of_guests": 0, "empty": true}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let table = body_json(response).await;
    let table_id = table["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(put(
            &format!("/api/tables/{table_id}/number-of-guests"),
            json!({"number_of_guests": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 7002);
    assert_eq!(
        body["message"],
        "Cannot change the number of guests on an empty table"
    );
}

#[tokio::test]
async fn test_order_flow_over_http() {
    let app = app().await;

    let table = body_json(
        app.clone()
            .oneshot(post(
                "/api/tables",
                json!({"number_of_guests": 2, "empty": false}),
            ))
            .await
            .unwrap(),
    )
    .await;
    let group = body_json(
        app.clone()
            .oneshot(post("/api/menu-groups", json!({"name": "Chicken"})))
            .await
            .unwrap(),
    )
    .await;
    let product = body_json(
        app.clone()
            .oneshot(post(
                "/api/products",
                json!({"name": "Fried chicken", "price": 16000}),
            ))
            .await
            .unwrap(),
    )
    .await;
    let menu = body_json(
        app.clone()
            .oneshot(post(
                "/api/menus",
                json!({
                    "name": "Fried chicken set",
                    "price": 16000,
                    "menu_group": group["id"],
                    "menu_products": [{"product": product["id"], "quantity": 1}],
                }),
            ))
            .await
            .unwrap(),
    )
    .await;

    let response = app
        .clone()
        .oneshot(post(
            "/api/orders",
            json!({
                "order_table": table["id"],
                "line_items": [{"menu": menu["id"], "quantity": 2}],
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let order = body_json(response).await;
    assert_eq!(order["status"], "COOKING");
    assert_eq!(order["line_items"][0]["quantity"], 2);

    let order_id = order["id"].as_str().unwrap().to_string();
    let response = app
        .oneshot(put(
            &format!("/api/orders/{order_id}/order-status"),
            json!({"status": "MEAL"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let order = body_json(response).await;
    assert_eq!(order["status"], "MEAL");
}
