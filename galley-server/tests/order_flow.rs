//! Order lifecycle tests - creation rules, snapshots, status transitions

mod common;

use common::{db, id_of, seed_menu, seed_table};
use galley_server::db::models::{OrderCreate, OrderLineItemCreate, OrderStatus};
use galley_server::services::OrderService;
use rust_decimal::Decimal;
use shared::error::ErrorCode;
use surrealdb::RecordId;

#[tokio::test]
async fn test_create_order_on_occupied_table() {
    let db = db().await;
    let table = seed_table(&db, 2, false).await;
    let menu = seed_menu(&db, 16_000).await;

    let service = OrderService::new(db.clone());
    let order = service
        .create(OrderCreate {
            order_table: table.id.clone().unwrap(),
            line_items: vec![OrderLineItemCreate {
                menu: menu.id.clone().unwrap(),
                quantity: 2,
            }],
        })
        .await
        .unwrap();

    assert!(order.id.is_some());
    assert_eq!(order.status, OrderStatus::Cooking);
    assert_eq!(order.line_items.len(), 1);

    // Name and price are snapshotted from the menu at order time
    let item = &order.line_items[0];
    assert_eq!(item.name, "Fried chicken set");
    assert_eq!(item.price, Decimal::from(16_000));
    assert_eq!(item.quantity, 2);

    // Persisted and readable back with line items
    let fetched = service.get(&id_of(&order.id)).await.unwrap();
    assert_eq!(fetched.line_items.len(), 1);
    assert_eq!(fetched.line_items[0].price, Decimal::from(16_000));
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_order_fails_for_empty_table() {
    let db = db().await;
    let table = seed_table(&db, 0, true).await;
    let menu = seed_menu(&db, 16_000).await;

    let err = OrderService::new(db.clone())
        .create(OrderCreate {
            order_table: table.id.clone().unwrap(),
            line_items: vec![OrderLineItemCreate {
                menu: menu.id.clone().unwrap(),
                quantity: 1,
            }],
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::OrderTableEmpty);
}

#[tokio::test]
async fn test_create_order_fails_for_unknown_table() {
    let db = db().await;
    let menu = seed_menu(&db, 16_000).await;

    let err = OrderService::new(db.clone())
        .create(OrderCreate {
            order_table: RecordId::from_table_key("order_table", "missing"),
            line_items: vec![OrderLineItemCreate {
                menu: menu.id.clone().unwrap(),
                quantity: 1,
            }],
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::TableNotFound);
}

#[tokio::test]
async fn test_create_order_fails_for_unknown_menu() {
    let db = db().await;
    let table = seed_table(&db, 2, false).await;

    let err = OrderService::new(db.clone())
        .create(OrderCreate {
            order_table: table.id.clone().unwrap(),
            line_items: vec![OrderLineItemCreate {
                menu: RecordId::from_table_key("menu", "missing"),
                quantity: 1,
            }],
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::MenuNotFound);
}

#[tokio::test]
async fn test_create_order_fails_for_negative_quantity() {
    let db = db().await;
    let table = seed_table(&db, 2, false).await;
    let menu = seed_menu(&db, 16_000).await;

    let err = OrderService::new(db.clone())
        .create(OrderCreate {
            order_table: table.id.clone().unwrap(),
            line_items: vec![OrderLineItemCreate {
                menu: menu.id.clone().unwrap(),
                quantity: -1,
            }],
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::OrderQuantityInvalid);
}

#[tokio::test]
async fn test_create_order_with_repeated_menu() {
    let db = db().await;
    let table = seed_table(&db, 4, false).await;
    let menu = seed_menu(&db, 16_000).await;

    // Two line items for the same menu; the distinct-menu count still matches
    let order = OrderService::new(db.clone())
        .create(OrderCreate {
            order_table: table.id.clone().unwrap(),
            line_items: vec![
                OrderLineItemCreate {
                    menu: menu.id.clone().unwrap(),
                    quantity: 1,
                },
                OrderLineItemCreate {
                    menu: menu.id.clone().unwrap(),
                    quantity: 2,
                },
            ],
        })
        .await
        .unwrap();

    assert_eq!(order.line_items.len(), 2);
}

#[tokio::test]
async fn test_status_transitions_until_completion() {
    let db = db().await;
    let table = seed_table(&db, 2, false).await;
    let menu = seed_menu(&db, 16_000).await;

    let service = OrderService::new(db.clone());
    let order = service
        .create(OrderCreate {
            order_table: table.id.clone().unwrap(),
            line_items: vec![OrderLineItemCreate {
                menu: menu.id.clone().unwrap(),
                quantity: 1,
            }],
        })
        .await
        .unwrap();
    let order_id = id_of(&order.id);

    let order = service
        .change_status(&order_id, OrderStatus::Meal)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Meal);

    let order = service
        .change_status(&order_id, OrderStatus::Completion)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Completion);

    // COMPLETION is terminal
    let err = service
        .change_status(&order_id, OrderStatus::Meal)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::OrderAlreadyCompleted);

    // The rejected transition left the stored status untouched
    let fetched = service.get(&order_id).await.unwrap();
    assert_eq!(fetched.status, OrderStatus::Completion);
}

#[tokio::test]
async fn test_change_status_fails_for_unknown_order() {
    let db = db().await;

    let err = OrderService::new(db.clone())
        .change_status("order:missing", OrderStatus::Meal)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::OrderNotFound);
}
