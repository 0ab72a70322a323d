//! Shared fixtures for integration tests
//!
//! Everything runs against the in-memory engine; nothing is persisted.

use galley_server::db::DbService;
use galley_server::db::models::{
    Menu, MenuCreate, MenuGroupCreate, MenuProduct, OrderTable, OrderTableCreate, ProductCreate,
};
use galley_server::services::{MenuGroupService, MenuService, ProductService, TableService};
use rust_decimal::Decimal;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub async fn db() -> Surreal<Db> {
    DbService::memory().await.unwrap().db
}

/// Create an order table
pub async fn seed_table(db: &Surreal<Db>, guests: i64, empty: bool) -> OrderTable {
    TableService::new(db.clone())
        .create(OrderTableCreate {
            number_of_guests: guests,
            empty,
        })
        .await
        .unwrap()
}

/// Create a menu group, a product priced `price`, and a menu selling one of
/// that product for the same price
pub async fn seed_menu(db: &Surreal<Db>, price: i64) -> Menu {
    let group = MenuGroupService::new(db.clone())
        .create(MenuGroupCreate {
            name: "Set menus".to_string(),
        })
        .await
        .unwrap();

    let product = ProductService::new(db.clone())
        .create(ProductCreate {
            name: "Fried chicken".to_string(),
            price: Decimal::from(price),
        })
        .await
        .unwrap();

    MenuService::new(db.clone())
        .create(MenuCreate {
            name: "Fried chicken set".to_string(),
            price: Decimal::from(price),
            menu_group: group.id.unwrap(),
            menu_products: vec![MenuProduct {
                product: product.id.unwrap(),
                quantity: 1,
            }],
        })
        .await
        .unwrap()
}

/// String form of a persisted record id
pub fn id_of(id: &Option<RecordId>) -> String {
    id.as_ref().unwrap().to_string()
}
