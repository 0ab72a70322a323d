//! Menu Service

use super::require;
use crate::db::models::{Menu, MenuCreate};
use crate::db::repository::{MenuGroupRepository, MenuRepository, ProductRepository};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct MenuService {
    menus: MenuRepository,
    menu_groups: MenuGroupRepository,
    products: ProductRepository,
}

impl MenuService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            menus: MenuRepository::new(db.clone()),
            menu_groups: MenuGroupRepository::new(db.clone()),
            products: ProductRepository::new(db),
        }
    }

    /// Create a menu
    ///
    /// The menu group must exist, every menu product must reference an
    /// existing product with a non-negative quantity, and the selling price
    /// must not exceed the sum of product prices times quantities.
    pub async fn create(&self, data: MenuCreate) -> AppResult<Menu> {
        if data.price < Decimal::ZERO {
            return Err(AppError::with_message(
                ErrorCode::MenuInvalidPrice,
                "Menu price must not be negative",
            ));
        }

        if !self
            .menu_groups
            .exists(&data.menu_group.to_string())
            .await?
        {
            return Err(AppError::new(ErrorCode::MenuGroupNotFound));
        }

        let mut ceiling = Decimal::ZERO;
        for menu_product in &data.menu_products {
            if menu_product.quantity < 0 {
                return Err(AppError::with_message(
                    ErrorCode::MenuQuantityInvalid,
                    "Menu product quantity must not be negative",
                ));
            }

            let product = require(
                self.products
                    .find_by_id(&menu_product.product.to_string())
                    .await?,
                ErrorCode::ProductNotFound,
            )?;
            ceiling += product.price * Decimal::from(menu_product.quantity);
        }

        if data.price > ceiling {
            return Err(AppError::with_message(
                ErrorCode::MenuInvalidPrice,
                "Menu price must not exceed the sum of its product prices",
            ));
        }

        Ok(self.menus.create(data).await?)
    }

    /// List all menus with embedded menu products
    pub async fn list(&self) -> AppResult<Vec<Menu>> {
        Ok(self.menus.find_all().await?)
    }

    /// Get a menu by id
    pub async fn get(&self, id: &str) -> AppResult<Menu> {
        require(self.menus.find_by_id(id).await?, ErrorCode::MenuNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::{MenuGroupCreate, MenuProduct, ProductCreate};
    use crate::services::{MenuGroupService, ProductService};
    use surrealdb::RecordId;

    struct Fixture {
        menus: MenuService,
        group: RecordId,
        product: RecordId,
    }

    /// Seed one menu group and one product priced 16000
    async fn fixture() -> Fixture {
        let db = DbService::memory().await.unwrap().db;

        let group = MenuGroupService::new(db.clone())
            .create(MenuGroupCreate {
                name: "Chicken".to_string(),
            })
            .await
            .unwrap();

        let product = ProductService::new(db.clone())
            .create(ProductCreate {
                name: "Fried chicken".to_string(),
                price: Decimal::new(16_000, 0),
            })
            .await
            .unwrap();

        Fixture {
            menus: MenuService::new(db),
            group: group.id.unwrap(),
            product: product.id.unwrap(),
        }
    }

    fn menu(fixture: &Fixture, price: Decimal, quantity: i64) -> MenuCreate {
        MenuCreate {
            name: "Fried chicken set".to_string(),
            price,
            menu_group: fixture.group.clone(),
            menu_products: vec![MenuProduct {
                product: fixture.product.clone(),
                quantity,
            }],
        }
    }

    #[tokio::test]
    async fn test_create_within_price_ceiling() {
        let f = fixture().await;

        // 2 x 16000 = 32000 ceiling
        let created = f
            .menus
            .create(menu(&f, Decimal::new(30_000, 0), 2))
            .await
            .unwrap();

        assert!(created.id.is_some());
        assert_eq!(created.menu_products.len(), 1);
        assert_eq!(f.menus.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_price_above_ceiling() {
        let f = fixture().await;

        let err = f
            .menus
            .create(menu(&f, Decimal::new(33_000, 0), 2))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MenuInvalidPrice);
        assert!(f.menus.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_negative_price() {
        let f = fixture().await;

        let err = f
            .menus
            .create(menu(&f, Decimal::new(-1, 0), 1))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MenuInvalidPrice);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_quantity() {
        let f = fixture().await;

        let err = f
            .menus
            .create(menu(&f, Decimal::ZERO, -1))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MenuQuantityInvalid);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_menu_group() {
        let f = fixture().await;

        let mut data = menu(&f, Decimal::new(16_000, 0), 1);
        data.menu_group = RecordId::from_table_key("menu_group", "missing");

        let err = f.menus.create(data).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuGroupNotFound);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_product() {
        let f = fixture().await;

        let mut data = menu(&f, Decimal::new(16_000, 0), 1);
        data.menu_products[0].product = RecordId::from_table_key("product", "missing");

        let err = f.menus.create(data).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
    }
}
