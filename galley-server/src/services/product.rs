//! Product Service

use super::require;
use crate::db::models::{Product, ProductCreate};
use crate::db::repository::ProductRepository;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct ProductService {
    products: ProductRepository,
}

impl ProductService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            products: ProductRepository::new(db),
        }
    }

    /// Create a product; the price must not be negative
    pub async fn create(&self, data: ProductCreate) -> AppResult<Product> {
        if data.price < Decimal::ZERO {
            return Err(AppError::with_message(
                ErrorCode::ProductInvalidPrice,
                "Product price must not be negative",
            ));
        }

        Ok(self.products.create(data).await?)
    }

    /// List all products
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.find_all().await?)
    }

    /// Get a product by id
    pub async fn get(&self, id: &str) -> AppResult<Product> {
        require(
            self.products.find_by_id(id).await?,
            ErrorCode::ProductNotFound,
        )
    }
}
