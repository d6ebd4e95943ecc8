//! CRUD over `/Product`.
//!
//! Unlike items, a product update sends the full record and the server
//! answers without a body.

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::http::{ApiClient, ApiError};
use crate::net::types::{NewProduct, Product};

const PRODUCTS_PATH: &str = "/Product";

fn product_path(id: i64) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}

#[derive(Clone, Debug)]
pub struct ProductsService {
    client: ApiClient,
}

impl ProductsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        self.client.get_json(PRODUCTS_PATH).await
    }

    pub async fn get(&self, id: i64) -> Result<Product, ApiError> {
        self.client.get_json(&product_path(id)).await
    }

    pub async fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.client.post_json(PRODUCTS_PATH, product).await
    }

    pub async fn update(&self, id: i64, product: &Product) -> Result<(), ApiError> {
        self.client.put(&product_path(id), product).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&product_path(id)).await
    }
}
