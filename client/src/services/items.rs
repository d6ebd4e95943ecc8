//! CRUD over `/Items`.

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use crate::net::http::{ApiClient, ApiError};
use crate::net::types::{Item, ItemCreate, ItemUpdate};

const ITEMS_PATH: &str = "/Items";

fn item_path(id: i64) -> String {
    format!("{ITEMS_PATH}/{id}")
}

#[derive(Clone, Debug)]
pub struct ItemsService {
    client: ApiClient,
}

impl ItemsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Item>, ApiError> {
        self.client.get_json(ITEMS_PATH).await
    }

    pub async fn get(&self, id: i64) -> Result<Item, ApiError> {
        self.client.get_json(&item_path(id)).await
    }

    pub async fn create(&self, item: &ItemCreate) -> Result<Item, ApiError> {
        self.client.post_json(ITEMS_PATH, item).await
    }

    /// Apply a partial update. Returns the stored record when the API echoes
    /// it back; `None` when the write succeeded with an empty body.
    pub async fn update(&self, id: i64, item: &ItemUpdate) -> Result<Option<Item>, ApiError> {
        self.client.put_json(&item_path(id), item).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&item_path(id)).await
    }
}
