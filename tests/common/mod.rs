//! Shared test fixtures for the product store integration tests.
//!
//! Provides `setup_sample_store()` which creates an in-memory DuckDB store
//! populated with a few products, plus substitute repositories for driving the
//! HTTP layer without DuckDB.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use product_store::models::Product;
use product_store::{ProductRepository, ProductStore, Result, StoreError};
use tower::ServiceExt;

/// Create an in-memory `ProductStore` holding the products from
/// [`sample_products`].
pub fn setup_sample_store() -> ProductStore {
    let store = ProductStore::builder().in_memory().build().unwrap();
    for product in sample_products() {
        store.products().insert(product).unwrap();
    }
    store
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "prod-001".into(),
            name: "Widget".into(),
            price: 9.99,
            code: "W1".into(),
            category: "tools".into(),
            promotional_code: String::new(),
        },
        Product {
            id: "prod-002".into(),
            name: "Gadget".into(),
            price: 24.5,
            code: "G7".into(),
            category: "electronics".into(),
            promotional_code: "SPRING10".into(),
        },
        Product {
            id: "prod-003".into(),
            name: "Gizmo".into(),
            price: 0.0,
            code: "Z0".into(),
            category: "toys".into(),
            promotional_code: String::new(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Substitute repositories
// ---------------------------------------------------------------------------

/// Repository over a `HashMap`; behaves like the real store.
#[derive(Default)]
pub struct MemoryRepository {
    rows: Mutex<HashMap<String, Product>>,
}

#[async_trait]
impl ProductRepository for MemoryRepository {
    async fn list_all(&self) -> Result<Vec<Product>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Product> {
        self.rows
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("product {id}")))
    }

    async fn insert(&self, product: Product) -> Result<Product> {
        self.rows.lock().unwrap().insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn replace(&self, product: Product) -> Result<Product> {
        self.rows.lock().unwrap().insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.rows.lock().unwrap().remove(id);
        Ok(())
    }
}

/// Repository whose every operation fails with a storage error. Lookups can
/// optionally succeed so the write half of an update is reached.
#[derive(Default)]
pub struct FailingRepository {
    pub existing: Option<Product>,
}

fn storage_error() -> StoreError {
    StoreError::Io(std::io::Error::other("disk unavailable"))
}

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn list_all(&self) -> Result<Vec<Product>> {
        Err(storage_error())
    }

    async fn get_by_id(&self, _id: &str) -> Result<Product> {
        self.existing.clone().ok_or_else(storage_error)
    }

    async fn insert(&self, _product: Product) -> Result<Product> {
        Err(storage_error())
    }

    async fn replace(&self, _product: Product) -> Result<Product> {
        Err(storage_error())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<()> {
        Err(storage_error())
    }
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Send one request through `app` and return the status and raw body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// Like [`send`], parsing the body as JSON.
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}
