//! Handlers for the five `/products` endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::id;
use crate::models::Product;
use crate::server::error::AppError;
use crate::server::state::AppState;

/// GET /products
pub async fn list_products(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.repo.list_all().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list products");
        AppError::from(e)
    })?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state.repo.get_by_id(&id).await.map_err(|e| {
        tracing::info!(id = %id, error = %e, "Product lookup failed");
        AppError::from(e)
    })?;
    Ok(Json(product))
}

/// POST /products
///
/// Any id in the body is replaced by a freshly generated one. A failed write
/// is logged and the product is still returned with 200.
pub async fn create_product(State(state): State<Arc<AppState>>, Json(body): Json<Product>) -> Json<Product> {
    let product = body.with_id(id::generate());

    match state.repo.insert(product.clone()).await {
        Ok(stored) => {
            tracing::debug!(id = %stored.id, "Created product");
            Json(stored)
        }
        Err(e) => {
            tracing::error!(id = %product.id, error = %e, "Create write failed; reporting success to client");
            Json(product)
        }
    }
}

/// PUT /products/{id}
///
/// The product must exist (404 otherwise). The body then replaces every
/// field; the path id wins over any id in the body. Existence is checked
/// before the body is looked at, so a malformed body for a missing id is a
/// 404.
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let existing = state.repo.get_by_id(&id).await.map_err(|e| {
        tracing::info!(id = %id, error = %e, "Update target lookup failed");
        AppError::from(e)
    })?;

    let Json(body) = body?;
    let product = body.with_id(existing.id);

    match state.repo.replace(product.clone()).await {
        Ok(stored) => Ok(Json(stored)),
        Err(e) => {
            tracing::error!(id = %product.id, error = %e, "Update write failed; reporting success to client");
            Ok(Json(product))
        }
    }
}

/// DELETE /products/{id}
///
/// Always answers `{"id #<id>": "deleted"}`, whether or not a row existed or
/// the delete succeeded.
pub async fn delete_product(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Json<Value> {
    if let Err(e) = state.repo.delete_by_id(&id).await {
        tracing::error!(id = %id, error = %e, "Delete failed; reporting success to client");
    }

    Json(json!({ format!("id #{id}"): "deleted" }))
}
