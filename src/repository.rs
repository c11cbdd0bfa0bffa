//! The product repository seam.
//!
//! Handlers only see this trait. The production implementation is
//! [`AsyncProductStore`](crate::AsyncProductStore); tests substitute their own.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Product;

/// Persistence operations over product records, keyed by id.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All stored products.
    async fn list_all(&self) -> Result<Vec<Product>>;

    /// One product, or [`StoreError::NotFound`](crate::StoreError::NotFound).
    async fn get_by_id(&self, id: &str) -> Result<Product>;

    /// Store a product whose id is already assigned.
    async fn insert(&self, product: Product) -> Result<Product>;

    /// Overwrite the full row matching `product.id`.
    async fn replace(&self, product: Product) -> Result<Product>;

    /// Remove the product with `id`. Missing ids are not an error.
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}
