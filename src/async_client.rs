//! Async wrapper around [`ProductStore`] for use inside the tokio runtime.
//!
//! Every store operation runs on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! DuckDB works.
//!
//! # Example
//!
//! ```no_run
//! use product_store::AsyncProductStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = AsyncProductStore::builder().in_memory().build().await.unwrap();
//!     let products = store.run(|s| s.products().list_all()).await.unwrap();
//!     assert!(products.is_empty());
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::models::Product;
use crate::repository::ProductRepository;
use crate::ProductStore;

// ---------------------------------------------------------------------------
// AsyncProductStoreBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncProductStore`].
#[derive(Default)]
pub struct AsyncProductStoreBuilder {
    path: Option<PathBuf>,
    in_memory: bool,
}

impl AsyncProductStoreBuilder {
    /// Set the database file location.
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep the database in memory.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Build the async store. Opening the database runs on the blocking pool.
    pub async fn build(self) -> Result<AsyncProductStore> {
        tokio::task::spawn_blocking(move || {
            let mut builder = ProductStore::builder();
            if let Some(path) = self.path {
                builder = builder.path(path);
            }
            if self.in_memory {
                builder = builder.in_memory();
            }
            Ok(AsyncProductStore::new(builder.build()?))
        })
        .await
        .map_err(|e| StoreError::Task(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncProductStore
// ---------------------------------------------------------------------------

/// Async handle to a shared [`ProductStore`].
///
/// Cloning is cheap; clones share one database connection. The connection is
/// guarded by a [`Mutex`], so individual operations never overlap, but nothing
/// holds the lock across two calls.
#[derive(Clone)]
pub struct AsyncProductStore {
    inner: Arc<Mutex<ProductStore>>,
}

impl AsyncProductStore {
    /// Create a new builder for configuring the async store.
    pub fn builder() -> AsyncProductStoreBuilder {
        AsyncProductStoreBuilder::default()
    }

    /// Wrap an already-open store.
    pub fn new(store: ProductStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run a sync store operation on the blocking thread pool.
    ///
    /// The closure receives a `&ProductStore` and returns a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ProductStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = store
                .lock()
                .map_err(|_| StoreError::Task("Store lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| StoreError::Task(format!("Task join error: {e}")))?
    }

    /// Execute a raw SQL query asynchronously.
    pub async fn sql(&self, query: &str, params: &[String]) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let query = query.to_string();
        let params = params.to_vec();
        self.run(move |s| s.sql(&query, &params)).await
    }

    /// Number of stored products.
    pub async fn count(&self) -> Result<usize> {
        self.run(|s| s.count()).await
    }
}

#[async_trait]
impl ProductRepository for AsyncProductStore {
    async fn list_all(&self) -> Result<Vec<Product>> {
        self.run(|s| s.products().list_all()).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Product> {
        let id = id.to_string();
        self.run(move |s| s.products().get_by_id(&id)).await
    }

    async fn insert(&self, product: Product) -> Result<Product> {
        self.run(move |s| s.products().insert(product)).await
    }

    async fn replace(&self, product: Product) -> Result<Product> {
        self.run(move |s| s.products().replace(product)).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.run(move |s| s.products().delete_by_id(&id)).await
    }
}
