//! Product store: CRUD over a single DuckDB-backed `products` table, served
//! as JSON over HTTP.
//!
//! The synchronous [`ProductStore`] owns the database; [`AsyncProductStore`]
//! runs it on tokio's blocking pool and implements [`ProductRepository`], the
//! seam the HTTP handlers in [`server`] are written against.
//!
//! # Quick start
//!
//! ```no_run
//! use product_store::{models::Product, ProductStore};
//!
//! let store = ProductStore::builder().path("store.db").build().unwrap();
//!
//! let created = store
//!     .products()
//!     .insert(Product { name: "Widget".into(), ..Default::default() }.with_id(product_store::id::generate()))
//!     .unwrap();
//! let fetched = store.products().get_by_id(&created.id).unwrap();
//! assert_eq!(created, fetched);
//! ```

pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod id;
pub mod models;
pub mod queries;
pub mod repository;
pub mod server;
pub mod sql_builder;

pub use async_client::AsyncProductStore;
pub use connection::Connection;
pub use error::{Result, StoreError};
pub use repository::ProductRepository;
pub use sql_builder::SqlBuilder;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ProductStoreBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ProductStore`].
///
/// Use [`ProductStore::builder()`] to obtain one, chain configuration methods,
/// and call [`build()`](ProductStoreBuilder::build).
#[derive(Default)]
pub struct ProductStoreBuilder {
    path: Option<PathBuf>,
    in_memory: bool,
}

impl ProductStoreBuilder {
    /// Set the database file location.
    ///
    /// Defaults to `store.db` in the working directory.
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep the database in memory; nothing is written to disk.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Open the database and create the product table if it is missing.
    pub fn build(self) -> Result<ProductStore> {
        let (conn, location) = if self.in_memory {
            (Connection::open_in_memory()?, None)
        } else {
            let path = self.path.unwrap_or_else(config::default_db_path);
            (Connection::open(&path)?, Some(path))
        };
        conn.ensure_schema()?;
        Ok(ProductStore { conn, location })
    }
}

// ---------------------------------------------------------------------------
// ProductStore
// ---------------------------------------------------------------------------

/// The persistence store: owns the DuckDB [`Connection`] and hands out
/// borrowing query wrappers.
///
/// Created via [`ProductStore::builder()`].
pub struct ProductStore {
    conn: Connection,
    location: Option<PathBuf>,
}

impl ProductStore {
    /// Create a new builder for configuring the store.
    pub fn builder() -> ProductStoreBuilder {
        ProductStoreBuilder::default()
    }

    /// Access the product query interface.
    pub fn products(&self) -> queries::ProductQuery<'_> {
        queries::ProductQuery::new(&self.conn)
    }

    /// Number of stored products.
    pub fn count(&self) -> Result<usize> {
        self.products().count()
    }

    /// Execute a raw SQL query against the database.
    ///
    /// * `query` - SQL string with `?` positional placeholders.
    /// * `params` - Parameter values corresponding to the placeholders.
    pub fn sql(&self, query: &str, params: &[String]) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        self.conn.execute(query, params)
    }

    /// Database file path, or `None` for an in-memory store.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Return a reference to the underlying [`Connection`].
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl fmt::Display for ProductStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(path) => write!(f, "ProductStore(path={})", path.display()),
            None => write!(f, "ProductStore(in-memory)"),
        }
    }
}
