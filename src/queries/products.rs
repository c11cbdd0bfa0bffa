//! Product table queries: list, lookup, insert, replace and delete by id.

use duckdb::ToSql;

use crate::config::PRODUCTS_TABLE;
use crate::connection::Connection;
use crate::error::{Result, StoreError};
use crate::models::Product;
use crate::sql_builder::{insert_into, SqlBuilder};

const COLUMNS: [&str; 6] = ["id", "name", "price", "code", "category", "promotionalcode"];

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface for the `products` table.
pub struct ProductQuery<'a> {
    conn: &'a Connection,
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Return every stored product.
    pub fn list_all(&self) -> Result<Vec<Product>> {
        let (sql, params) = SqlBuilder::select_from(PRODUCTS_TABLE).select(&COLUMNS).build();
        let products: Vec<Product> = self.conn.execute_into(&sql, &params)?;
        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Fetch one product by id.
    ///
    /// Fails with [`StoreError::NotFound`] when no row has that id.
    pub fn get_by_id(&self, id: &str) -> Result<Product> {
        let (sql, params) = SqlBuilder::select_from(PRODUCTS_TABLE)
            .select(&COLUMNS)
            .where_eq("id", id)
            .limit(1)
            .build();
        self.conn
            .execute_into::<Product>(&sql, &params)?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("product {id}")))
    }

    /// Insert a new row. The caller assigns the id; duplicates surface as the
    /// database's primary-key error.
    pub fn insert(&self, product: Product) -> Result<Product> {
        let sql = insert_into(PRODUCTS_TABLE, &COLUMNS, false);
        self.conn.execute_statement(&sql, &bind(&product))?;
        Ok(product)
    }

    /// Overwrite every column of the row sharing `product.id`.
    ///
    /// A row that does not exist yet is inserted.
    pub fn replace(&self, product: Product) -> Result<Product> {
        let sql = insert_into(PRODUCTS_TABLE, &COLUMNS, true);
        self.conn.execute_statement(&sql, &bind(&product))?;
        Ok(product)
    }

    /// Delete the row with the given id. Deleting a missing id is not an error.
    pub fn delete_by_id(&self, id: &str) -> Result<()> {
        let (sql, params) = SqlBuilder::delete_from(PRODUCTS_TABLE).where_eq("id", id).build();
        let param_values: Vec<&dyn ToSql> = params.iter().map(|p| p as &dyn ToSql).collect();
        let removed = self.conn.execute_statement(&sql, &param_values)?;
        tracing::debug!(id, removed, "Deleted product rows");
        Ok(())
    }

    /// Number of stored products.
    pub fn count(&self) -> Result<usize> {
        let (sql, params) = SqlBuilder::select_from(PRODUCTS_TABLE).select(&["COUNT(*)"]).build();
        let count = self
            .conn
            .execute_scalar(&sql, &params)?
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        Ok(count as usize)
    }
}

/// Bind a product's fields in [`COLUMNS`] order.
fn bind(product: &Product) -> [&dyn ToSql; 6] {
    [
        &product.id,
        &product.name,
        &product.price,
        &product.code,
        &product.category,
        &product.promotional_code,
    ]
}
