//! Query modules for the product store.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes methods returning
//! `Result<T>`.

pub mod products;

pub use products::ProductQuery;
