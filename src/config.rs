use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DB_PATH: &str = "store.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const PRODUCTS_TABLE: &str = "products";

/// DDL for the product table. Column names double as the JSON keys rows are
/// deserialized from.
pub fn products_schema() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {PRODUCTS_TABLE} (\
           id VARCHAR PRIMARY KEY, \
           name VARCHAR, \
           price DOUBLE, \
           code VARCHAR, \
           category VARCHAR, \
           promotionalcode VARCHAR\
         )"
    )
}

pub fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

/// Settings the binary needs to start serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            db_path: default_db_path(),
        }
    }
}
