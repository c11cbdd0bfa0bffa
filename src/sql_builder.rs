//! SQL builder with parameterized statement construction.
//!
//! All caller-supplied values go through DuckDB's parameter binding (`?`
//! placeholders), never through string interpolation. Builder methods return
//! `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use product_store::SqlBuilder;
//! let (sql, params) = SqlBuilder::select_from("products")
//!     .where_eq("id", "abc")
//!     .limit(1)
//!     .build();
//! assert_eq!(sql, "SELECT *\nFROM products\nWHERE id = ?\nLIMIT 1");
//! assert_eq!(params, vec!["abc".to_string()]);
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Select,
    Delete,
}

/// Builds parameterized `SELECT` and `DELETE` statements.
pub struct SqlBuilder {
    verb: Verb,
    select_cols: Vec<String>,
    table: String,
    where_clauses: Vec<String>,
    params: Vec<String>,
    limit_val: Option<usize>,
}

impl SqlBuilder {
    fn new(verb: Verb, table: &str) -> Self {
        Self {
            verb,
            select_cols: vec!["*".to_string()],
            table: table.to_string(),
            where_clauses: Vec::new(),
            params: Vec::new(),
            limit_val: None,
        }
    }

    /// Start a `SELECT` against the given table.
    pub fn select_from(table: &str) -> Self {
        Self::new(Verb::Select, table)
    }

    /// Start a `DELETE` against the given table.
    pub fn delete_from(table: &str) -> Self {
        Self::new(Verb::Delete, table)
    }

    /// Set the columns to select (replaces the default `*`).
    pub fn select(&mut self, cols: &[&str]) -> &mut Self {
        self.select_cols = cols.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Add an equality condition: `{column} = ?`.
    pub fn where_eq(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clauses.push(format!("{} = ?", column));
        self.params.push(value.to_string());
        self
    }

    /// Set the maximum number of rows to return. Ignored for `DELETE`.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// Build the final SQL string and parameter list.
    pub fn build(&self) -> (String, Vec<String>) {
        let mut parts = match self.verb {
            Verb::Select => vec![
                format!("SELECT {}", self.select_cols.join(", ")),
                format!("FROM {}", self.table),
            ],
            Verb::Delete => vec![format!("DELETE FROM {}", self.table)],
        };

        if !self.where_clauses.is_empty() {
            parts.push(format!("WHERE {}", self.where_clauses.join(" AND ")));
        }

        if let (Verb::Select, Some(n)) = (self.verb, self.limit_val) {
            parts.push(format!("LIMIT {}", n));
        }

        (parts.join("\n"), self.params.clone())
    }
}

/// Build an `INSERT` for the given columns with one `?` per column.
///
/// With `replace` set the statement becomes `INSERT OR REPLACE`, which
/// overwrites the row sharing the primary key or inserts it when absent.
pub fn insert_into(table: &str, cols: &[&str], replace: bool) -> String {
    let verb = if replace { "INSERT OR REPLACE" } else { "INSERT" };
    let placeholders: Vec<&str> = cols.iter().map(|_| "?").collect();
    format!(
        "{} INTO {} ({}) VALUES ({})",
        verb,
        table,
        cols.join(", "),
        placeholders.join(", ")
    )
}
