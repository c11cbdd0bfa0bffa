use std::sync::Arc;

use crate::repository::ProductRepository;

/// Shared application state available to all route handlers via axum's
/// `State` extractor.
pub struct AppState {
    /// Where products are read from and written to. Injected at startup so
    /// tests can swap in a substitute.
    pub repo: Arc<dyn ProductRepository>,
}
