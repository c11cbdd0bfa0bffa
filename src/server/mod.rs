//! HTTP surface: router construction and process lifecycle helpers.

pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::repository::ProductRepository;

pub use error::AppError;
pub use state::AppState;

/// Build the router binding the five product routes to `repo`.
pub fn router(repo: Arc<dyn ProductRepository>) -> Router {
    let state = Arc::new(AppState { repo });

    Router::new()
        .route(
            "/products",
            get(routes::list_products).post(routes::create_product),
        )
        .route(
            "/products/{id}",
            get(routes::get_product)
                .put(routes::update_product)
                .delete(routes::delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `app` on a background task.
///
/// The returned handle is never asked to stop; a listener failure is logged
/// and ends the process.
pub fn spawn_listener(listener: TcpListener, app: Router) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "HTTP listener failed");
            std::process::exit(1);
        }
    })
}

/// Resolve once the process receives SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}
