use std::process::ExitCode;
use std::sync::Arc;

use product_store::config::ServerConfig;
use product_store::{server, AsyncProductStore};
use tracing::{error, info};

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let config = ServerConfig::default();

    let store = match AsyncProductStore::builder().path(&config.db_path).build().await {
        Ok(store) => store,
        Err(e) => {
            error!(path = %config.db_path.display(), error = %e, "Failed to open database");
            return ExitCode::FAILURE;
        }
    };
    match store.count().await {
        Ok(count) => info!(path = %config.db_path.display(), count, "Database open"),
        Err(e) => error!(error = %e, "Failed to count stored products"),
    }

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %config.bind_addr, "Listening");

    let app = server::router(Arc::new(store));
    server::spawn_listener(listener, app);

    // No drain: in-flight requests are dropped with the runtime.
    server::shutdown_signal().await;
    info!("Shutting down");

    ExitCode::SUCCESS
}
