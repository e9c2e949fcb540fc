/// HTTP server helpers shared by the service binaries
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use taskhub_shared::config::ServiceConfig;
/// use taskhub_shared::server::{cors_layer, serve};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = ServiceConfig::from_env(8081)?;
/// let app = Router::new()
///     .route("/ping", get(|| async { "pong" }))
///     .layer(cors_layer(&config.server));
///
/// serve(app, &config.server).await?;
/// # Ok(())
/// # }
/// ```

use crate::config::ServerConfig;
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Builds the CORS layer for the configured origins
///
/// `*` anywhere in the list yields a permissive layer. Origins that are not
/// valid header values are skipped with a warning.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.cors_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

/// Binds the configured address and serves `app` until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(app: Router, server: &ServerConfig) -> anyhow::Result<()> {
    let address = format!("{}:{}", server.host, server.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections..."),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
