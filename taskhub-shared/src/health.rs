/// Health check endpoint
///
/// Mounted by both services at `GET /health`. The handler only needs the
/// pool, so any router state that implements `FromRef<S> for PgPool` can
/// use it.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": "connected"
/// }
/// ```

use crate::db::pool;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,

    /// Application version
    pub version: String,

    /// `connected` or `disconnected`
    pub database: String,
}

pub async fn health_check(State(db): State<PgPool>) -> Json<HealthResponse> {
    let connected = match pool::health_check(&db).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    Json(HealthResponse {
        status: if connected { "healthy" } else { "degraded" }.to_string(),
        version: crate::VERSION.to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
    })
}
