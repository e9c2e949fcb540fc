/// Application state and router builder

use crate::{repository::UserRepository, routes, service::UserService};
use axum::{extract::FromRef, routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use taskhub_shared::{config::ServerConfig, health, server::cors_layer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: PgPool,
    pub users: UserService,
}

impl AppState {
    pub fn new(db: PgPool, repository: Arc<dyn UserRepository>) -> Self {
        Self {
            db,
            users: UserService::new(repository),
        }
    }
}

/// Builds the router with all routes and middleware
///
/// ```text
/// /
/// ├── GET /health
/// └── /api/users
///     ├── GET  /      list
///     ├── POST /      create
///     └── GET  /:id   get
/// ```
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let user_routes = Router::new()
        .route(
            "/",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route("/:id", get(routes::users::get_user));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/users", user_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(server))
        .with_state(state)
}
