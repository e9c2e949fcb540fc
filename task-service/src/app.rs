/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use task_service::app::{build_router, AppState};
/// use task_service::repository::PgTaskRepository;
/// use taskhub_shared::config::ServiceConfig;
/// use taskhub_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = ServiceConfig::from_env(task_service::DEFAULT_PORT)?;
/// let pool = create_pool(config.database.clone()).await?;
///
/// let state = AppState::new(pool.clone(), Arc::new(PgTaskRepository::new(pool)));
/// let app = build_router(state, &config.server);
/// # Ok(())
/// # }
/// ```

use crate::{repository::TaskRepository, routes, service::TaskService};
use axum::{extract::FromRef, routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use taskhub_shared::{config::ServerConfig, health, server::cors_layer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Handlers extract the piece they need (`State<TaskService>` or
/// `State<PgPool>`) through `FromRef`.
#[derive(Clone, FromRef)]
pub struct AppState {
    /// Pool used by the health check
    pub db: PgPool,

    pub tasks: TaskService,
}

impl AppState {
    pub fn new(db: PgPool, repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            db,
            tasks: TaskService::new(repository),
        }
    }
}

/// Builds the router with all routes and middleware
///
/// ```text
/// /
/// ├── GET /health
/// └── /api/tasks
///     ├── GET    /          list (?userId=&status=)
///     ├── POST   /          create
///     ├── GET    /:id       get
///     ├── PUT    /:id       merge update
///     └── DELETE /:id       delete
/// ```
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let task_routes = Router::new()
        .route(
            "/",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/:id",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/tasks", task_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(server))
        .with_state(state)
}
