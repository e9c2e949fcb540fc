//! # User Service
//!
//! Serves the user API over PostgreSQL.

use std::sync::Arc;
use taskhub_shared::{
    config::ServiceConfig,
    db::{
        migrations::run_migrations,
        pool::{close_pool, create_pool},
    },
    server::serve,
    telemetry::init_tracing,
};
use user_service::{
    app::{build_router, AppState},
    db::MIGRATOR,
    repository::PgUserRepository,
    DEFAULT_PORT,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env(DEFAULT_PORT)?;

    init_tracing(
        "user_service=debug,taskhub_shared=info,tower_http=debug",
        config.log_format,
    );

    tracing::info!(
        "User service v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let pool = create_pool(config.database.clone()).await?;

    if config.run_migrations {
        run_migrations(&pool, &MIGRATOR).await?;
    } else {
        tracing::info!("Skipping migrations (RUN_MIGRATIONS=false)");
    }

    let repository = Arc::new(PgUserRepository::new(pool.clone()));
    let app = build_router(AppState::new(pool.clone(), repository), &config.server);

    serve(app, &config.server).await?;

    close_pool(pool).await;
    Ok(())
}
