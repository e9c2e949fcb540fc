//! Migration runner
//!
//! Every service embeds its own `migrations/` directory with
//! `sqlx::migrate!` and hands the resulting [`Migrator`] to
//! [`run_migrations`]. The macro resolves paths relative to the calling
//! crate, which is why the migrator is built there and not here.
//!
//! # Example
//!
//! ```ignore
//! use sqlx::migrate::Migrator;
//! use taskhub_shared::db::migrations::run_migrations;
//!
//! static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
//!
//! # async fn example(pool: sqlx::PgPool) -> Result<(), sqlx::migrate::MigrateError> {
//! run_migrations(&pool, &MIGRATOR).await?;
//! # Ok(())
//! # }
//! ```

use sqlx::{
    migrate::{MigrateDatabase, MigrateError, Migrator},
    postgres::PgPool,
    Postgres,
};
use tracing::{debug, info, warn};

/// Applies all pending migrations from `migrator`
///
/// # Errors
///
/// Returns an error if a migration fails to apply or a previously applied
/// migration was modified.
pub async fn run_migrations(pool: &PgPool, migrator: &Migrator) -> Result<(), MigrateError> {
    info!(
        available = migrator.iter().count(),
        "Running database migrations"
    );

    match migrator.run(pool).await {
        Ok(()) => {
            info!("Database migrations are up to date");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Migration failed");
            Err(e)
        }
    }
}

/// Creates the database named in `database_url` if it is missing
///
/// Used by integration tests and local development. Production databases
/// are expected to exist already.
///
/// # Errors
///
/// Returns an error if the server is unreachable or the role may not create
/// databases.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    if Postgres::database_exists(database_url).await? {
        debug!("Database already exists");
        return Ok(());
    }

    info!("Database does not exist, creating it");
    Postgres::create_database(database_url).await?;
    Ok(())
}
