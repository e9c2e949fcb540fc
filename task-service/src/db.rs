//! Migrations for the `tasks` database, embedded at compile time from
//! `task-service/migrations`.

use sqlx::migrate::Migrator;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
