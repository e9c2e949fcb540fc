//! Migrations for the `users` database, embedded at compile time from
//! `user-service/migrations`.

use sqlx::migrate::Migrator;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
