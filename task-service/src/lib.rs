//! # Task Service
//!
//! Task management microservice: CRUD over the `tasks` table plus lookups by
//! owning user and status.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `db`: Embedded migrations
//! - `models`: `Task` entity and its create/update inputs
//! - `repository`: Storage port with PostgreSQL and in-memory adapters
//! - `routes`: HTTP handlers
//! - `service`: Business logic (`TaskService`)

pub mod app;
pub mod db;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;

/// Port used when `SERVER_PORT` is not set
pub const DEFAULT_PORT: u16 = 8081;
