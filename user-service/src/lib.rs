//! # User Service
//!
//! User account microservice: list, fetch and register users.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `db`: Embedded migrations
//! - `models`: `User` entity and its create input
//! - `repository`: Storage port with PostgreSQL and in-memory adapters
//! - `routes`: HTTP handlers
//! - `service`: Business logic (`UserService`)

pub mod app;
pub mod db;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;

/// Port used when `SERVER_PORT` is not set
pub const DEFAULT_PORT: u16 = 8082;
