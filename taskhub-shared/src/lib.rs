//! # TaskHub Shared Library
//!
//! Plumbing shared by the task and user services. Nothing in here knows about
//! tasks or users; each service owns its model, repository and service layer.
//!
//! ## Module Organization
//!
//! - `config`: Environment-driven service configuration
//! - `db`: Connection pool and migration runner
//! - `error`: Repository errors and their HTTP mapping
//! - `health`: `/health` endpoint handler
//! - `server`: CORS layer and graceful-shutdown serve loop
//! - `telemetry`: Tracing subscriber setup

pub mod config;
pub mod db;
pub mod error;
pub mod health;
pub mod server;
pub mod telemetry;

/// Current version of the TaskHub shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
