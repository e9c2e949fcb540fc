/// Service configuration
///
/// Loads configuration from environment variables into a typed struct. Both
/// services read the same variables; only the default port differs.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `DATABASE_MIN_CONNECTIONS`: Warm connections (default: 2)
/// - `DATABASE_CONNECT_TIMEOUT`: Acquire timeout in seconds (default: 30)
/// - `SERVER_HOST`: Host to bind to (default: 0.0.0.0)
/// - `SERVER_PORT`: Port to bind to (default: per service)
/// - `CORS_ORIGINS`: Comma-separated allowed origins (default: *)
/// - `RUN_MIGRATIONS`: Apply embedded migrations on startup (default: true)
/// - `LOG_FORMAT`: `pretty` or `json` (default: pretty)
///
/// # Example
///
/// ```no_run
/// use taskhub_shared::config::ServiceConfig;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = ServiceConfig::from_env(8081)?;
/// println!("Listening on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use crate::db::pool::DatabaseConfig;
use crate::telemetry::LogFormat;
use std::env;
use std::str::FromStr;

/// Complete configuration of one service process
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Connection pool settings
    pub database: DatabaseConfig,

    /// Apply embedded migrations before serving
    pub run_migrations: bool,

    /// Log output format
    pub log_format: LogFormat,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins; `*` means permissive
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Whether any origin may call the service
    pub fn cors_permissive(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

impl ServiceConfig {
    /// Loads configuration from the process environment
    ///
    /// A `.env` file in the working directory is read first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a variable holds a
    /// value of the wrong type.
    pub fn from_env(default_port: u16) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(default_port, |key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(default_port: u16, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseConfig::default();

        let url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let database = DatabaseConfig {
            url,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", defaults.min_connections)?,
            connect_timeout_seconds: parse_or(
                &lookup,
                "DATABASE_CONNECT_TIMEOUT",
                defaults.connect_timeout_seconds,
            )?,
            ..defaults
        };

        if database.min_connections > database.max_connections {
            anyhow::bail!(
                "DATABASE_MIN_CONNECTIONS ({}) exceeds DATABASE_MAX_CONNECTIONS ({})",
                database.min_connections,
                database.max_connections
            );
        }

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or(&lookup, "SERVER_PORT", default_port)?,
                cors_origins,
            },
            database,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
            log_format: parse_or(&lookup, "LOG_FORMAT", LogFormat::Pretty)?,
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("invalid value {:?} for {}: {}", raw, key, e)),
        None => Ok(default),
    }
}
