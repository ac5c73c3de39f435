use std::{env, sync::Arc};

/// Minimum length of `SESSION_SECRET`, the key material the cookie signing
/// key is derived from.
pub const MIN_SESSION_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// Holds everything needed to start the storefront: database location,
/// session settings, bind address, worker count and logging preferences.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The URL of the SQLite database, created on first start.
    pub database_url: String,
    /// Key material for signing the session cookie. When absent a random key
    /// is generated per process and sessions do not survive a restart.
    pub session_secret: Option<String>,
    /// How long a login stays valid, in hours.
    pub session_ttl_hours: i64,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// Whether the console/file logger and request logging are enabled.
    pub console_logging_enabled: bool,
    /// Maximum level written by the logger.
    pub log_level: log::LevelFilter,
    /// File the logger appends to, next to stdout.
    pub log_file: String,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// # Environment Variables
    ///
    /// All optional:
    /// - `ENVIRONMENT`: `development` or `production` (default: "development")
    /// - `DATABASE_URL`: SQLite connection string (default: "sqlite://shop.db")
    /// - `SESSION_SECRET`: cookie key material, at least 32 bytes
    /// - `SESSION_TTL_HOURS`: session lifetime (default: 24)
    /// - `IP`: Server host (default: "0.0.0.0")
    /// - `PORT`: Server port (default: 8080)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable logging (default: true)
    /// - `LOG_LEVEL`: Logger level filter (default: "info")
    /// - `LOG_FILE`: Log file path (default: "storefront.log")
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is set but shorter than 32 bytes.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        Arc::new(Self::from_source(|key| env::var(key).ok()))
    }

    /// Builds the configuration from any key lookup, `from_env` passes the
    /// process environment.
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        let session_secret = get("SESSION_SECRET").filter(|secret| !secret.is_empty());
        if let Some(secret) = &session_secret {
            if secret.len() < MIN_SESSION_SECRET_LEN {
                panic!(
                    "SESSION_SECRET must be at least {} bytes long",
                    MIN_SESSION_SECRET_LEN
                );
            }
        }

        Config {
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            database_url: get("DATABASE_URL").unwrap_or_else(|| "sqlite://shop.db".to_string()),
            session_secret,
            session_ttl_hours: get("SESSION_TTL_HOURS")
                .and_then(|hours| hours.parse().ok())
                .filter(|hours| *hours > 0)
                .unwrap_or(24),
            server_host: get("IP").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: get("PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(8080),
            num_workers: get("WORKERS")
                .and_then(|workers| workers.parse().ok())
                .unwrap_or(4),
            console_logging_enabled: get("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|| "true".to_string())
                .to_lowercase()
                == "true",
            log_level: get("LOG_LEVEL")
                .and_then(|level| level.parse().ok())
                .unwrap_or(log::LevelFilter::Info),
            log_file: get("LOG_FILE").unwrap_or_else(|| "storefront.log".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
