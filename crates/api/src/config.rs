//! # API Configuration Module
//!
//! Loads configuration for the Availo API server from environment variables,
//! providing defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `JWT_SECRET`: Secret key for signing access and refresh tokens (required)
//! - `ACCESS_TOKEN_TTL_MINUTES`: Access-token lifetime (default: 30)
//! - `REFRESH_TOKEN_TTL_DAYS`: Refresh-token lifetime (default: 30)
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `REPORT_BASE_URL`: Base URL for generated report links

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the Availo API server.
///
/// Encapsulates networking, database, and security settings. The JWT signing
/// secret lives here so handlers receive it through shared state rather than
/// a process-global constant.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Secret key for signing JWTs
    pub jwt_secret: String,

    /// Access-token lifetime in minutes
    pub access_token_ttl_minutes: i64,

    /// Refresh-token lifetime in days
    pub refresh_token_ttl_days: i64,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Base URL under which generated reports are served
    pub report_base_url: String,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` or `JWT_SECRET` is not set, or if
    /// `API_PORT` cannot be parsed as a u16.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()).as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Security settings
        let jwt_secret =
            env::var("JWT_SECRET").wrap_err("JWT_SECRET environment variable must be set")?;
        let access_token_ttl_minutes = env::var("ACCESS_TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);
        let refresh_token_ttl_days = env::var("REFRESH_TOKEN_TTL_DAYS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Report settings
        let report_base_url = env::var("REPORT_BASE_URL")
            .unwrap_or_else(|_| format!("http://{}:{}/report", host, port));

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            jwt_secret,
            access_token_ttl_minutes,
            refresh_token_ttl_days,
            request_timeout,
            report_base_url,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080").
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
