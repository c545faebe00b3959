//! # Availo API
//!
//! Web server implementation for the Availo availability-tracking service.
//! It defines RESTful endpoints for user accounts, authentication, schedules,
//! availability queries, external integrations, reports, and notifications.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like authentication and error handling
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
///
/// Holds the database pool and the runtime configuration (JWT secret, token
/// lifetimes, report base URL) injected at startup.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Runtime configuration for token signing and response shaping
    pub config: config::ApiConfig,
}

/// Starts the API server with the provided configuration and database connection.
///
/// Initializes logging, assembles the router, applies CORS and timeout
/// layers, and serves until the process exits.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let request_timeout = config.request_timeout;
    let cors_origins = config.cors_origins.clone();
    let addr = config.server_addr();

    // Create shared state with dependencies
    let state = Arc::new(ApiState { db_pool, config });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // User account endpoints
        .merge(routes::user::routes())
        // Authentication endpoints
        .merge(routes::auth::routes())
        // Schedule management endpoints
        .merge(routes::schedule::routes())
        // Availability endpoints
        .merge(routes::availability::routes())
        // External service integration endpoints
        .merge(routes::integration::routes())
        // Report endpoints
        .merge(routes::report::routes())
        // Notification endpoints
        .merge(routes::notification::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &cors_origins {
        let origins: Result<Vec<_>, _> = origins.iter().map(|origin| origin.parse()).collect();
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins?)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(request_timeout),
    ));

    // Start the HTTP server
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
