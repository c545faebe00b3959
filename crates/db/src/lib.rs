pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// Whether an error is a Postgres unique-constraint violation.
///
/// Lets callers turn a duplicate-key insert into a caller error instead of
/// reporting a persistence fault.
pub fn is_unique_violation(err: &eyre::Report) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|err| err.as_database_error())
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}
