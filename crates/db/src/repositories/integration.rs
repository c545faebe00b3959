use crate::models::DbIntegration;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_integration(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    service: &str,
    access_token: &str,
    refresh_token: Option<&str>,
    expiry_date: Option<DateTime<Utc>>,
) -> Result<DbIntegration> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating integration: id={}, user_id={}, service={}",
        id,
        user_id,
        service
    );

    let integration = sqlx::query_as::<_, DbIntegration>(
        r#"
        INSERT INTO integrations (id, user_id, service, access_token, refresh_token, expiry_date, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, service, access_token, refresh_token, expiry_date, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(service)
    .bind(access_token)
    .bind(refresh_token)
    .bind(expiry_date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(integration)
}

/// Full-field update. Returns `None` when no integration has this id.
pub async fn update_integration(
    pool: &Pool<Postgres>,
    id: Uuid,
    service: &str,
    access_token: &str,
    refresh_token: Option<&str>,
    expiry_date: DateTime<Utc>,
) -> Result<Option<DbIntegration>> {
    let integration = sqlx::query_as::<_, DbIntegration>(
        r#"
        UPDATE integrations
        SET service = $2, access_token = $3, refresh_token = $4, expiry_date = $5
        WHERE id = $1
        RETURNING id, user_id, service, access_token, refresh_token, expiry_date, created_at
        "#,
    )
    .bind(id)
    .bind(service)
    .bind(access_token)
    .bind(refresh_token)
    .bind(expiry_date)
    .fetch_optional(pool)
    .await?;

    Ok(integration)
}

pub async fn delete_integration(pool: &Pool<Postgres>, id: Uuid) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM integrations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
