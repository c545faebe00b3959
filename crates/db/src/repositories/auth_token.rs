use crate::models::DbAuthToken;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_by_token(pool: &Pool<Postgres>, token: &str) -> Result<Option<DbAuthToken>> {
    let auth_token = sqlx::query_as::<_, DbAuthToken>(
        r#"
        SELECT id, user_id, token, expiry_date, created_at
        FROM auth_tokens
        WHERE token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(auth_token)
}

/// Replaces a refresh token with a rotated value in a single update keyed on
/// the old token. Returns `None` when the old token no longer matches any
/// row, which is how a concurrent reuse of a stale token surfaces.
pub async fn rotate(
    pool: &Pool<Postgres>,
    old_token: &str,
    new_token: &str,
    new_expiry: DateTime<Utc>,
) -> Result<Option<DbAuthToken>> {
    let rotated = sqlx::query_as::<_, DbAuthToken>(
        r#"
        UPDATE auth_tokens
        SET token = $2, expiry_date = $3
        WHERE token = $1
        RETURNING id, user_id, token, expiry_date, created_at
        "#,
    )
    .bind(old_token)
    .bind(new_token)
    .bind(new_expiry)
    .fetch_optional(pool)
    .await?;

    if rotated.is_some() {
        tracing::debug!("Rotated refresh token");
    } else {
        tracing::debug!("Refresh token rotation matched no row");
    }

    Ok(rotated)
}

/// Deletes every token row matching the presented value. Zero matches is not
/// an error; logout is idempotent.
pub async fn delete_by_token(pool: &Pool<Postgres>, token: &str) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM auth_tokens
        WHERE token = $1
        "#,
    )
    .bind(token)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
