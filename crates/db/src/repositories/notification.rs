use crate::models::{DbNotification, DbNotificationPreferences};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_preferences(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Option<DbNotificationPreferences>> {
    let preferences = sqlx::query_as::<_, DbNotificationPreferences>(
        r#"
        SELECT user_id, email_enabled, sms_enabled, in_app_enabled
        FROM notification_preferences
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(preferences)
}

pub async fn upsert_preferences(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    email_enabled: bool,
    sms_enabled: bool,
    in_app_enabled: bool,
) -> Result<DbNotificationPreferences> {
    let preferences = sqlx::query_as::<_, DbNotificationPreferences>(
        r#"
        INSERT INTO notification_preferences (user_id, email_enabled, sms_enabled, in_app_enabled)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id)
        DO UPDATE SET email_enabled = $2, sms_enabled = $3, in_app_enabled = $4
        RETURNING user_id, email_enabled, sms_enabled, in_app_enabled
        "#,
    )
    .bind(user_id)
    .bind(email_enabled)
    .bind(sms_enabled)
    .bind(in_app_enabled)
    .fetch_one(pool)
    .await?;

    Ok(preferences)
}

/// Records a delivered notification in the log table.
pub async fn record_notification(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    message: &str,
) -> Result<DbNotification> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let notification = sqlx::query_as::<_, DbNotification>(
        r#"
        INSERT INTO notifications (id, user_id, message, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, message, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(message)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(notification)
}
