use crate::models::DbReport;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_report(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    content: &str,
    report_type: &str,
) -> Result<DbReport> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating report: id={}, user_id={}, report_type={}",
        id,
        user_id,
        report_type
    );

    let report = sqlx::query_as::<_, DbReport>(
        r#"
        INSERT INTO reports (id, user_id, content, report_type, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, content, report_type, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(content)
    .bind(report_type)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(report)
}

pub async fn get_report_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbReport>> {
    let report = sqlx::query_as::<_, DbReport>(
        r#"
        SELECT id, user_id, content, report_type, created_at, updated_at
        FROM reports
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(report)
}
