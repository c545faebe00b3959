use crate::models::DbSchedule;
use chrono::{DateTime, Utc};
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_schedule(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    title: &str,
    description: Option<&str>,
    available: bool,
) -> Result<DbSchedule> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating schedule: id={}, user_id={}, title={}, available={}",
        id,
        user_id,
        title,
        available
    );

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        INSERT INTO schedules (id, user_id, start_time, end_time, title, description, available, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, user_id, start_time, end_time, title, description, available, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(start_time)
    .bind(end_time)
    .bind(title)
    .bind(description)
    .bind(available)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(schedule)
}

pub async fn get_schedule_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSchedule>> {
    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, user_id, start_time, end_time, title, description, available, created_at
        FROM schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

/// The schedule containing `now` for a user, boundaries inclusive on both
/// ends.
pub async fn get_current_for_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Option<DbSchedule>> {
    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, user_id, start_time, end_time, title, description, available, created_at
        FROM schedules
        WHERE user_id = $1 AND start_time <= $2 AND end_time >= $2
        ORDER BY start_time ASC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

/// Earliest available schedule for a user starting strictly after `after`.
pub async fn get_next_available(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    after: DateTime<Utc>,
) -> Result<Option<DbSchedule>> {
    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, user_id, start_time, end_time, title, description, available, created_at
        FROM schedules
        WHERE user_id = $1 AND start_time > $2 AND available = TRUE
        ORDER BY start_time ASC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .bind(after)
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

pub async fn get_schedule_ids_for_user(pool: &Pool<Postgres>, user_id: Uuid) -> Result<Vec<Uuid>> {
    let ids = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id
        FROM schedules
        WHERE user_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

pub async fn update_schedule(
    pool: &Pool<Postgres>,
    id: Uuid,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    title: Option<&str>,
    description: Option<Option<&str>>,
    available: Option<bool>,
) -> Result<DbSchedule> {
    let schedule = get_schedule_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Schedule not found"))?;

    let start_time = start_time.unwrap_or(schedule.start_time);
    let end_time = end_time.unwrap_or(schedule.end_time);
    let title = title.unwrap_or(&schedule.title);
    let description = match description {
        Some(value) => value.map(str::to_string),
        None => schedule.description.clone(),
    };
    let available = available.unwrap_or(schedule.available);

    let updated_schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        UPDATE schedules
        SET start_time = $2, end_time = $3, title = $4, description = $5, available = $6
        WHERE id = $1
        RETURNING id, user_id, start_time, end_time, title, description, available, created_at
        "#,
    )
    .bind(id)
    .bind(start_time)
    .bind(end_time)
    .bind(title)
    .bind(description)
    .bind(available)
    .fetch_one(pool)
    .await?;

    Ok(updated_schedule)
}

/// Deletes a schedule, returning how many rows matched.
pub async fn delete_schedule(pool: &Pool<Postgres>, id: Uuid) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Flips the availability flag on every schedule for a user that has not yet
/// ended. Returns the number of rows touched.
pub async fn set_availability_for_upcoming(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    now: DateTime<Utc>,
    available: bool,
) -> Result<u64> {
    tracing::debug!(
        "Setting availability={} for upcoming schedules of user {}",
        available,
        user_id
    );

    let result = sqlx::query(
        r#"
        UPDATE schedules
        SET available = $3
        WHERE user_id = $1 AND end_time > $2
        "#,
    )
    .bind(user_id)
    .bind(now)
    .bind(available)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
