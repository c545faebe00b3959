use crate::models::DbAppointment;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_appointments_by_schedule_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, schedule_id, title, start_time, end_time, description, created_at
        FROM appointments
        WHERE schedule_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(schedule_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn count_for_schedule(pool: &Pool<Postgres>, schedule_id: Uuid) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM appointments
        WHERE schedule_id = $1
        "#,
    )
    .bind(schedule_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
