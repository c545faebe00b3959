use crate::models::{DbProfile, DbUser};
use chrono::Utc;
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_user(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
    role: &str,
) -> Result<DbUser> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating user: id={}, email={}, role={}", id, email, role);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, email, password_hash, role, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email, password_hash, role, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, email, password_hash, role, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, email, password_hash, role, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn update_user(
    pool: &Pool<Postgres>,
    id: Uuid,
    email: Option<&str>,
    role: Option<&str>,
) -> Result<DbUser> {
    let user = get_user_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("User not found"))?;

    let email = email.unwrap_or(&user.email);
    let role = role.unwrap_or(&user.role);

    let updated_user = sqlx::query_as::<_, DbUser>(
        r#"
        UPDATE users
        SET email = $2, role = $3
        WHERE id = $1
        RETURNING id, email, password_hash, role, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(role)
    .fetch_one(pool)
    .await?;

    Ok(updated_user)
}

pub async fn create_profile(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    first_name: &str,
    last_name: &str,
) -> Result<DbProfile> {
    let profile = sqlx::query_as::<_, DbProfile>(
        r#"
        INSERT INTO profiles (user_id, first_name, last_name)
        VALUES ($1, $2, $3)
        RETURNING user_id, first_name, last_name
        "#,
    )
    .bind(user_id)
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

pub async fn get_profile_by_user_id(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Option<DbProfile>> {
    let profile = sqlx::query_as::<_, DbProfile>(
        r#"
        SELECT user_id, first_name, last_name
        FROM profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

pub async fn update_profile(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<DbProfile> {
    let profile = get_profile_by_user_id(pool, user_id)
        .await?
        .ok_or_else(|| eyre!("Profile not found"))?;

    let first_name = first_name.unwrap_or(&profile.first_name);
    let last_name = last_name.unwrap_or(&profile.last_name);

    let updated_profile = sqlx::query_as::<_, DbProfile>(
        r#"
        UPDATE profiles
        SET first_name = $2, last_name = $3
        WHERE user_id = $1
        RETURNING user_id, first_name, last_name
        "#,
    )
    .bind(user_id)
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await?;

    Ok(updated_profile)
}
