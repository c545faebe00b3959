use chrono::Utc;
use pretty_assertions::assert_eq;
use availo_db::{
    mock::repositories::MockUserRepo,
    models::{DbProfile, DbUser},
};
use uuid::Uuid;

fn user_row(id: Uuid, email: &str, role: &str) -> DbUser {
    DbUser {
        id,
        email: email.to_string(),
        password_hash: "$argon2id$stub".to_string(),
        role: role.to_string(),
        created_at: Utc::now(),
    }
}

fn profile_row(user_id: Uuid, first_name: &str, last_name: &str) -> DbProfile {
    DbProfile {
        user_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

/// Applies a patch the way the user update endpoint does: the account row is
/// only touched when email or role is present, the profile row only when a
/// name is present. Absent fields keep their stored values.
async fn apply_patch(
    users: &MockUserRepo,
    id: Uuid,
    email: Option<&'static str>,
    role: Option<&'static str>,
    first_name: Option<&'static str>,
    last_name: Option<&'static str>,
) -> eyre::Result<(DbUser, Option<DbProfile>)> {
    let user = users
        .get_user_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("user not found"))?;

    let user = if email.is_some() || role.is_some() {
        users.update_user(id, email, role).await?
    } else {
        user
    };

    let profile = if first_name.is_some() || last_name.is_some() {
        Some(users.update_profile(id, first_name, last_name).await?)
    } else {
        None
    };

    Ok((user, profile))
}

#[tokio::test]
async fn test_name_only_patch_leaves_account_row_alone() {
    let id = Uuid::new_v4();

    let mut users = MockUserRepo::new();
    users
        .expect_get_user_by_id()
        .returning(|id| Ok(Some(user_row(id, "ada@example.com", "Professional"))));
    // No expectation on update_user: calling it would panic
    users
        .expect_update_profile()
        .withf(|_, first, last| *first == Some("Ada") && last.is_none())
        .returning(|uid, _, _| Ok(profile_row(uid, "Ada", "Lovelace")));

    let (user, profile) = apply_patch(&users, id, None, None, Some("Ada"), None)
        .await
        .unwrap();

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, "Professional");

    let profile = profile.unwrap();
    assert_eq!(profile.first_name, "Ada");
    // The name not present in the patch keeps its stored value
    assert_eq!(profile.last_name, "Lovelace");
}

#[tokio::test]
async fn test_email_only_patch_keeps_role_and_profile() {
    let id = Uuid::new_v4();

    let mut users = MockUserRepo::new();
    users
        .expect_get_user_by_id()
        .returning(|id| Ok(Some(user_row(id, "ada@example.com", "Professional"))));
    users
        .expect_update_user()
        .withf(|_, email, role| *email == Some("countess@example.com") && role.is_none())
        .returning(|uid, _, _| Ok(user_row(uid, "countess@example.com", "Professional")));
    // No expectation on update_profile: calling it would panic

    let (user, profile) = apply_patch(&users, id, Some("countess@example.com"), None, None, None)
        .await
        .unwrap();

    assert_eq!(user.email, "countess@example.com");
    assert_eq!(user.role, "Professional");
    assert!(profile.is_none());
}

#[tokio::test]
async fn test_empty_patch_touches_nothing() {
    let id = Uuid::new_v4();

    let mut users = MockUserRepo::new();
    users
        .expect_get_user_by_id()
        .returning(|id| Ok(Some(user_row(id, "ada@example.com", "Professional"))));

    let (user, profile) = apply_patch(&users, id, None, None, None, None)
        .await
        .unwrap();

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, "Professional");
    assert!(profile.is_none());
}
