use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::user::UserCreateRequest, models::user::User};

pub async fn exists_user_by_username<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    username: &str,
) -> Res<bool> {
    sqlx::query_scalar::<_, i64>("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)")
        .bind(username)
        .fetch_one(executor)
        .await
        .map(|exists| exists != 0)
        .map_err(AppError::from)
}

pub async fn get_user_by_username<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    username: &str,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Maps a unique-constraint violation on `username` to `UsernameTaken`.
pub async fn insert_user<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: UserCreateRequest,
) -> Res<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password_hash, created_at)
        VALUES (?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.username)
    .bind(data.password_hash)
    .bind(data.created_at)
    .fetch_one(executor)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::UsernameTaken
        }
        err => AppError::from(err),
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn request(username: &str) -> UserCreateRequest {
        UserCreateRequest {
            username: username.to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn duplicate_username_is_taken() {
        let pool = crate::setup_in_memory().await.unwrap();
        let alice = insert_user(&pool, request("alice")).await.unwrap();
        assert!(exists_user_by_username(&pool, "alice").await.unwrap());

        let err = insert_user(&pool, request("alice")).await.unwrap_err();
        assert!(matches!(err, AppError::UsernameTaken));

        let fetched = get_user_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(fetched.id, alice.id);
    }

    #[tokio::test]
    async fn usernames_are_case_sensitive() {
        let pool = crate::setup_in_memory().await.unwrap();
        insert_user(&pool, request("alice")).await.unwrap();
        insert_user(&pool, request("Alice")).await.unwrap();
        assert!(get_user_by_username(&pool, "ALICE").await.unwrap().is_none());
    }
}
