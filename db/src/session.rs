use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::session::SessionCreateRequest, models::session::Session};

pub async fn insert_session<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: SessionCreateRequest,
) -> Res<Session> {
    sqlx::query_as::<_, Session>(
        r#"
        INSERT INTO sessions (token, user_id, created_at, expires_at)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.token)
    .bind(data.user_id)
    .bind(data.created_at)
    .bind(data.expires_at)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_session_by_token<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    token: &str,
) -> Res<Option<Session>> {
    sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE token = ?")
        .bind(token)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn delete_session_by_token<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    token: &str,
) -> Res<u64> {
    let result = sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
