use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use chrono::{Duration, Utc};
use common::{
    error::{AppError, Res},
    session::SessionToken,
};
use db::{dtos::session::SessionCreateRequest, models::user::User};
use sqlx::SqlitePool;

use crate::{
    dtos::auth::{LoginRequest, RegisterRequest},
    services::user,
};

/// Creates an account and returns the new user id.
///
/// Fails with `UsernameTaken` when the exact username is already registered,
/// including when a concurrent registration wins the insert.
pub async fn register(pool: &SqlitePool, req: &RegisterRequest) -> Res<i64> {
    req.validate()?;

    if user::exists_user_by_username(pool, &req.username).await? {
        return Err(AppError::UsernameTaken);
    }
    let user = user::create_user_with_credentials(pool, req).await?;

    log::info!("Registered user '{}' (id={})", user.username, user.id);
    Ok(user.id)
}

pub async fn authenticate_user(pool: &SqlitePool, login_data: &LoginRequest) -> Res<User> {
    let user = user::get_user_by_username(pool, &login_data.username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is invalid. {}", e)))?;
    let is_valid = Argon2::default()
        .verify_password(login_data.password.as_bytes(), &parsed_hash)
        .is_ok();

    if is_valid {
        Ok(user)
    } else {
        Err(AppError::InvalidCredentials)
    }
}

/// Verifies the credentials and opens a session lasting `ttl_hours`.
pub async fn login(pool: &SqlitePool, login_data: &LoginRequest, ttl_hours: i64) -> Res<SessionToken> {
    let user = authenticate_user(pool, login_data).await?;

    let token = SessionToken::generate();
    let now = Utc::now().naive_utc();
    db::session::insert_session(
        pool,
        SessionCreateRequest {
            token: token.as_str().to_string(),
            user_id: user.id,
            created_at: now,
            expires_at: now + Duration::hours(ttl_hours),
        },
    )
    .await?;

    log::info!("User '{}' logged in", user.username);
    Ok(token)
}

pub async fn logout(pool: &SqlitePool, token: &SessionToken) -> Res<()> {
    let removed = db::session::delete_session_by_token(pool, token.as_str()).await?;
    if removed == 0 {
        log::debug!("Logout for a session that no longer exists");
    }
    Ok(())
}

/// Resolves a session token to its user. Expired sessions are removed and
/// resolve to `None`.
pub async fn current_user(pool: &SqlitePool, token: &SessionToken) -> Res<Option<i64>> {
    let Some(session) = db::session::get_session_by_token(pool, token.as_str()).await? else {
        return Ok(None);
    };

    if session.is_expired(Utc::now().naive_utc()) {
        db::session::delete_session_by_token(pool, token.as_str()).await?;
        log::debug!("Session of user {} expired", session.user_id);
        return Ok(None);
    }

    Ok(Some(session.user_id))
}
