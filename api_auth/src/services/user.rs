use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, password_hash::PasswordHasher};
use chrono::Utc;
use common::error::{AppError, Res};
use db::dtos::user::UserCreateRequest;
use db::models::user::User;
use sqlx::SqlitePool;

use crate::dtos::auth::RegisterRequest;

pub async fn exists_user_by_username(pool: &SqlitePool, username: &str) -> Res<bool> {
    db::user::exists_user_by_username(pool, username).await
}
pub async fn get_user_by_username(pool: &SqlitePool, username: &str) -> Res<Option<User>> {
    db::user::get_user_by_username(pool, username).await
}

pub async fn create_user_with_credentials(pool: &SqlitePool, req: &RegisterRequest) -> Res<User> {
    // hash the password
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password. {}", e)))?
        .to_string();

    // insert user with credentials
    db::user::insert_user(
        pool,
        UserCreateRequest {
            username: req.username.clone(),
            password_hash,
            created_at: Utc::now().naive_utc(),
        },
    )
    .await
}
