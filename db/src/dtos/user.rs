use chrono::NaiveDateTime;

pub struct UserCreateRequest {
    pub username: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}
