use chrono::NaiveDateTime;

pub struct SessionCreateRequest {
    pub token: String,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}
