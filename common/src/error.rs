use actix_session::{SessionGetError, SessionInsertError};
use actix_web::{HttpResponse, http::header::LOCATION};
use thiserror::Error;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Session error: {0}")]
    Session(String),

    // === APPLICATION ERRORS ===
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Please log in to access this page.")]
    Unauthenticated,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Your cart changed during checkout, please review it and try again")]
    CartChanged,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

impl From<SessionInsertError> for AppError {
    fn from(error: SessionInsertError) -> Self {
        AppError::Session(error.to_string())
    }
}

impl From<SessionGetError> for AppError {
    fn from(error: SessionGetError) -> Self {
        AppError::Session(error.to_string())
    }
}

impl AppError {
    /// Errors a shopper can recover from: shown as a flash message next to a
    /// redirect instead of an error page.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::UsernameTaken
                | AppError::InvalidCredentials
                | AppError::Unauthenticated
                | AppError::ProductNotFound
                | AppError::EmptyCart
                | AppError::CartChanged
                | AppError::Validation(_)
        )
    }

    pub fn to_http_response(&self) -> HttpResponse {
        let is_dev = cfg!(debug_assertions);

        let to_internal_body = |err_msg: &str| {
            if is_dev {
                format!("Internal server error: {}", err_msg)
            } else {
                "Internal server error".to_string()
            }
        };

        match self {
            // === CONVERSION ERRORS ===
            AppError::Database(error) => {
                log::error!("Database error: {}", error);
                HttpResponse::InternalServerError().body(to_internal_body(&error.to_string()))
            }
            AppError::Migration(error) => {
                log::error!("Migration error: {}", error);
                HttpResponse::InternalServerError().body(to_internal_body(&error.to_string()))
            }
            AppError::Template(error) => {
                log::error!("Template error: {}", error);
                HttpResponse::InternalServerError().body(to_internal_body(&error.to_string()))
            }
            AppError::Session(error) => {
                log::error!("Session error: {}", error);
                HttpResponse::InternalServerError().body(to_internal_body(error))
            }

            // === APPLICATION ERRORS ===
            AppError::Unauthenticated => HttpResponse::SeeOther()
                .insert_header((LOCATION, "/login"))
                .finish(),
            AppError::UsernameTaken | AppError::CartChanged => {
                HttpResponse::Conflict().body(self.to_string())
            }
            AppError::InvalidCredentials => HttpResponse::Unauthorized().body(self.to_string()),
            AppError::ProductNotFound => HttpResponse::NotFound().body(self.to_string()),
            AppError::EmptyCart | AppError::Validation(_) => {
                HttpResponse::BadRequest().body(self.to_string())
            }

            AppError::Internal(error) => {
                log::error!("Internal error: {}", error);
                HttpResponse::InternalServerError().body(to_internal_body(error))
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}
