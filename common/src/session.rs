use actix_session::Session;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use futures::future::{Ready, ready};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Res};

pub const SESSION_COOKIE_NAME: &str = "storefront_session";

/// Cookie session key holding the login token.
pub const SESSION_TOKEN_KEY: &str = "session_token";

/// Opaque login token, the key of a server-side session row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn generate() -> Self {
        SessionToken(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        SessionToken(token)
    }
}

/// Identity resolved from a valid session token, stored in the request
/// extensions by the extractor middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: i64,
    pub token: SessionToken,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<CurrentUser>()
                .cloned()
                .ok_or(AppError::Unauthenticated),
        )
    }
}

pub fn token_from(session: &Session) -> Res<Option<SessionToken>> {
    Ok(session.get::<SessionToken>(SESSION_TOKEN_KEY)?)
}

pub fn store_token(session: &Session, token: &SessionToken) -> Res<()> {
    session.insert(SESSION_TOKEN_KEY, token)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn generated_tokens_are_unique() {
        let a = SessionToken::generate();
        let b = SessionToken::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[actix_web::test]
    async fn current_user_requires_extension() {
        let req = TestRequest::default().to_http_request();
        let res = CurrentUser::extract(&req).await;
        assert!(matches!(res, Err(AppError::Unauthenticated)));

        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(CurrentUser {
            user_id: 7,
            token: SessionToken::generate(),
        });
        let user = CurrentUser::extract(&req).await.unwrap();
        assert_eq!(user.user_id, 7);
    }
}
