use std::{future::Future, pin::Pin, sync::Arc};

use actix_session::SessionExt;
use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use futures::future::{Ready, ok};
use sqlx::SqlitePool;

use common::{
    error::AppError,
    session::{self, CurrentUser, SESSION_TOKEN_KEY},
};

pub struct ExtractionMiddleware {}

impl ExtractionMiddleware {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ExtractionMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for ExtractionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = ExtractionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(ExtractionMiddlewareService {
            service: Arc::new(service),
        })
    }
}

pub struct ExtractionMiddlewareService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for ExtractionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let pool = req.app_data::<web::Data<SqlitePool>>().cloned();
        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            let session = req.get_session();
            let token = session::token_from(&session)?;

            if let Some(token) = token {
                let pool = pool.ok_or_else(|| {
                    AppError::Internal("Database pool is not registered".to_string())
                })?;

                match api_auth::services::auth::current_user(&pool, &token).await? {
                    Some(user_id) => {
                        req.extensions_mut().insert(CurrentUser { user_id, token });
                    }
                    None => {
                        // token is unknown or expired, forget it
                        log::debug!("Dropping stale session token");
                        session.remove(SESSION_TOKEN_KEY);
                    }
                }
            }

            srv.call(req).await.map(|res| res.map_into_boxed_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
    use actix_web::{App, HttpResponse, cookie::Key, get, test};
    use common::session::SessionToken;

    use super::*;

    #[get("/whoami")]
    async fn whoami(user: Option<CurrentUser>, session: Session) -> HttpResponse {
        let stored = session::token_from(&session).ok().flatten().is_some();
        let who = user.map_or("nobody".to_string(), |u| u.user_id.to_string());
        HttpResponse::Ok().body(format!("{} {}", who, stored))
    }

    #[get("/plant/{token}")]
    async fn plant(path: web::Path<String>, session: Session) -> HttpResponse {
        let token = SessionToken::from(path.into_inner());
        session::store_token(&session, &token).unwrap();
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn stale_token_is_dropped() {
        let pool = db::setup_in_memory().await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .service(whoami)
                .service(plant)
                .wrap(ExtractionMiddleware::new())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                        .cookie_secure(false)
                        .build(),
                ),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/plant/bogus").to_request()).await;
        let cookie = res.response().cookies().next().unwrap().into_owned();

        let req = test::TestRequest::get().uri("/whoami").cookie(cookie).to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "nobody false");
    }
}
