use std::{future::Future, pin::Pin, sync::Arc};

use actix_session::SessionExt;
use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use common::{error::AppError, flash, http::see_other, session::CurrentUser};
use futures::future::{Ready, ok};

/// Lets requests through only when the extractor resolved a `CurrentUser`.
/// Anyone else is sent to the login page with a flash message.
pub struct AuthMiddleware {}

impl AuthMiddleware {
    pub fn new() -> Self {
        AuthMiddleware {}
    }
}

impl Default for AuthMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Arc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let authenticated = req.extensions().contains::<CurrentUser>();
        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            if authenticated {
                return srv.call(req).await.map(|res| res.map_into_boxed_body());
            }

            log::debug!("Unauthenticated request to {}, redirecting to login", req.path());
            let session = req.get_session();
            flash::push(&session, AppError::Unauthenticated.to_string())?;
            let response = see_other("/login").map_into_boxed_body();
            Ok(req.into_response(response))
        })
    }
}
