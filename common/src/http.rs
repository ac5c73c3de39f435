use actix_web::{
    HttpResponse,
    http::header::{ContentType, LOCATION},
};

use super::error::Res;

pub struct Success;
impl Success {
    pub fn html(body: String) -> Res<HttpResponse> {
        Result::Ok(
            HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(body),
        )
    }
    pub fn redirect(location: &str) -> Res<HttpResponse> {
        Result::Ok(see_other(location))
    }
}

/// `303 See Other`, so the browser follows a form post with a GET.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}
