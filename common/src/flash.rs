//! One-shot messages carried in the session to the next rendered page.

use actix_session::Session;
use actix_web::HttpResponse;

use crate::{
    error::{AppError, Res},
    http::Success,
};

const FLASH_KEY: &str = "_flashes";

pub fn push(session: &Session, message: impl Into<String>) -> Res<()> {
    let mut messages = session
        .get::<Vec<String>>(FLASH_KEY)?
        .unwrap_or_default();
    messages.push(message.into());
    session.insert(FLASH_KEY, messages)?;
    Ok(())
}

/// Drains the pending messages.
pub fn take(session: &Session) -> Res<Vec<String>> {
    Ok(session
        .remove_as::<Vec<String>>(FLASH_KEY)
        .and_then(Result::ok)
        .unwrap_or_default())
}

/// Turns a user-facing error into a flash message and a redirect to
/// `location`. Anything else is propagated.
pub fn recover(session: &Session, err: AppError, location: &str) -> Res<HttpResponse> {
    if !err.is_user_facing() {
        return Err(err);
    }
    log::debug!("Recovering from '{}' with redirect to {}", err, location);
    push(session, err.to_string())?;
    Success::redirect(location)
}
