pub mod admin;
pub mod catalog;
pub mod contact;
pub mod order;
pub mod session;

use axum::Router;
use axum_extra::extract::cookie::CookieJar;

use crate::{adapters::http::app_state::AppState, language::UserLanguage};

pub const LANG_COOKIE: &str = "lang";

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(order::router())
        .merge(contact::router())
        .merge(session::router())
        .nest("/catalog", catalog::router())
        .nest("/admin", admin::router())
}

/// Language preference from the session cookie, defaulting to Vietnamese.
pub fn request_language(jar: &CookieJar) -> UserLanguage {
    UserLanguage::from_raw(jar.get(LANG_COOKIE).map(|c| c.value()))
}
