use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::{
    adapters::http::{app_state::AppState, routes::LANG_COOKIE},
    app_error::AppResult,
    language::UserLanguage,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/session/language", post(set_language))
}

#[derive(Deserialize)]
struct SetLanguageRequest {
    #[serde(default)]
    language: String,
}

/// Stores the language preference in the session cookie. Unknown values
/// fall back to the Vietnamese default rather than erroring.
async fn set_language(
    State(_): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SetLanguageRequest>,
) -> AppResult<impl IntoResponse> {
    let lang = UserLanguage::from_raw(Some(&req.language));

    let cookie = Cookie::build((LANG_COOKIE, lang.as_str()))
        .same_site(SameSite::Lax)
        .path("/")
        .build();

    Ok((
        jar.add(cookie),
        Json(serde_json::json!({ "language": lang.as_str() })),
    ))
}
