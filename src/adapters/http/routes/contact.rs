use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use serde::Deserialize;

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    use_cases::feedback::SubmitFeedbackInput,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(submit_feedback))
}

#[derive(Deserialize)]
struct ContactRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    subject: Option<String>,
    #[serde(default)]
    message: String,
}

async fn submit_feedback(
    State(app_state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> AppResult<impl IntoResponse> {
    let feedback = app_state
        .feedback_use_cases
        .submit(SubmitFeedbackInput {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(feedback)))
}
