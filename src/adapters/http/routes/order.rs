use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    use_cases::order::SubmitOrderInput,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", post(submit_order))
        .route("/verify/{token}", get(verify_order))
}

#[derive(Deserialize)]
struct SubmitOrderRequest {
    #[serde(default)]
    customer_name: String,
    #[serde(default)]
    customer_email: String,
    #[serde(default)]
    customer_phone: String,
    #[serde(default)]
    service_type: String,
    #[serde(default)]
    plan_type: String,
    description: Option<String>,
    /// Submitted as text so malformed amounts surface as a field error
    /// instead of a body-level parse failure.
    #[serde(default)]
    total_amount: String,
}

async fn submit_order(
    State(app_state): State<AppState>,
    Json(req): Json<SubmitOrderRequest>,
) -> AppResult<impl IntoResponse> {
    let order = app_state
        .order_use_cases
        .submit(SubmitOrderInput {
            customer_name: req.customer_name,
            customer_email: req.customer_email,
            customer_phone: req.customer_phone,
            service_type: req.service_type,
            plan_type: req.plan_type,
            description: req.description,
            total_amount: req.total_amount,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

async fn verify_order(
    State(app_state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<impl IntoResponse> {
    let order = app_state.order_use_cases.verify(&token).await?;
    Ok(Json(order))
}
