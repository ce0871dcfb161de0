use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::Database(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError, None)
            }
            AppError::InvalidCredentials => {
                error_resp(StatusCode::UNAUTHORIZED, ErrorCode::InvalidCredentials, None)
            }
            AppError::AuthRequired => {
                error_resp(StatusCode::UNAUTHORIZED, ErrorCode::AuthRequired, None)
            }
            AppError::InvalidInput(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, Some(msg))
            }
            AppError::Validation(fields) => {
                let body = serde_json::json!({
                    "code": ErrorCode::ValidationFailed.as_str(),
                    "fields": fields,
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::InvalidTransition { from, to } => error_resp(
                StatusCode::CONFLICT,
                ErrorCode::InvalidTransition,
                Some(format!("cannot move from '{from}' to '{to}'")),
            ),
            AppError::NotFound => {
                error_resp(StatusCode::NOT_FOUND, ErrorCode::NotFound, None)
            }
            AppError::Internal(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError, None)
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "code": code.as_str(), "message": msg }),
        None => serde_json::json!({ "code": code.as_str() }),
    };
    (status, Json(body)).into_response()
}
