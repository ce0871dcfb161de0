use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::{
    adapters::http::{app_state::AppState, routes::request_language},
    app_error::{AppError, AppResult},
};

pub const SESSION_COOKIE: &str = "admin_session";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/orders", get(list_orders))
        .route("/orders/{order_id}", get(order_detail))
        .route("/orders/{order_id}/status", post(update_order_status))
        .route("/feedbacks", get(list_feedbacks))
        .route("/feedbacks/{feedback_id}", get(feedback_detail))
        .route("/feedbacks/{feedback_id}/status", post(update_feedback_status))
        .route("/stats", get(stats))
}

fn require_admin(jar: &CookieJar, app_state: &AppState) -> AppResult<()> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Err(AppError::AuthRequired);
    };
    app_state.admin_auth.authorize(cookie.value())?;
    Ok(())
}

#[derive(Deserialize)]
struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let token = app_state
        .admin_auth
        .login(&req.username, &req.password)
        .await?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(app_state.admin_auth.session_ttl())
        .build();

    Ok((
        jar.add(cookie),
        Json(serde_json::json!({ "username": req.username })),
    ))
}

async fn logout(jar: CookieJar) -> impl IntoResponse {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(0))
        .build();

    (jar.add(cookie), StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default = "default_status")]
    status: String,
    #[serde(default)]
    search: String,
    #[serde(default = "default_page")]
    page: i64,
}

fn default_status() -> String {
    "all".to_string()
}

fn default_page() -> i64 {
    1
}

async fn list_orders(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<ListQuery>,
) -> AppResult<impl IntoResponse> {
    require_admin(&jar, &app_state)?;
    let lang = request_language(&jar);
    let page = app_state
        .admin_use_cases
        .list_orders(&query.status, &query.search, query.page, lang)
        .await?;
    Ok(Json(page))
}

async fn order_detail(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(order_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    require_admin(&jar, &app_state)?;
    let lang = request_language(&jar);
    let order = app_state.admin_use_cases.get_order(order_id, lang).await?;
    Ok(Json(order))
}

#[derive(Deserialize)]
struct StatusRequest {
    #[serde(default)]
    status: String,
}

async fn update_order_status(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(order_id): Path<i64>,
    Json(req): Json<StatusRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&jar, &app_state)?;
    let order = app_state
        .admin_use_cases
        .update_order_status(order_id, &req.status)
        .await?;
    Ok(Json(order))
}

async fn list_feedbacks(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<ListQuery>,
) -> AppResult<impl IntoResponse> {
    require_admin(&jar, &app_state)?;
    let page = app_state
        .admin_use_cases
        .list_feedbacks(&query.status, &query.search, query.page)
        .await?;
    Ok(Json(page))
}

async fn feedback_detail(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(feedback_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    require_admin(&jar, &app_state)?;
    let feedback = app_state.admin_use_cases.get_feedback(feedback_id).await?;
    Ok(Json(feedback))
}

async fn update_feedback_status(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(feedback_id): Path<i64>,
    Json(req): Json<StatusRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&jar, &app_state)?;
    let feedback = app_state
        .admin_use_cases
        .update_feedback_status(feedback_id, &req.status)
        .await?;
    Ok(Json(feedback))
}

async fn stats(State(app_state): State<AppState>, jar: CookieJar) -> AppResult<impl IntoResponse> {
    require_admin(&jar, &app_state)?;
    let stats = app_state.admin_use_cases.dashboard().await?;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::test_utils::build_test_server;

    async fn login(server: &TestServer) {
        let res = server
            .post("/api/admin/login")
            .json(&json!({ "username": "admin", "password": "test-password" }))
            .await;
        res.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn admin_routes_require_a_session() {
        let server = build_test_server();

        let res = server.get("/api/admin/orders").await;
        res.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = res.json();
        assert_eq!(body["code"], "AUTH_REQUIRED");
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let server = build_test_server();

        let res = server
            .post("/api/admin/login")
            .json(&json!({ "username": "admin", "password": "wrong" }))
            .await;
        res.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn logged_in_admin_can_list_and_mutate() {
        let server = build_test_server();
        login(&server).await;

        // Create an order through the public API first.
        let created = server
            .post("/api/orders")
            .json(&json!({
                "customer_name": "Nguyen A",
                "customer_email": "nguyen.a@example.com",
                "customer_phone": "0901234567",
                "service_type": "schedule",
                "plan_type": "basic",
                "total_amount": "99000"
            }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let order: Value = created.json();

        let listed = server.get("/api/admin/orders").await;
        listed.assert_status(StatusCode::OK);
        let page: Value = listed.json();
        assert_eq!(page["total"], 1);
        assert_eq!(page["items"][0]["service_name"], "Xếp lịch học tập");

        let updated = server
            .post(&format!("/api/admin/orders/{}/status", order["id"]))
            .json(&json!({ "status": "in_progress" }))
            .await;
        updated.assert_status(StatusCode::OK);
        let updated: Value = updated.json();
        assert_eq!(updated["status"], "in_progress");

        // Skipping the chain is a conflict.
        let conflict = server
            .post(&format!("/api/admin/orders/{}/status", order["id"]))
            .json(&json!({ "status": "pending" }))
            .await;
        conflict.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let server = build_test_server();
        login(&server).await;

        let res = server.post("/api/admin/logout").await;
        res.assert_status(StatusCode::NO_CONTENT);

        let res = server.get("/api/admin/stats").await;
        res.assert_status(StatusCode::UNAUTHORIZED);
    }
}
