//! Shared test helpers: in-memory repositories, entity factories and a
//! fully wired in-process test server.

mod factories;
mod mocks;

pub use factories::*;
pub use mocks::*;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum_test::TestServer;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    infra::{app::create_app, config::AppConfig},
    use_cases::{
        admin::AdminUseCases, admin_auth::AdminAuthUseCases, feedback::FeedbackUseCases,
        order::OrderUseCases,
    },
};

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        database_url: "postgres://unused".to_string(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        jwt_secret: SecretString::new("test-jwt-secret".into()),
        session_ttl: time::Duration::minutes(60),
        admin_username: "admin".to_string(),
        admin_password_hash: SecretString::new("unused".into()),
    }
}

/// App state backed entirely by in-memory repositories, with the admin
/// credentials fixed to admin / test-password.
pub fn test_app_state() -> AppState {
    let config = Arc::new(test_config());
    let order_repo = Arc::new(InMemoryOrderRepo::new());
    let feedback_repo = Arc::new(InMemoryFeedbackRepo::new());
    let verifier = Arc::new(StaticCredentialVerifier::new("admin", "test-password"));

    let admin_auth = Arc::new(AdminAuthUseCases::new(
        verifier,
        config.jwt_secret.clone(),
        config.session_ttl,
    ));

    AppState {
        config,
        order_use_cases: Arc::new(OrderUseCases::new(order_repo.clone())),
        feedback_use_cases: Arc::new(FeedbackUseCases::new(feedback_repo.clone())),
        admin_use_cases: Arc::new(AdminUseCases::new(order_repo, feedback_repo)),
        admin_auth,
    }
}

/// In-process server over the full router, with cookie persistence so a
/// login carries over to later requests.
pub fn build_test_server() -> TestServer {
    let mut server = TestServer::new(create_app(test_app_state())).expect("test server");
    server.save_cookies();
    server
}
