use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{http::app_state::AppState, persistence::PostgresPersistence},
    infra::{config::AppConfig, credentials::ArgonCredentialVerifier, db::init_db},
    use_cases::{
        admin::AdminUseCases,
        admin_auth::{AdminAuthUseCases, CredentialVerifier},
        feedback::{FeedbackRepo, FeedbackUseCases},
        order::{OrderRepo, OrderUseCases},
    },
};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc = Arc::new(PostgresPersistence::new(init_db(&config.database_url).await?));

    let order_repo = postgres_arc.clone() as Arc<dyn OrderRepo>;
    let feedback_repo = postgres_arc.clone() as Arc<dyn FeedbackRepo>;

    let verifier = Arc::new(ArgonCredentialVerifier::new(
        config.admin_username.clone(),
        config.admin_password_hash.clone(),
    )) as Arc<dyn CredentialVerifier>;

    let admin_auth = AdminAuthUseCases::new(
        verifier,
        config.jwt_secret.clone(),
        config.session_ttl,
    );

    Ok(AppState {
        config: Arc::new(config),
        order_use_cases: Arc::new(OrderUseCases::new(order_repo.clone())),
        feedback_use_cases: Arc::new(FeedbackUseCases::new(feedback_repo.clone())),
        admin_use_cases: Arc::new(AdminUseCases::new(order_repo, feedback_repo)),
        admin_auth: Arc::new(admin_auth),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "studyorder=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
