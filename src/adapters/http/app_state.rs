use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{
        admin::AdminUseCases, admin_auth::AdminAuthUseCases, feedback::FeedbackUseCases,
        order::OrderUseCases,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub order_use_cases: Arc<OrderUseCases>,
    pub feedback_use_cases: Arc<FeedbackUseCases>,
    pub admin_use_cases: Arc<AdminUseCases>,
    pub admin_auth: Arc<AdminAuthUseCases>,
}
