use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult, FieldError},
    domain::entities::feedback::{Feedback, FeedbackStatus},
    validators::is_valid_email,
};

#[derive(Debug, Clone, Default)]
pub struct SubmitFeedbackInput {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct FeedbackListFilter {
    pub status: Option<FeedbackStatus>,
    pub search: Option<String>,
    pub page: i64,
    pub per_page: i64,
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackStats {
    pub total: i64,
    pub new: i64,
    pub processed: i64,
}

#[async_trait]
pub trait FeedbackRepo: Send + Sync {
    async fn create(&self, feedback: &NewFeedback) -> AppResult<Feedback>;
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Feedback>>;
    async fn list(&self, filter: &FeedbackListFilter) -> AppResult<(Vec<Feedback>, i64)>;
    async fn update_status(&self, id: i64, status: FeedbackStatus) -> AppResult<Feedback>;
    async fn stats(&self) -> AppResult<FeedbackStats>;
}

#[derive(Clone)]
pub struct FeedbackUseCases {
    repo: Arc<dyn FeedbackRepo>,
}

impl FeedbackUseCases {
    pub fn new(repo: Arc<dyn FeedbackRepo>) -> Self {
        Self { repo }
    }

    /// Persists a contact-form submission. Identical payloads always create
    /// distinct rows.
    #[instrument(skip(self, input))]
    pub async fn submit(&self, input: SubmitFeedbackInput) -> AppResult<Feedback> {
        let mut errors = Vec::new();

        let name = input.name.trim().to_string();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }

        let email = input.email.trim().to_string();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !is_valid_email(&email) {
            errors.push(FieldError::new("email", "Email is not valid"));
        }

        let message = input.message.trim().to_string();
        if message.is_empty() {
            errors.push(FieldError::new("message", "Message is required"));
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let subject = input
            .subject
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        self.repo
            .create(&NewFeedback {
                name,
                email,
                subject,
                message,
            })
            .await
    }
}
