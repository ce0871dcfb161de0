use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult, FieldError},
    domain::entities::order::{Order, OrderStatus},
    validators::{is_valid_email, parse_amount},
};

/// Raw order submission as received from the order form.
#[derive(Debug, Clone, Default)]
pub struct SubmitOrderInput {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_type: String,
    pub plan_type: String,
    pub description: Option<String>,
    pub total_amount: String,
}

/// Validated order, ready to persist. Status starts at pending and the
/// verification token is assigned by the store inside the creating
/// transaction.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_type: String,
    pub plan_type: String,
    pub description: Option<String>,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone)]
pub struct OrderListFilter {
    pub status: Option<OrderStatus>,
    pub search: Option<String>,
    pub page: i64,
    pub per_page: i64,
}

#[derive(Debug, Clone, Default)]
pub struct OrderStats {
    pub total: i64,
    pub today: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub total_revenue: Decimal,
    pub revenue_month: Decimal,
}

#[async_trait]
pub trait OrderRepo: Send + Sync {
    async fn create(&self, order: &NewOrder) -> AppResult<Order>;
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Order>>;
    async fn get_by_tx_hash(&self, tx_hash: &str) -> AppResult<Option<Order>>;
    /// Returns the requested page plus the total row count for the filter.
    async fn list(&self, filter: &OrderListFilter) -> AppResult<(Vec<Order>, i64)>;
    async fn update_status(&self, id: i64, status: OrderStatus) -> AppResult<Order>;
    async fn stats(&self) -> AppResult<OrderStats>;
}

/// Content-derived verification token: "0x" + hex(SHA-256) over the order's
/// identity and submission time. Collisions are cryptographically negligible,
/// and the orders table carries a unique constraint as a backstop.
pub fn verification_token(
    id: i64,
    customer_name: &str,
    service_type: &str,
    plan_type: &str,
    created_at: NaiveDateTime,
) -> String {
    let payload = format!(
        "{id}|{customer_name}|{service_type}|{plan_type}|{}",
        created_at.and_utc().timestamp_micros()
    );
    let digest = Sha256::digest(payload.as_bytes());
    format!("0x{}", hex::encode(digest))
}

#[derive(Clone)]
pub struct OrderUseCases {
    repo: Arc<dyn OrderRepo>,
}

impl OrderUseCases {
    pub fn new(repo: Arc<dyn OrderRepo>) -> Self {
        Self { repo }
    }

    /// Validates the submission and persists exactly one order on success.
    /// Validation failures carry field-level detail and create no row.
    #[instrument(skip(self, input))]
    pub async fn submit(&self, input: SubmitOrderInput) -> AppResult<Order> {
        let mut errors = Vec::new();

        let customer_name = input.customer_name.trim().to_string();
        if customer_name.is_empty() {
            errors.push(FieldError::new("customer_name", "Customer name is required"));
        }

        let customer_email = input.customer_email.trim().to_string();
        if customer_email.is_empty() {
            errors.push(FieldError::new("customer_email", "Email is required"));
        } else if !is_valid_email(&customer_email) {
            errors.push(FieldError::new("customer_email", "Email is not valid"));
        }

        let customer_phone = input.customer_phone.trim().to_string();
        if customer_phone.is_empty() {
            errors.push(FieldError::new("customer_phone", "Phone number is required"));
        }

        let service_type = input.service_type.trim().to_string();
        if service_type.is_empty() {
            errors.push(FieldError::new("service_type", "Service is required"));
        }

        let plan_type = input.plan_type.trim().to_string();
        if plan_type.is_empty() {
            errors.push(FieldError::new("plan_type", "Plan is required"));
        }

        let total_amount = match parse_amount(&input.total_amount) {
            Some(amount) => amount,
            None => {
                errors.push(FieldError::new(
                    "total_amount",
                    "Amount must be a non-negative number",
                ));
                Decimal::ZERO
            }
        };

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let description = input
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        self.repo
            .create(&NewOrder {
                customer_name,
                customer_email,
                customer_phone,
                service_type,
                plan_type,
                description,
                total_amount,
            })
            .await
    }

    /// Exact, case-sensitive token lookup. Pure read, no side effects.
    #[instrument(skip(self))]
    pub async fn verify(&self, token: &str) -> AppResult<Order> {
        self.repo
            .get_by_tx_hash(token)
            .await?
            .ok_or(AppError::NotFound)
    }
}
