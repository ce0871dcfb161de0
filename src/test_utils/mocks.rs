//! In-memory mock implementations of the repository traits.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{
        feedback::{Feedback, FeedbackStatus},
        order::{Order, OrderStatus},
    },
    use_cases::{
        admin_auth::CredentialVerifier,
        feedback::{FeedbackListFilter, FeedbackRepo, FeedbackStats, NewFeedback},
        order::{NewOrder, OrderListFilter, OrderRepo, OrderStats, verification_token},
    },
};

fn page_slice<T: Clone>(mut items: Vec<T>, page: i64, per_page: i64) -> (Vec<T>, i64) {
    let total = items.len() as i64;
    let start = ((page - 1) * per_page).max(0) as usize;
    let end = (start + per_page as usize).min(items.len());
    let page_items = if start >= items.len() {
        Vec::new()
    } else {
        items.drain(start..end).collect()
    };
    (page_items, total)
}

fn matches_search(haystacks: &[&str], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

/// In-memory implementation of OrderRepo for testing.
#[derive(Default)]
pub struct InMemoryOrderRepo {
    orders: Mutex<HashMap<i64, Order>>,
    next_id: AtomicI64,
}

impl InMemoryOrderRepo {
    pub fn new() -> Self {
        Self {
            orders: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// All stored orders, for test assertions.
    pub fn get_all(&self) -> Vec<Order> {
        self.orders.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl OrderRepo for InMemoryOrderRepo {
    async fn create(&self, order: &NewOrder) -> AppResult<Order> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now().naive_utc();
        let tx_hash = verification_token(
            id,
            &order.customer_name,
            &order.service_type,
            &order.plan_type,
            now,
        );

        let mut orders = self.orders.lock().unwrap();
        if orders.values().any(|o| o.tx_hash == tx_hash) {
            return Err(AppError::InvalidInput(
                "A record with this value already exists".into(),
            ));
        }

        let stored = Order {
            id,
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            customer_phone: order.customer_phone.clone(),
            service_type: order.service_type.clone(),
            plan_type: order.plan_type.clone(),
            description: order.description.clone(),
            total_amount: order.total_amount,
            status: OrderStatus::Pending,
            tx_hash,
            created_at: now,
            updated_at: now,
        };
        orders.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Order>> {
        Ok(self.orders.lock().unwrap().get(&id).cloned())
    }

    async fn get_by_tx_hash(&self, tx_hash: &str) -> AppResult<Option<Order>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .values()
            .find(|o| o.tx_hash == tx_hash)
            .cloned())
    }

    async fn list(&self, filter: &OrderListFilter) -> AppResult<(Vec<Order>, i64)> {
        let mut matching: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .values()
            .filter(|o| filter.status.is_none_or(|s| o.status == s))
            .filter(|o| {
                filter.search.as_deref().is_none_or(|needle| {
                    matches_search(
                        &[
                            o.customer_name.as_str(),
                            o.customer_email.as_str(),
                            o.service_type.as_str(),
                        ],
                        needle,
                    )
                })
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(page_slice(matching, filter.page, filter.per_page))
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> AppResult<Order> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders.get_mut(&id).ok_or(AppError::NotFound)?;
        order.status = status;
        order.updated_at = Utc::now().naive_utc();
        Ok(order.clone())
    }

    async fn stats(&self) -> AppResult<OrderStats> {
        let orders = self.orders.lock().unwrap();
        let today = Utc::now().date_naive();
        let month_ago = Utc::now().naive_utc() - chrono::Duration::days(30);

        let mut stats = OrderStats::default();
        for order in orders.values() {
            stats.total += 1;
            stats.total_revenue += order.total_amount;
            if order.created_at.date() == today {
                stats.today += 1;
            }
            if order.created_at >= month_ago {
                stats.revenue_month += order.total_amount;
            }
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::InProgress => stats.in_progress += 1,
                OrderStatus::Completed => stats.completed += 1,
            }
        }
        Ok(stats)
    }
}

/// In-memory implementation of FeedbackRepo for testing.
#[derive(Default)]
pub struct InMemoryFeedbackRepo {
    feedbacks: Mutex<HashMap<i64, Feedback>>,
    next_id: AtomicI64,
}

impl InMemoryFeedbackRepo {
    pub fn new() -> Self {
        Self {
            feedbacks: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seed the repo with initial feedbacks for testing.
    pub fn with_feedbacks(feedbacks: Vec<Feedback>) -> Self {
        let next_id = feedbacks.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let map: HashMap<i64, Feedback> = feedbacks.into_iter().map(|f| (f.id, f)).collect();
        Self {
            feedbacks: Mutex::new(map),
            next_id: AtomicI64::new(next_id),
        }
    }

    pub fn get_all(&self) -> Vec<Feedback> {
        self.feedbacks.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl FeedbackRepo for InMemoryFeedbackRepo {
    async fn create(&self, feedback: &NewFeedback) -> AppResult<Feedback> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Feedback {
            id,
            name: feedback.name.clone(),
            email: feedback.email.clone(),
            subject: feedback.subject.clone(),
            message: feedback.message.clone(),
            status: FeedbackStatus::New,
            created_at: Utc::now().naive_utc(),
        };
        self.feedbacks.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Feedback>> {
        Ok(self.feedbacks.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self, filter: &FeedbackListFilter) -> AppResult<(Vec<Feedback>, i64)> {
        let mut matching: Vec<Feedback> = self
            .feedbacks
            .lock()
            .unwrap()
            .values()
            .filter(|f| filter.status.is_none_or(|s| f.status == s))
            .filter(|f| {
                filter.search.as_deref().is_none_or(|needle| {
                    matches_search(
                        &[
                            f.name.as_str(),
                            f.email.as_str(),
                            f.subject.as_deref().unwrap_or(""),
                            f.message.as_str(),
                        ],
                        needle,
                    )
                })
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(page_slice(matching, filter.page, filter.per_page))
    }

    async fn update_status(&self, id: i64, status: FeedbackStatus) -> AppResult<Feedback> {
        let mut feedbacks = self.feedbacks.lock().unwrap();
        let feedback = feedbacks.get_mut(&id).ok_or(AppError::NotFound)?;
        feedback.status = status;
        Ok(feedback.clone())
    }

    async fn stats(&self) -> AppResult<FeedbackStats> {
        let feedbacks = self.feedbacks.lock().unwrap();
        let mut stats = FeedbackStats::default();
        for feedback in feedbacks.values() {
            stats.total += 1;
            match feedback.status {
                FeedbackStatus::New => stats.new += 1,
                FeedbackStatus::Processed => stats.processed += 1,
            }
        }
        Ok(stats)
    }
}

/// Plain-comparison credential verifier for tests.
pub struct StaticCredentialVerifier {
    username: String,
    password: String,
}

impl StaticCredentialVerifier {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> AppResult<bool> {
        Ok(username == self.username && password == self.password)
    }
}
