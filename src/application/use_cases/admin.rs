use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    catalog,
    domain::entities::{
        feedback::{Feedback, FeedbackStatus},
        order::{Order, OrderStatus},
    },
    language::UserLanguage,
    use_cases::{
        Page,
        feedback::{FeedbackListFilter, FeedbackRepo},
        order::{OrderListFilter, OrderRepo},
    },
};

pub const PER_PAGE: i64 = 20;

/// An order enriched with catalog display names, resolved at read time.
/// Orders referencing retired catalog keys list with `None` names.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub service_name: Option<String>,
    pub plan_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_orders: i64,
    pub orders_today: i64,
    pub pending_orders: i64,
    pub in_progress_orders: i64,
    pub completed_orders: i64,
    pub total_feedbacks: i64,
    pub new_feedbacks: i64,
    pub processed_feedbacks: i64,
    pub total_revenue: Decimal,
    pub revenue_month: Decimal,
    pub conversion_rate: f64,
}

#[derive(Clone)]
pub struct AdminUseCases {
    orders: Arc<dyn OrderRepo>,
    feedbacks: Arc<dyn FeedbackRepo>,
}

impl AdminUseCases {
    pub fn new(orders: Arc<dyn OrderRepo>, feedbacks: Arc<dyn FeedbackRepo>) -> Self {
        Self { orders, feedbacks }
    }

    /// Lists orders newest-first with status filter, substring search and
    /// fixed-size pagination. Unknown status values widen to "all", matching
    /// the historical admin behavior.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        status_filter: &str,
        search: &str,
        page: i64,
        lang: UserLanguage,
    ) -> AppResult<Page<OrderView>> {
        let filter = OrderListFilter {
            status: OrderStatus::parse(status_filter),
            search: non_empty(search),
            page: page.max(1),
            per_page: PER_PAGE,
        };
        let (orders, total) = self.orders.list(&filter).await?;
        let items = orders
            .into_iter()
            .map(|order| order_view(order, lang))
            .collect();
        Ok(Page::new(items, filter.page, PER_PAGE, total))
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: i64, lang: UserLanguage) -> AppResult<OrderView> {
        let order = self.orders.get_by_id(id).await?.ok_or(AppError::NotFound)?;
        Ok(order_view(order, lang))
    }

    /// Applies a forward-only status change. Unknown status strings are
    /// invalid input; transitions outside the chain are rejected without
    /// touching the row. Re-applying the current status succeeds and leaves
    /// the row untouched, including updated_at.
    #[instrument(skip(self))]
    pub async fn update_order_status(&self, id: i64, raw_status: &str) -> AppResult<Order> {
        let next = OrderStatus::parse(raw_status)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown order status '{raw_status}'")))?;
        let order = self.orders.get_by_id(id).await?.ok_or(AppError::NotFound)?;

        if !order.status.can_advance_to(next) {
            return Err(AppError::InvalidTransition {
                from: order.status.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }
        if order.status == next {
            return Ok(order);
        }

        self.orders.update_status(id, next).await
    }

    #[instrument(skip(self))]
    pub async fn list_feedbacks(
        &self,
        status_filter: &str,
        search: &str,
        page: i64,
    ) -> AppResult<Page<Feedback>> {
        let filter = FeedbackListFilter {
            status: FeedbackStatus::parse(status_filter),
            search: non_empty(search),
            page: page.max(1),
            per_page: PER_PAGE,
        };
        let (items, total) = self.feedbacks.list(&filter).await?;
        Ok(Page::new(items, filter.page, PER_PAGE, total))
    }

    #[instrument(skip(self))]
    pub async fn get_feedback(&self, id: i64) -> AppResult<Feedback> {
        self.feedbacks
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    #[instrument(skip(self))]
    pub async fn update_feedback_status(&self, id: i64, raw_status: &str) -> AppResult<Feedback> {
        let next = FeedbackStatus::parse(raw_status).ok_or_else(|| {
            AppError::InvalidInput(format!("unknown feedback status '{raw_status}'"))
        })?;
        let feedback = self
            .feedbacks
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        if !feedback.status.can_advance_to(next) {
            return Err(AppError::InvalidTransition {
                from: feedback.status.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }
        if feedback.status == next {
            return Ok(feedback);
        }

        self.feedbacks.update_status(id, next).await
    }

    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let orders = self.orders.stats().await?;
        let feedbacks = self.feedbacks.stats().await?;

        let conversion_rate = if orders.total > 0 {
            (orders.completed as f64 / orders.total as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };

        Ok(DashboardStats {
            total_orders: orders.total,
            orders_today: orders.today,
            pending_orders: orders.pending,
            in_progress_orders: orders.in_progress,
            completed_orders: orders.completed,
            total_feedbacks: feedbacks.total,
            new_feedbacks: feedbacks.new,
            processed_feedbacks: feedbacks.processed,
            total_revenue: orders.total_revenue,
            revenue_month: orders.revenue_month,
            conversion_rate,
        })
    }
}

fn order_view(order: Order, lang: UserLanguage) -> OrderView {
    let service_name = catalog::get_service(&order.service_type)
        .map(|s| s.name.for_lang(lang).to_string());
    let plan_name = catalog::get_plan(&order.plan_type).map(|p| p.name.for_lang(lang).to_string());
    OrderView {
        order,
        service_name,
        plan_name,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
