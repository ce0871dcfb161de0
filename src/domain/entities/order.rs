use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "in_progress" => Some(OrderStatus::InProgress),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    /// Forward-only lifecycle: pending -> in_progress -> completed.
    /// Re-applying the current status is accepted as a no-op.
    pub fn can_advance_to(self, next: Self) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Pending)
                | (Pending, InProgress)
                | (InProgress, InProgress)
                | (InProgress, Completed)
                | (Completed, Completed)
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_type: String,
    pub plan_type: String,
    pub description: Option<String>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    /// Verification token: "0x" + hex(SHA-256), unique, immutable once set.
    pub tx_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
