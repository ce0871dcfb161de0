use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    New,
    Processed,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::New => "new",
            FeedbackStatus::Processed => "processed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(FeedbackStatus::New),
            "processed" => Some(FeedbackStatus::Processed),
            _ => None,
        }
    }

    /// A feedback is marked processed exactly once; re-marking is a no-op
    /// and moving back to new is rejected.
    pub fn can_advance_to(self, next: Self) -> bool {
        !(self == FeedbackStatus::Processed && next == FeedbackStatus::New)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: FeedbackStatus,
    pub created_at: NaiveDateTime,
}
