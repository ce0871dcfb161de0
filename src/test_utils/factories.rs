//! Factories for domain entities used across tests.

use chrono::NaiveDateTime;

use crate::domain::entities::feedback::{Feedback, FeedbackStatus};

pub fn test_datetime() -> NaiveDateTime {
    chrono::DateTime::from_timestamp(1_700_000_000, 0)
        .unwrap()
        .naive_utc()
}

/// Builds a feedback with sensible defaults, then applies `overrides`.
pub fn create_test_feedback(id: i64, overrides: impl FnOnce(&mut Feedback)) -> Feedback {
    let mut feedback = Feedback {
        id,
        name: format!("Customer {id}"),
        email: format!("customer{id}@example.com"),
        subject: None,
        message: format!("Feedback message {id}"),
        status: FeedbackStatus::New,
        created_at: test_datetime() + chrono::Duration::seconds(id),
    };
    overrides(&mut feedback);
    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_applies_overrides() {
        let feedback = create_test_feedback(7, |f| {
            f.status = FeedbackStatus::Processed;
        });
        assert_eq!(feedback.id, 7);
        assert_eq!(feedback.status, FeedbackStatus::Processed);
        assert_eq!(feedback.email, "customer7@example.com");
    }
}
