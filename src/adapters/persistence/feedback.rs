use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::feedback::{Feedback, FeedbackStatus},
    use_cases::feedback::{FeedbackListFilter, FeedbackRepo, FeedbackStats, NewFeedback},
};

const FEEDBACK_COLUMNS: &str = "id, name, email, subject, message, status, created_at";

/// A status value outside the known set means the row is corrupt; surface
/// it instead of coercing to a default.
fn status_from_db(raw: &str) -> AppResult<FeedbackStatus> {
    FeedbackStatus::parse(raw)
        .ok_or_else(|| AppError::Database(format!("feedbacks.status holds unknown value '{raw}'")))
}

fn row_to_feedback(row: sqlx::postgres::PgRow) -> AppResult<Feedback> {
    Ok(Feedback {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        subject: row.get("subject"),
        message: row.get("message"),
        status: status_from_db(row.get("status"))?,
        created_at: row.get("created_at"),
    })
}

#[async_trait]
impl FeedbackRepo for PostgresPersistence {
    async fn create(&self, feedback: &NewFeedback) -> AppResult<Feedback> {
        let row = sqlx::query(&format!(
            r#"
                INSERT INTO feedbacks (name, email, subject, message)
                VALUES ($1, $2, $3, $4)
                RETURNING {FEEDBACK_COLUMNS}
            "#
        ))
        .bind(&feedback.name)
        .bind(&feedback.email)
        .bind(&feedback.subject)
        .bind(&feedback.message)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        row_to_feedback(row)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Feedback>> {
        let row = sqlx::query(&format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedbacks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;
        row.map(row_to_feedback).transpose()
    }

    async fn list(&self, filter: &FeedbackListFilter) -> AppResult<(Vec<Feedback>, i64)> {
        let status = filter.status.map(|s| s.as_str());
        let search = filter.search.as_deref();
        let offset = (filter.page - 1) * filter.per_page;

        let rows = sqlx::query(&format!(
            r#"
                SELECT {FEEDBACK_COLUMNS} FROM feedbacks
                WHERE ($1::text IS NULL OR status = $1)
                  AND ($2::text IS NULL
                       OR name ILIKE '%' || $2 || '%'
                       OR email ILIKE '%' || $2 || '%'
                       OR subject ILIKE '%' || $2 || '%'
                       OR message ILIKE '%' || $2 || '%')
                ORDER BY created_at DESC, id DESC
                LIMIT $3 OFFSET $4
            "#
        ))
        .bind(status)
        .bind(search)
        .bind(filter.per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        let total_row = sqlx::query(
            r#"
                SELECT COUNT(*) AS total FROM feedbacks
                WHERE ($1::text IS NULL OR status = $1)
                  AND ($2::text IS NULL
                       OR name ILIKE '%' || $2 || '%'
                       OR email ILIKE '%' || $2 || '%'
                       OR subject ILIKE '%' || $2 || '%'
                       OR message ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(status)
        .bind(search)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok((
            rows.into_iter()
                .map(row_to_feedback)
                .collect::<AppResult<Vec<_>>>()?,
            total_row.get("total"),
        ))
    }

    async fn update_status(&self, id: i64, status: FeedbackStatus) -> AppResult<Feedback> {
        let row = sqlx::query(&format!(
            r#"
                UPDATE feedbacks
                SET status = $2
                WHERE id = $1
                RETURNING {FEEDBACK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        row_to_feedback(row)
    }

    async fn stats(&self) -> AppResult<FeedbackStats> {
        let row = sqlx::query(
            r#"
                SELECT
                    COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE status = 'new') AS new_count,
                    COUNT(*) FILTER (WHERE status = 'processed') AS processed
                FROM feedbacks
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(FeedbackStats {
            total: row.get("total"),
            new: row.get("new_count"),
            processed: row.get("processed"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupted_status_surfaces_as_a_database_error() {
        assert_eq!(status_from_db("new").unwrap(), FeedbackStatus::New);
        assert_eq!(
            status_from_db("processed").unwrap(),
            FeedbackStatus::Processed
        );
        assert!(matches!(
            status_from_db("archived").unwrap_err(),
            AppError::Database(_)
        ));
    }
}
