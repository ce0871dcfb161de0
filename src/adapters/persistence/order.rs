use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::order::{Order, OrderStatus},
    use_cases::order::{NewOrder, OrderListFilter, OrderRepo, OrderStats, verification_token},
};

const ORDER_COLUMNS: &str = "id, customer_name, customer_email, customer_phone, service_type, \
     plan_type, description, total_amount, status, tx_hash, created_at, updated_at";

/// A status value outside the known set means the row is corrupt; surface
/// it instead of coercing to a default.
fn status_from_db(raw: &str) -> AppResult<OrderStatus> {
    OrderStatus::parse(raw)
        .ok_or_else(|| AppError::Database(format!("orders.status holds unknown value '{raw}'")))
}

fn row_to_order(row: sqlx::postgres::PgRow) -> AppResult<Order> {
    Ok(Order {
        id: row.get("id"),
        customer_name: row.get("customer_name"),
        customer_email: row.get("customer_email"),
        customer_phone: row.get("customer_phone"),
        service_type: row.get("service_type"),
        plan_type: row.get("plan_type"),
        description: row.get("description"),
        total_amount: row.get("total_amount"),
        status: status_from_db(row.get("status"))?,
        tx_hash: row.get("tx_hash"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

#[async_trait]
impl OrderRepo for PostgresPersistence {
    /// Insert and token assignment run in one transaction, so a failure at
    /// any point leaves no partial row behind.
    async fn create(&self, order: &NewOrder) -> AppResult<Order> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        let row = sqlx::query(
            r#"
                INSERT INTO orders
                    (customer_name, customer_email, customer_phone, service_type, plan_type, description, total_amount)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, created_at
            "#,
        )
        .bind(&order.customer_name)
        .bind(&order.customer_email)
        .bind(&order.customer_phone)
        .bind(&order.service_type)
        .bind(&order.plan_type)
        .bind(&order.description)
        .bind(order.total_amount)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::from)?;

        let id: i64 = row.get("id");
        let created_at: chrono::NaiveDateTime = row.get("created_at");
        let token = verification_token(
            id,
            &order.customer_name,
            &order.service_type,
            &order.plan_type,
            created_at,
        );

        let row = sqlx::query(&format!(
            "UPDATE orders SET tx_hash = $2 WHERE id = $1 RETURNING {ORDER_COLUMNS}"
        ))
        .bind(id)
        .bind(&token)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::from)?;

        tx.commit().await.map_err(AppError::from)?;
        row_to_order(row)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Order>> {
        let row = sqlx::query(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;
        row.map(row_to_order).transpose()
    }

    async fn get_by_tx_hash(&self, tx_hash: &str) -> AppResult<Option<Order>> {
        let row = sqlx::query(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE tx_hash = $1"
        ))
        .bind(tx_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;
        row.map(row_to_order).transpose()
    }

    async fn list(&self, filter: &OrderListFilter) -> AppResult<(Vec<Order>, i64)> {
        let status = filter.status.map(|s| s.as_str());
        let search = filter.search.as_deref();
        let offset = (filter.page - 1) * filter.per_page;

        let rows = sqlx::query(&format!(
            r#"
                SELECT {ORDER_COLUMNS} FROM orders
                WHERE ($1::text IS NULL OR status = $1)
                  AND ($2::text IS NULL
                       OR customer_name ILIKE '%' || $2 || '%'
                       OR customer_email ILIKE '%' || $2 || '%'
                       OR service_type ILIKE '%' || $2 || '%')
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
                SELECT COUNT(*) AS total FROM orders
                WHERE ($1::text IS NULL OR status = $1)
                  AND ($2::text IS NULL
                       OR customer_name ILIKE '%' || $2 || '%'
                       OR customer_email ILIKE '%' || $2 || '%'
                       OR service_type ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(status)
        .bind(search)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok((
            rows.into_iter()
                .map(row_to_order)
                .collect::<AppResult<Vec<_>>>()?,
            total_row.get("total"),
        ))
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> AppResult<Order> {
        let row = sqlx::query(&format!(
            r#"
                UPDATE orders
                SET status = $2, updated_at = CURRENT_TIMESTAMP
                WHERE id = $1
                RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        row_to_order(row)
    }

    async fn stats(&self) -> AppResult<OrderStats> {
        let row = sqlx::query(
            r#"
                SELECT
                    COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE created_at >= CURRENT_DATE) AS today,
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                    COUNT(*) FILTER (WHERE status = 'in_progress') AS in_progress,
                    COUNT(*) FILTER (WHERE status = 'completed') AS completed,
                    COALESCE(SUM(total_amount), 0) AS total_revenue,
                    COALESCE(SUM(total_amount) FILTER (
                        WHERE created_at >= CURRENT_DATE - INTERVAL '30 days'
                    ), 0) AS revenue_month
                FROM orders
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(OrderStats {
            total: row.get("total"),
            today: row.get("today"),
            pending: row.get("pending"),
            in_progress: row.get("in_progress"),
            completed: row.get("completed"),
            total_revenue: row.get("total_revenue"),
            revenue_month: row.get("revenue_month"),
        })
    }
}
