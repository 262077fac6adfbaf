//! Purchase repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::Purchase};

/// Repository for purchase database operations
pub struct PurchaseRepository;

impl PurchaseRepository {
    /// Record a pending purchase for a freshly created mock order
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        course_id: &Uuid,
        order_id: &str,
        amount: f64,
    ) -> AppResult<Purchase> {
        let purchase = sqlx::query_as::<_, Purchase>(
            r#"
            INSERT INTO purchases (user_id, course_id, order_id, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .bind(order_id)
        .bind(amount)
        .fetch_one(pool)
        .await?;

        Ok(purchase)
    }

    /// Find purchase by its mock order identifier
    pub async fn find_by_order_id(pool: &PgPool, order_id: &str) -> AppResult<Option<Purchase>> {
        let purchase =
            sqlx::query_as::<_, Purchase>(r#"SELECT * FROM purchases WHERE order_id = $1"#)
                .bind(order_id)
                .fetch_optional(pool)
                .await?;

        Ok(purchase)
    }

    /// Mark a purchase completed and attach the mock payment id.
    ///
    /// Executor-generic so the caller can pair it with enrollment creation
    /// in one transaction.
    pub async fn complete<'e, E>(
        executor: E,
        id: &Uuid,
        payment_id: &str,
    ) -> AppResult<Purchase>
    where
        E: PgExecutor<'e>,
    {
        let purchase = sqlx::query_as::<_, Purchase>(
            r#"
            UPDATE purchases
            SET status = 'completed', payment_id = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payment_id)
        .fetch_one(executor)
        .await?;

        Ok(purchase)
    }

    /// All purchases, newest first (admin view)
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Purchase>> {
        let purchases =
            sqlx::query_as::<_, Purchase>(r#"SELECT * FROM purchases ORDER BY created_at DESC"#)
                .fetch_all(pool)
                .await?;

        Ok(purchases)
    }

    /// Completed purchases across a set of courses, newest first
    pub async fn list_completed_by_courses(
        pool: &PgPool,
        course_ids: &[Uuid],
    ) -> AppResult<Vec<Purchase>> {
        let purchases = sqlx::query_as::<_, Purchase>(
            r#"
            SELECT * FROM purchases
            WHERE course_id = ANY($1) AND status = 'completed'
            ORDER BY created_at DESC
            "#,
        )
        .bind(course_ids)
        .fetch_all(pool)
        .await?;

        Ok(purchases)
    }
}
