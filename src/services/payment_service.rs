//! Payment service
//!
//! Implements the mock checkout flow: an order is created against a
//! course, then "verified", which completes the purchase and creates the
//! enrollment atomically. No real payment gateway is involved; order and
//! payment identifiers are generated locally.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{CourseRepository, EnrollmentRepository, PurchaseRepository},
    error::{AppError, AppResult},
    models::{Course, Purchase},
    utils::crypto::{generate_order_id, generate_payment_id},
};

/// A purchase joined with its course
#[derive(Debug)]
pub struct PurchaseWithCourse {
    pub purchase: Purchase,
    pub course: Option<Course>,
}

/// Payment service for the mock checkout flow
pub struct PaymentService;

impl PaymentService {
    /// Create a mock payment order for a paid course
    pub async fn create_order(
        pool: &PgPool,
        user_id: &Uuid,
        role: &str,
        course_id: &Uuid,
    ) -> AppResult<Purchase> {
        if role != roles::USER {
            return Err(AppError::Forbidden(
                "Only students can purchase courses".to_string(),
            ));
        }

        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if !course.is_approved {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        if EnrollmentRepository::exists(pool, user_id, course_id).await? {
            return Err(AppError::Conflict(
                "Already enrolled in this course".to_string(),
            ));
        }

        let order_id = generate_order_id();
        let purchase =
            PurchaseRepository::create(pool, user_id, course_id, &order_id, course.price).await?;

        tracing::info!(
            order_id = %purchase.order_id,
            course_id = %course_id,
            amount = purchase.amount,
            "Payment order created"
        );

        Ok(purchase)
    }

    /// Verify a mock payment: complete the purchase and enroll the buyer.
    ///
    /// Both writes happen in one transaction so a crash can never leave a
    /// completed purchase without its enrollment.
    pub async fn verify_payment(
        pool: &PgPool,
        user_id: &Uuid,
        order_id: &str,
    ) -> AppResult<Purchase> {
        let purchase = PurchaseRepository::find_by_order_id(pool, order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        if purchase.user_id != *user_id {
            return Err(AppError::Forbidden(
                "This order belongs to another user".to_string(),
            ));
        }

        if purchase.is_completed() {
            return Err(AppError::Conflict(
                "Payment already processed".to_string(),
            ));
        }

        let payment_id = generate_payment_id();

        let mut tx = pool.begin().await?;
        let completed = PurchaseRepository::complete(&mut *tx, &purchase.id, &payment_id).await?;
        // A unique violation here means the buyer got enrolled through
        // another path after the order was created; report it like any
        // other duplicate enrollment.
        EnrollmentRepository::create(&mut *tx, &purchase.user_id, &purchase.course_id)
            .await
            .map_err(|err| match err {
                AppError::AlreadyExists(_) => {
                    AppError::Conflict("Already enrolled in this course".to_string())
                }
                other => other,
            })?;
        tx.commit().await?;

        tracing::info!(
            order_id = %order_id,
            payment_id = %payment_id,
            course_id = %purchase.course_id,
            "Payment verified, enrollment created"
        );

        Ok(completed)
    }

    /// All purchases, newest first (admin view)
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<PurchaseWithCourse>> {
        let purchases = PurchaseRepository::list_all(pool).await?;
        Self::with_courses(pool, purchases).await
    }

    /// Completed sales across a tutor's courses, newest first
    pub async fn tutor_sales(pool: &PgPool, tutor_id: &Uuid) -> AppResult<Vec<PurchaseWithCourse>> {
        let course_ids = CourseRepository::ids_by_tutor(pool, tutor_id).await?;
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let purchases = PurchaseRepository::list_completed_by_courses(pool, &course_ids).await?;
        Self::with_courses(pool, purchases).await
    }

    async fn with_courses(
        pool: &PgPool,
        purchases: Vec<Purchase>,
    ) -> AppResult<Vec<PurchaseWithCourse>> {
        let mut entries = Vec::with_capacity(purchases.len());
        for purchase in purchases {
            let course = CourseRepository::find_by_id(pool, &purchase.course_id).await?;
            entries.push(PurchaseWithCourse { purchase, course });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[tokio::test]
    async fn test_verify_payment_completes_once_and_enrolls() {
        let pool = test_utils::test_pool().await;
        let tutor = test_utils::seed_tutor(&pool).await;
        let student = test_utils::seed_student(&pool).await;
        let course = test_utils::seed_approved_course(&pool, &tutor.id, 499.0).await;

        let order = PaymentService::create_order(&pool, &student.id, &student.role, &course.id)
            .await
            .unwrap();

        let completed = PaymentService::verify_payment(&pool, &student.id, &order.order_id)
            .await
            .unwrap();
        assert!(completed.is_completed());
        assert!(
            EnrollmentRepository::exists(&pool, &student.id, &course.id)
                .await
                .unwrap()
        );

        // Replaying the verification must neither complete again nor
        // enroll again
        let err = PaymentService::verify_payment(&pool, &student.id, &order.order_id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let enrolled = EnrollmentRepository::count_for_course(&pool, &course.id)
            .await
            .unwrap();
        assert_eq!(enrolled, 1);
    }

    #[tokio::test]
    async fn test_verify_payment_conflicts_when_already_enrolled() {
        let pool = test_utils::test_pool().await;
        let tutor = test_utils::seed_tutor(&pool).await;
        let student = test_utils::seed_student(&pool).await;
        let course = test_utils::seed_approved_course(&pool, &tutor.id, 499.0).await;

        let order = PaymentService::create_order(&pool, &student.id, &student.role, &course.id)
            .await
            .unwrap();

        // The enrollment lands through another path between order
        // creation and verification
        EnrollmentRepository::create(&pool, &student.id, &course.id)
            .await
            .unwrap();

        let err = PaymentService::verify_payment(&pool, &student.id, &order.order_id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // The rolled-back transaction must leave the purchase pending
        let purchase = PurchaseRepository::find_by_order_id(&pool, &order.order_id)
            .await
            .unwrap()
            .unwrap();
        assert!(!purchase.is_completed());
    }
}
