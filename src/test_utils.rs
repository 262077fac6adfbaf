//! Shared fixtures for database-backed tests
//!
//! A single Postgres container starts lazily on first use and is shared
//! by every test in the binary. Tests isolate themselves with freshly
//! seeded rows instead of truncating shared tables.

use std::time::Duration;

use sqlx::PgPool;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{
    constants::{course_statuses, roles},
    db,
    db::repositories::{CourseRepository, UserRepository},
    models::{Course, CourseModule, User},
};

static POSTGRES: OnceCell<ContainerAsync<GenericImage>> = OnceCell::const_new();
static DATABASE_URL: std::sync::OnceLock<String> = std::sync::OnceLock::new();
static MIGRATIONS: OnceCell<()> = OnceCell::const_new();

/// Get a migrated pool, starting the database on first call
///
/// Each call builds a fresh pool: every `#[tokio::test]` runs on its own
/// runtime, and a pool cached across runtimes leaks permits once the
/// runtime that released a connection has shut down.
pub async fn test_pool() -> PgPool {
    let url = match DATABASE_URL.get() {
        Some(url) => url.clone(),
        None => {
            // TEST_DATABASE_URL points tests at an already-running
            // Postgres; without it a throwaway container is started.
            let url = if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
                url
            } else {
                let container = POSTGRES.get_or_init(start_postgres).await;
                let host = container.get_host().await.expect("container host");
                let port = container
                    .get_host_port_ipv4(5432)
                    .await
                    .expect("mapped Postgres port");

                format!("postgres://learnflek:learnflek@{host}:{port}/learnflek_test")
            };
            DATABASE_URL.get_or_init(|| url).clone()
        }
    };

    let pool = connect_when_ready(&url).await;

    MIGRATIONS
        .get_or_init(|| async {
            db::run_migrations(&pool)
                .await
                .expect("failed to run migrations");
        })
        .await;

    pool
}

async fn start_postgres() -> ContainerAsync<GenericImage> {
    GenericImage::new("postgres", "16-alpine")
        .with_exposed_port(5432.tcp())
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ))
        .with_env_var("POSTGRES_USER", "learnflek")
        .with_env_var("POSTGRES_PASSWORD", "learnflek")
        .with_env_var("POSTGRES_DB", "learnflek_test")
        .start()
        .await
        .expect("failed to start Postgres container")
}

// The postgres image restarts its server once during init, so the first
// ready message can fire before it actually listens. Poll until it does.
async fn connect_when_ready(url: &str) -> PgPool {
    for _ in 0..40 {
        if let Ok(pool) = PgPool::connect(url).await {
            if sqlx::query("SELECT 1").execute(&pool).await.is_ok() {
                return pool;
            }
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
    panic!("test database never became ready");
}

/// Insert a student with a unique email
pub async fn seed_student(pool: &PgPool) -> User {
    let email = format!("student-{}@example.com", Uuid::new_v4());
    UserRepository::create(pool, "Test Student", &email, "not-a-real-hash", roles::USER)
        .await
        .expect("failed to seed student")
}

/// Insert a tutor with a unique email
pub async fn seed_tutor(pool: &PgPool) -> User {
    let email = format!("tutor-{}@example.com", Uuid::new_v4());
    UserRepository::create(pool, "Test Tutor", &email, "not-a-real-hash", roles::TUTOR)
        .await
        .expect("failed to seed tutor")
}

/// Insert a course and push it through admin approval
pub async fn seed_approved_course(pool: &PgPool, tutor_id: &Uuid, price: f64) -> Course {
    let modules = [CourseModule {
        title: "Getting started".to_string(),
        lessons: Vec::new(),
    }];

    let course = CourseRepository::create(
        pool,
        tutor_id,
        "Test Course",
        "A course seeded for database-backed tests",
        price,
        None,
        &modules,
    )
    .await
    .expect("failed to seed course");

    CourseRepository::set_status(pool, &course.id, course_statuses::APPROVED, true)
        .await
        .expect("failed to approve seeded course")
        .expect("seeded course exists")
}
