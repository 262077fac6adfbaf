//! Business logic services
//!
//! Services contain the application's business logic, sitting between
//! handlers and repositories.

pub mod admin_service;
pub mod auth_service;
pub mod challenge_service;
pub mod chat_service;
pub mod course_service;
pub mod enrollment_service;
pub mod payment_service;
pub mod resume_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use auth_service::{AuthService, Claims};
pub use challenge_service::ChallengeService;
pub use chat_service::ChatService;
pub use course_service::CourseService;
pub use enrollment_service::EnrollmentService;
pub use payment_service::PaymentService;
pub use resume_service::ResumeService;
pub use user_service::UserService;
