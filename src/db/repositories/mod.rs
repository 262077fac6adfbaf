//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod challenge_repo;
pub mod chat_repo;
pub mod course_repo;
pub mod enrollment_repo;
pub mod purchase_repo;
pub mod resume_repo;
pub mod user_repo;

pub use challenge_repo::ChallengeRepository;
pub use chat_repo::{ChatRepository, DoubtSummary};
pub use course_repo::CourseRepository;
pub use enrollment_repo::EnrollmentRepository;
pub use purchase_repo::PurchaseRepository;
pub use resume_repo::{ResumeRepository, ResumeSections};
pub use user_repo::UserRepository;
