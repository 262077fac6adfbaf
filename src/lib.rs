//! LearnFlek - E-Learning Marketplace Backend
//!
//! This library provides the core functionality for the LearnFlek
//! platform, a course marketplace where tutors author content, students
//! enroll and practice, and admins gate everything through review queues.
//!
//! # Features
//!
//! - Tutor portfolios and course authoring with admin approval
//! - Enrollment with a mock checkout flow for paid courses
//! - Coding challenges graded by an external execution service, with
//!   XP rewards and leveling
//! - Real-time doubt chat between enrolled students and tutors
//! - Structured resume builder
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod relay;
pub mod services;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
