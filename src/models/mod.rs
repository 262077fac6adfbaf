//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod challenge;
pub mod chat;
pub mod course;
pub mod enrollment;
pub mod purchase;
pub mod resume;
pub mod user;

pub use challenge::*;
pub use chat::*;
pub use course::*;
pub use enrollment::*;
pub use purchase::*;
pub use resume::*;
pub use user::*;
