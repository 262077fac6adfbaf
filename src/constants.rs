//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Display name minimum length
pub const MIN_NAME_LENGTH: u64 = 2;

/// Display name maximum length
pub const MAX_NAME_LENGTH: u64 = 100;

// =============================================================================
// JUDGE DEFAULTS
// =============================================================================

/// Default judge service endpoint (expects a judge0-compatible API)
pub const DEFAULT_JUDGE_URL: &str = "https://ce.judge0.com";

/// Default judge request timeout in seconds
pub const DEFAULT_JUDGE_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Language identifiers accepted in challenge submissions
pub mod languages {
    pub const JAVASCRIPT: &str = "javascript";
    pub const PYTHON: &str = "python";
    pub const JAVA: &str = "java";
    pub const CPP: &str = "cpp";

    /// All supported language identifiers
    pub const ALL: &[&str] = &[JAVASCRIPT, PYTHON, JAVA, CPP];
}

// =============================================================================
// GAMIFICATION
// =============================================================================

/// XP awarded for a fully passing challenge submission
pub const XP_REWARD_PER_CHALLENGE: i32 = 50;

/// XP needed to advance past a level, per level (level 1: 100, level 2: 200)
pub const XP_PER_LEVEL: i32 = 100;

/// Number of users shown on the leaderboard
pub const LEADERBOARD_SIZE: i64 = 10;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const TUTOR: &str = "tutor";
    pub const USER: &str = "user";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, TUTOR, USER];

    /// Roles selectable at registration
    pub const SELF_REGISTER: &[&str] = &[USER, TUTOR];
}

// =============================================================================
// APPROVAL STATUSES
// =============================================================================

/// Course review statuses
pub mod course_statuses {
    pub const PENDING: &str = "pending";
    pub const APPROVED: &str = "approved";
    pub const REJECTED: &str = "rejected";

    /// Statuses an admin decision may assign
    pub const DECISIONS: &[&str] = &[APPROVED, REJECTED];
}

/// Tutor portfolio review statuses
pub mod tutor_statuses {
    pub const NOT_SUBMITTED: &str = "not_submitted";
    pub const PENDING: &str = "pending";
    pub const APPROVED: &str = "approved";
    pub const REJECTED: &str = "rejected";

    /// Statuses an admin decision may assign
    pub const DECISIONS: &[&str] = &[APPROVED, REJECTED];
}

/// Purchase statuses
pub mod purchase_statuses {
    pub const PENDING: &str = "pending";
    pub const COMPLETED: &str = "completed";
    pub const FAILED: &str = "failed";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Auth endpoint - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    /// Auth endpoint - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;

    /// Challenge submission endpoint - max requests
    pub const SUBMISSION_MAX_REQUESTS: i64 = 10;
    /// Challenge submission endpoint - window in seconds
    pub const SUBMISSION_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum course title length
pub const MAX_COURSE_TITLE_LENGTH: u64 = 256;

/// Maximum course description length
pub const MAX_COURSE_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum chat message length
pub const MAX_CHAT_MESSAGE_LENGTH: u64 = 4096;

/// Maximum source code size in bytes (1 MB)
pub const MAX_SOURCE_CODE_SIZE: usize = 1024 * 1024;
