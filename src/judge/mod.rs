//! External judge service integration
//!
//! The judge is a third-party judge0-compatible HTTP service that executes
//! one (source, stdin) pair and reports stdout/stderr/status. This module
//! defines the port trait the grading engine depends on plus the reqwest
//! adapter that talks to the real service.

mod http_client;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{constants::languages, error::AppResult};

pub use http_client::HttpJudgeClient;

/// Outcome of executing submitted code against one stdin case
#[derive(Debug, Clone, Default)]
pub struct JudgeOutcome {
    /// Raw stdout (untrimmed)
    pub stdout: String,
    /// stderr or compiler output, whichever the service reported
    pub error_output: String,
    /// Human-readable status description, e.g. "Accepted"
    pub status: Option<String>,
}

/// Port for the external code-execution service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JudgeClient: Send + Sync {
    /// Execute `source_code` in the runtime identified by `language_id`
    /// with `stdin`, waiting for the result.
    async fn execute(
        &self,
        source_code: &str,
        language_id: i32,
        stdin: &str,
    ) -> AppResult<JudgeOutcome>;
}

/// Shared judge client handle stored in application state
pub type DynJudgeClient = Arc<dyn JudgeClient>;

/// Map a declared submission language to the judge runtime identifier
pub fn runtime_id(language: &str) -> Option<i32> {
    match language {
        languages::JAVASCRIPT => Some(63),
        languages::PYTHON => Some(71),
        languages::JAVA => Some(62),
        languages::CPP => Some(54),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_id_known_languages() {
        assert_eq!(runtime_id("javascript"), Some(63));
        assert_eq!(runtime_id("python"), Some(71));
        assert_eq!(runtime_id("java"), Some(62));
        assert_eq!(runtime_id("cpp"), Some(54));
    }

    #[test]
    fn test_runtime_id_rejects_unknown() {
        assert_eq!(runtime_id("brainfuck"), None);
        assert_eq!(runtime_id(""), None);
        // Case-sensitive on purpose; clients send lowercase identifiers
        assert_eq!(runtime_id("Python"), None);
    }
}
