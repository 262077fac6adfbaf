//! Reqwest-backed judge client
//!
//! Owns transport details only: request serialization, timeout and
//! HTTP error mapping. Grading semantics live in the challenge service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::JudgeConfig,
    error::{AppError, AppResult},
};

use super::{JudgeClient, JudgeOutcome};

/// Judge client that performs synchronous-wait submissions over HTTP
pub struct HttpJudgeClient {
    client: Client,
    submissions_url: String,
}

/// Request body for a judge0-style submission
#[derive(Debug, Serialize)]
struct SubmissionBody<'a> {
    source_code: &'a str,
    language_id: i32,
    stdin: &'a str,
}

/// Response body from the judge service
#[derive(Debug, Deserialize)]
struct SubmissionResult {
    stdout: Option<String>,
    stderr: Option<String>,
    compile_output: Option<String>,
    status: Option<JudgeStatus>,
}

#[derive(Debug, Deserialize)]
struct JudgeStatus {
    description: Option<String>,
}

impl HttpJudgeClient {
    /// Build a client with the configured endpoint and request timeout
    pub fn new(config: &JudgeConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            // wait=true blocks until the case has executed; the grading
            // engine relies on getting the final result in one round trip
            submissions_url: format!("{}/submissions?wait=true", config.url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl JudgeClient for HttpJudgeClient {
    async fn execute(
        &self,
        source_code: &str,
        language_id: i32,
        stdin: &str,
    ) -> AppResult<JudgeOutcome> {
        let response = self
            .client
            .post(&self.submissions_url)
            .json(&SubmissionBody {
                source_code,
                language_id,
                stdin,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Judge(format!(
                "judge returned {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let result: SubmissionResult = response.json().await?;

        Ok(JudgeOutcome {
            stdout: result.stdout.unwrap_or_default(),
            error_output: result
                .stderr
                .or(result.compile_output)
                .unwrap_or_default(),
            status: result.status.and_then(|s| s.description),
        })
    }
}
