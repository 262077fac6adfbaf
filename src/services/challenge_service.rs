//! Challenge service: listing, detail and the grading engine
//!
//! The grading engine runs a submission against every test case of a
//! challenge through the external judge, aggregates pass/fail, and on a
//! full pass credits XP to the submitter. Judge results are primary;
//! reward bookkeeping is best-effort secondary and never fails the
//! request.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{roles, XP_PER_LEVEL, XP_REWARD_PER_CHALLENGE},
    db::repositories::{ChallengeRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::challenges::response::{CaseResult, SubmissionOutcome},
    judge::{runtime_id, JudgeClient},
    middleware::auth::AuthenticatedUser,
    models::{Challenge, TestCase},
};

/// Result of applying an XP reward to a user's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub xp: i32,
    pub level: i32,
    pub leveled_up: bool,
}

/// Challenge service for business logic
pub struct ChallengeService;

impl ChallengeService {
    /// List all challenges (test cases stripped by the handler layer)
    pub async fn list_challenges(pool: &PgPool) -> AppResult<Vec<Challenge>> {
        ChallengeRepository::list_all(pool).await
    }

    /// Get a challenge with its full detail
    pub async fn get_challenge(pool: &PgPool, id: &Uuid) -> AppResult<Challenge> {
        ChallengeRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Challenge not found".to_string()))
    }

    /// Grade a submission and credit XP on a full pass
    pub async fn submit(
        pool: &PgPool,
        judge: &dyn JudgeClient,
        auth_user: &AuthenticatedUser,
        challenge_id: &Uuid,
        code: &str,
        language: &str,
    ) -> AppResult<SubmissionOutcome> {
        if auth_user.role != roles::USER {
            return Err(AppError::Forbidden(
                "Only students can submit challenges".to_string(),
            ));
        }

        let challenge = ChallengeRepository::find_by_id(pool, challenge_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Challenge not found".to_string()))?;

        let language_id = runtime_id(language)
            .ok_or_else(|| AppError::Validation("Unsupported language".to_string()))?;

        let (all_passed, results) =
            evaluate_test_cases(judge, code, language_id, &challenge.test_cases).await;

        let mut xp_awarded = 0;
        let mut leveled_up = false;

        if all_passed {
            // Reward bookkeeping must not fail the grading result
            match Self::credit_xp(pool, &auth_user.id).await {
                Ok(progress) => {
                    xp_awarded = XP_REWARD_PER_CHALLENGE;
                    leveled_up = progress.leveled_up;
                }
                Err(e) => {
                    tracing::error!(user_id = %auth_user.id, error = %e, "XP crediting failed");
                }
            }
        }

        Ok(SubmissionOutcome {
            all_passed,
            results,
            xp_awarded,
            leveled_up,
        })
    }

    /// Load the submitter, apply the fixed reward and persist the outcome
    async fn credit_xp(pool: &PgPool, user_id: &Uuid) -> AppResult<LevelProgress> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let progress = apply_reward(user.xp, user.level, XP_REWARD_PER_CHALLENGE);
        UserRepository::set_xp_and_level(pool, user_id, progress.xp, progress.level).await?;

        tracing::info!(
            user_id = %user_id,
            xp = progress.xp,
            level = progress.level,
            leveled_up = progress.leveled_up,
            "XP credited"
        );

        Ok(progress)
    }
}

/// Run every test case through the judge, in order, without short-circuiting.
///
/// A judge failure for one case is captured in that case's `error` field
/// and counts as a failed case; it never aborts the remaining cases.
pub async fn evaluate_test_cases(
    judge: &dyn JudgeClient,
    code: &str,
    language_id: i32,
    test_cases: &[TestCase],
) -> (bool, Vec<CaseResult>) {
    let mut results = Vec::with_capacity(test_cases.len());
    let mut all_passed = true;

    for case in test_cases {
        let expected = case.expected_output.trim().to_string();

        let result = match judge.execute(code, language_id, &case.input).await {
            Ok(outcome) => {
                let actual = outcome.stdout.trim().to_string();
                let passed = actual == expected;
                CaseResult {
                    input: case.input.clone(),
                    expected,
                    actual,
                    error: outcome.error_output.trim().to_string(),
                    passed,
                    status: outcome.status,
                }
            }
            Err(e) => CaseResult {
                input: case.input.clone(),
                expected,
                actual: String::new(),
                error: e.to_string(),
                passed: false,
                status: None,
            },
        };

        if !result.passed {
            all_passed = false;
        }
        results.push(result);
    }

    (all_passed, results)
}

/// Apply an XP reward, advancing levels while the cumulative XP clears
/// each `level * XP_PER_LEVEL` threshold. XP is reset to the remainder on
/// every level-up, so a large reward can cross several levels at once.
pub fn apply_reward(xp: i32, level: i32, reward: i32) -> LevelProgress {
    let mut xp = xp.max(0) + reward;
    let mut level = level.max(1);
    let mut leveled_up = false;

    while xp >= level * XP_PER_LEVEL {
        xp -= level * XP_PER_LEVEL;
        level += 1;
        leveled_up = true;
    }

    LevelProgress {
        xp,
        level,
        leveled_up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::{JudgeOutcome, MockJudgeClient};

    fn case(input: &str, expected: &str) -> TestCase {
        TestCase {
            input: input.to_string(),
            expected_output: expected.to_string(),
        }
    }

    fn outcome(stdout: &str) -> JudgeOutcome {
        JudgeOutcome {
            stdout: stdout.to_string(),
            error_output: String::new(),
            status: Some("Accepted".to_string()),
        }
    }

    // ------------------------------------------------------------------
    // Leveling arithmetic
    // ------------------------------------------------------------------

    #[test]
    fn test_reward_below_threshold_keeps_level() {
        // Level 1 needs 100 XP; 30 + 50 = 80 stays below it
        let progress = apply_reward(30, 1, 50);
        assert_eq!(progress.xp, 80);
        assert_eq!(progress.level, 1);
        assert!(!progress.leveled_up);
    }

    #[test]
    fn test_reward_at_threshold_levels_up_with_remainder() {
        // 70 + 50 = 120 >= 100: level 2, xp resets to 20
        let progress = apply_reward(70, 1, 50);
        assert_eq!(progress.xp, 20);
        assert_eq!(progress.level, 2);
        assert!(progress.leveled_up);
    }

    #[test]
    fn test_reward_exactly_at_threshold() {
        let progress = apply_reward(50, 1, 50);
        assert_eq!(progress.xp, 0);
        assert_eq!(progress.level, 2);
        assert!(progress.leveled_up);
    }

    #[test]
    fn test_large_reward_crosses_multiple_levels() {
        // 0 + 350: clears 100 (level 2, xp 250) then 200 (level 3, xp 50)
        let progress = apply_reward(0, 1, 350);
        assert_eq!(progress.level, 3);
        assert_eq!(progress.xp, 50);
        assert!(progress.leveled_up);
    }

    // ------------------------------------------------------------------
    // Evaluation loop
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_all_cases_pass() {
        // "Sum of Two Numbers" happy path
        let cases = vec![case("1 2", "3"), case("10 20", "30")];
        let mut judge = MockJudgeClient::new();
        judge.expect_execute().times(2).returning(|_, _, stdin| {
            let out = if stdin == "1 2" { "3\n" } else { "30\n" };
            Ok(outcome(out))
        });

        let (all_passed, results) = evaluate_test_cases(&judge, "code", 63, &cases).await;

        assert!(all_passed);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(results[0].actual, "3");
        assert_eq!(results[1].expected, "30");
    }

    #[tokio::test]
    async fn test_one_wrong_answer_fails_overall_but_runs_all_cases() {
        // Second case wrong; loop must not short-circuit
        let cases = vec![case("1 2", "3"), case("10 20", "30"), case("0 0", "0")];
        let mut judge = MockJudgeClient::new();
        judge.expect_execute().times(3).returning(|_, _, stdin| {
            let out = match stdin {
                "1 2" => "3",
                "10 20" => "29",
                _ => "0",
            };
            Ok(outcome(out))
        });

        let (all_passed, results) = evaluate_test_cases(&judge, "code", 63, &cases).await;

        assert!(!all_passed);
        assert_eq!(results.len(), 3);
        assert!(results[0].passed);
        assert!(!results[1].passed);
        assert_eq!(results[1].actual, "29");
        assert!(results[2].passed);
    }

    #[tokio::test]
    async fn test_results_preserve_test_case_order() {
        let cases = vec![case("a", "1"), case("b", "2"), case("c", "3")];
        let mut judge = MockJudgeClient::new();
        judge.expect_execute().times(3).returning(|_, _, stdin| {
            let out = match stdin {
                "a" => "1",
                "b" => "2",
                _ => "3",
            };
            Ok(outcome(out))
        });

        let (_, results) = evaluate_test_cases(&judge, "code", 71, &cases).await;

        let inputs: Vec<&str> = results.iter().map(|r| r.input.as_str()).collect();
        assert_eq!(inputs, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_judge_error_is_captured_per_case() {
        let cases = vec![case("1 2", "3"), case("10 20", "30")];
        let mut judge = MockJudgeClient::new();
        judge.expect_execute().times(2).returning(|_, _, stdin| {
            if stdin == "1 2" {
                Err(crate::error::AppError::Judge("timed out".to_string()))
            } else {
                Ok(outcome("30"))
            }
        });

        let (all_passed, results) = evaluate_test_cases(&judge, "code", 54, &cases).await;

        assert!(!all_passed);
        assert!(!results[0].passed);
        assert!(results[0].error.contains("timed out"));
        // The failure did not stop the second case from running
        assert!(results[1].passed);
    }

    #[tokio::test]
    async fn test_comparison_trims_but_does_not_normalize() {
        let cases = vec![case("x", "a b")];
        let mut judge = MockJudgeClient::new();
        judge
            .expect_execute()
            .returning(|_, _, _| Ok(outcome("  a  b \n")));

        let (all_passed, results) = evaluate_test_cases(&judge, "code", 63, &cases).await;

        // Inner whitespace differs: exact match after trim only
        assert!(!all_passed);
        assert_eq!(results[0].actual, "a  b");
    }

    #[tokio::test]
    async fn test_empty_test_case_list_passes_vacuously() {
        let judge = MockJudgeClient::new();
        let (all_passed, results) = evaluate_test_cases(&judge, "code", 63, &[]).await;

        assert!(all_passed);
        assert!(results.is_empty());
    }
}
