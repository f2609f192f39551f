use crate::models::{Account, AppConfig};
use crate::pipeline::account::{run_account, AccountOutcome};
use futures::future::join_all;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub details: Vec<String>,
}

impl BatchSummary {
    fn from_outcomes(outcomes: &[AccountOutcome]) -> Self {
        let mut succeeded = 0;
        let mut failed = 0;
        let mut details = Vec::new();

        for outcome in outcomes {
            match outcome {
                AccountOutcome::Completed(report) => {
                    succeeded += 1;
                    details.push(format!(
                        "{}: ok ({} games)",
                        report.label, report.games_played
                    ));
                }
                AccountOutcome::Failed { label, error } => {
                    failed += 1;
                    details.push(format!("{}: failed - {}", label, error));
                }
            }
        }

        Self {
            total: outcomes.len(),
            succeeded,
            failed,
            details,
        }
    }
}

/// Launches every account pipeline at once and waits for all of them.
/// Pipelines interleave at I/O and sleeps; one failing never stops another.
pub async fn run_batch(accounts: Vec<Account>, config: &AppConfig) -> (BatchSummary, Vec<AccountOutcome>) {
    let start = std::time::Instant::now();
    tracing::info!("Starting {} account pipeline(s)", accounts.len());

    let pipelines: Vec<_> = accounts
        .into_iter()
        .map(|account| run_account(account, config))
        .collect();
    let outcomes = join_all(pipelines).await;

    let summary = BatchSummary::from_outcomes(&outcomes);
    tracing::info!(
        "Batch completed: total={}, succeeded={}, failed={}, took={}ms",
        summary.total,
        summary.succeeded,
        summary.failed,
        start.elapsed().as_millis()
    );
    (summary, outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::pipeline::account::AccountReport;

    #[test]
    fn summary_counts_successes_and_failures() {
        let outcomes = vec![
            AccountOutcome::Completed(AccountReport {
                label: "Alice".into(),
                daily_reward_claimed: true,
                tasks: Vec::new(),
                games_played: 2,
            }),
            AccountOutcome::Failed {
                label: "Bob".into(),
                error: AppError::Account("login returned no data".into()),
            },
        ];
        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.details[0], "Alice: ok (2 games)");
        assert!(summary.details[1].starts_with("Bob: failed"));
    }

    #[test]
    fn empty_batch_summarizes_to_zero() {
        let summary = BatchSummary::from_outcomes(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.failed, 0);
    }
}
