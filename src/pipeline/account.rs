use crate::error::{AppError, AppResult};
use crate::models::{Account, AppConfig, LoginResponse, TaskCategory};
use crate::pipeline::game::{self, GameSession};
use crate::pipeline::tasks::{self, ReconcileReport};
use crate::upstream::ApiClient;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AccountReport {
    pub label: String,
    pub daily_reward_claimed: bool,
    pub tasks: Vec<ReconcileReport>,
    pub games_played: u32,
}

#[derive(Debug)]
pub enum AccountOutcome {
    Completed(AccountReport),
    Failed { label: String, error: AppError },
}

async fn login(client: &ApiClient) -> AppResult<LoginResponse> {
    client
        .login()
        .await?
        .ok_or_else(|| AppError::Account("login returned no data".to_string()))
}

/// Runs the whole daily routine for one account, strictly in order.
pub async fn process_account(account: &Account, config: &AppConfig) -> AppResult<AccountReport> {
    let label = account.label.as_str();
    let client = ApiClient::new(config, &account.credential)?;

    let login_data = login(&client).await?;
    tracing::info!(account = %label, "Login successful");

    let mut daily_reward_claimed = false;
    if login_data.daily_reward.is_claimable() {
        client.claim_daily_reward().await?;
        daily_reward_claimed = true;
        tracing::info!(account = %label, "Daily reward claimed");
    } else {
        tracing::info!(account = %label, "Daily reward not available or already claimed");
    }

    let mut task_reports = Vec::with_capacity(TaskCategory::ALL.len());
    for category in TaskCategory::ALL {
        task_reports.push(tasks::reconcile(&client, category, label).await?);
    }

    // Tasks can grant extra attempts, so the count is read after them.
    let daily_attempts = login(&client).await?.user.daily_attempts;
    tracing::info!(account = %label, "Daily game attempts: {}", daily_attempts);

    let session = GameSession::from_config(&config.game);
    for round in 1..=daily_attempts {
        game::play(&client, &session).await?;
        tracing::info!(account = %label, "{} game {} done", session.name, round);
    }

    tracing::info!(account = %label, "All done!");
    Ok(AccountReport {
        label: label.to_string(),
        daily_reward_claimed,
        tasks: task_reports,
        games_played: daily_attempts,
    })
}

/// Pipeline boundary: any failure ends this account only.
pub async fn run_account(account: Account, config: &AppConfig) -> AccountOutcome {
    match process_account(&account, config).await {
        Ok(report) => AccountOutcome::Completed(report),
        Err(error) => {
            tracing::error!(account = %account.label, "Error: {}", error);
            AccountOutcome::Failed {
                label: account.label,
                error,
            }
        }
    }
}
