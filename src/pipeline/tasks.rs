use crate::error::AppResult;
use crate::models::task::parse_task_list;
use crate::models::TaskCategory;
use crate::upstream::ApiClient;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReconcileReport {
    pub category: &'static str,
    pub available: bool,
    pub completed: usize,
    pub skipped: usize,
    pub claimed: usize,
}

impl ReconcileReport {
    fn new(category: TaskCategory) -> Self {
        Self {
            category: category.name(),
            available: false,
            completed: 0,
            skipped: 0,
            claimed: 0,
        }
    }
}

/// Completes every open task of `category`, then claims every completed one.
///
/// The completion and claim phases each work from their own fetch of the
/// task list; nothing but task ids is carried across. A missing or non-list
/// response means the category has no tasks right now and is not an error.
/// Hard failures from the complete/claim calls propagate to the caller.
pub async fn reconcile(
    client: &ApiClient,
    category: TaskCategory,
    account_label: &str,
) -> AppResult<ReconcileReport> {
    let mut report = ReconcileReport::new(category);
    tracing::info!(account = %account_label, %category, "Checking {} tasks...", category);

    let Some(tasks) = parse_task_list(client.fetch_tasks(category).await?) else {
        tracing::warn!(account = %account_label, %category, "No {} tasks available", category);
        return Ok(report);
    };
    report.available = true;

    for task in &tasks {
        if task.is_excluded() {
            continue;
        }
        if !task.needs_completion() {
            tracing::info!(
                account = %account_label,
                %category,
                "Already done: {} (ID: {})",
                task.title(),
                task.task_id
            );
            report.skipped += 1;
            continue;
        }

        tracing::info!(
            account = %account_label,
            %category,
            "Completing task: {} (ID: {})",
            task.title(),
            task.task_id
        );
        match client.complete_task(task.task_id).await? {
            Some(result) => {
                tracing::info!(account = %account_label, "{}", result.message_or_default());
                report.completed += 1;
            }
            None => tracing::info!(
                account = %account_label,
                "Nothing to do for task {}",
                task.task_id
            ),
        }
    }

    let Some(tasks) = parse_task_list(client.fetch_tasks(category).await?) else {
        tracing::warn!(
            account = %account_label,
            %category,
            "{} task list unavailable on re-fetch, skipping claims",
            category
        );
        return Ok(report);
    };

    for task in tasks.iter().filter(|t| t.is_claimable()) {
        tracing::info!(
            account = %account_label,
            %category,
            "Claiming task: {} (ID: {})",
            task.title(),
            task.task_id
        );
        match client.claim_task(task.task_id).await? {
            Some(result) => {
                tracing::info!(
                    account = %account_label,
                    "{} | reward: {}",
                    result.message_or_default(),
                    result.reward_display()
                );
                report.claimed += 1;
            }
            None => tracing::info!(
                account = %account_label,
                "Nothing to claim for task {}",
                task.task_id
            ),
        }
    }

    Ok(report)
}
