use crate::constants::{endpoints, EXCLUDED_TASK_ID};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskDetails {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub task_id: i64,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_claimed: bool,
    #[serde(default)]
    pub task: TaskDetails,
}

impl Task {
    pub fn title(&self) -> &str {
        &self.task.title
    }

    pub fn is_excluded(&self) -> bool {
        self.task_id == EXCLUDED_TASK_ID
    }

    pub fn needs_completion(&self) -> bool {
        !self.is_excluded() && !self.is_completed && !self.is_claimed
    }

    pub fn is_claimable(&self) -> bool {
        !self.is_excluded() && self.is_completed && !self.is_claimed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCategory {
    Partner,
    Daily,
    Other,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 3] = [
        TaskCategory::Partner,
        TaskCategory::Daily,
        TaskCategory::Other,
    ];

    pub fn path(self) -> &'static str {
        match self {
            TaskCategory::Partner => endpoints::PARTNER_TASKS,
            TaskCategory::Daily => endpoints::DAILY_TASKS,
            TaskCategory::Other => endpoints::DEFAULT_TASKS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TaskCategory::Partner => "partner",
            TaskCategory::Daily => "daily",
            TaskCategory::Other => "other",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interprets a task-list response. `None` means the server gave no list.
/// Entries that do not decode are dropped with a warning.
pub fn parse_task_list(body: Option<Value>) -> Option<Vec<Task>> {
    let Some(Value::Array(items)) = body else {
        return None;
    };

    let tasks = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Task>(item) {
            Ok(task) => Some(task),
            Err(e) => {
                tracing::warn!("Skipping undecodable task entry: {}", e);
                None
            }
        })
        .collect();
    Some(tasks)
}
