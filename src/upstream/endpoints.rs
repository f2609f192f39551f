use crate::constants::endpoints;
use crate::error::AppResult;
use crate::models::{LoginResponse, TaskActionResult, TaskCategory};
use crate::upstream::client::ApiClient;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

fn decode<T: DeserializeOwned>(body: Option<Value>) -> AppResult<Option<T>> {
    match body {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

// Complete/claim bodies are informational only; a shape we don't know is not
// worth failing the account over.
fn decode_action(body: Option<Value>) -> Option<TaskActionResult> {
    body.map(|value| {
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!("Unrecognised task action body: {}", e);
            TaskActionResult::default()
        })
    })
}

impl ApiClient {
    pub async fn login(&self) -> AppResult<Option<LoginResponse>> {
        decode(self.execute(Method::POST, endpoints::LOGIN, None).await?)
    }

    pub async fn claim_daily_reward(&self) -> AppResult<Option<Value>> {
        self.execute(Method::POST, endpoints::DAILY_CLAIM, None).await
    }

    pub async fn fetch_tasks(&self, category: TaskCategory) -> AppResult<Option<Value>> {
        self.execute(Method::GET, category.path(), None).await
    }

    pub async fn complete_task(&self, task_id: i64) -> AppResult<Option<TaskActionResult>> {
        let body = self
            .execute(
                Method::POST,
                endpoints::COMPLETE_TASK,
                Some(json!({ "task_id": task_id })),
            )
            .await?;
        Ok(decode_action(body))
    }

    pub async fn claim_task(&self, task_id: i64) -> AppResult<Option<TaskActionResult>> {
        let body = self
            .execute(
                Method::POST,
                endpoints::CLAIM_TASK,
                Some(json!({ "task_id": task_id })),
            )
            .await?;
        Ok(decode_action(body))
    }

    pub async fn start_game(&self) -> AppResult<Option<Value>> {
        self.execute(Method::POST, endpoints::GAME_START, None).await
    }

    pub async fn save_tile(&self, max_tile: u64) -> AppResult<Option<Value>> {
        self.execute(
            Method::POST,
            endpoints::GAME_SAVE_TILE,
            Some(json!({ "maxTile": max_tile })),
        )
        .await
    }

    pub async fn game_over(&self, multiplier: u32) -> AppResult<Option<Value>> {
        self.execute(
            Method::POST,
            endpoints::GAME_OVER,
            Some(json!({ "multiplier": multiplier })),
        )
        .await
    }
}
