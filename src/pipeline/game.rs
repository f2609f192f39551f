use crate::error::AppResult;
use crate::models::GameConfig;
use crate::upstream::ApiClient;
use serde_json::Value;
use tokio::time::{sleep, Duration};

/// One simulated playthrough: milestones reported in order, paced apart.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub name: String,
    pub milestones: Vec<u64>,
    pub pacing: Duration,
    pub multiplier: u32,
}

impl GameSession {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            name: config.name.clone(),
            milestones: config.milestones.clone(),
            pacing: Duration::from_millis(config.pacing_ms),
            multiplier: config.multiplier,
        }
    }
}

/// Starts a game, reports every milestone, then ends it and returns the
/// game-over result. Any unrecoverable save-tile failure aborts the session.
pub async fn play(client: &ApiClient, session: &GameSession) -> AppResult<Option<Value>> {
    client.start_game().await?;

    let stages = session.milestones.len();
    for (index, tile) in session.milestones.iter().copied().enumerate() {
        tracing::info!(
            game = %session.name,
            "Playing {} game... progress {}/{}",
            session.name,
            index + 1,
            stages
        );
        if !session.pacing.is_zero() {
            sleep(session.pacing).await;
        }
        client.save_tile(tile).await?;
        tracing::info!(game = %session.name, "Tile saved: {}", tile);
    }

    tracing::info!(game = %session.name, "{} game finished!", session.name);
    client.game_over(session.multiplier).await
}
