use std::sync::LazyLock;

pub const DEFAULT_BASE_URL: &str = "https://tonclayton.fun";
pub const DEFAULT_SITE_ORIGIN: &str = "https://tonclayton.fun";
pub const REFERER_PATH: &str = "/games/game-512";
pub const INIT_DATA_HEADER: &str = "Init-Data";

pub const DEFAULT_DATA_FILE: &str = "data.txt";
pub const DEFAULT_PROXY_FILE: &str = "proxy.txt";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RATE_LIMIT_COOLDOWN_MS: u64 = 60_000;
pub const DEFAULT_SERVER_ERROR_DELAY_MS: u64 = 5_000;

pub const DEFAULT_GAME_NAME: &str = "1024";
pub const DEFAULT_GAME_PACING_MS: u64 = 10_000;
pub const DEFAULT_GAME_MULTIPLIER: u32 = 1;
pub const DEFAULT_TILE_MILESTONES: [u64; 8] = [2, 4, 8, 16, 32, 64, 128, 256];

/// System task the backend lists for every account but never lets us act on.
pub const EXCLUDED_TASK_ID: i64 = 2;

pub mod endpoints {
    pub const LOGIN: &str = "/api/user/auth";
    pub const DAILY_CLAIM: &str = "/api/user/daily-claim";
    pub const PARTNER_TASKS: &str = "/api/tasks/partner-tasks";
    pub const DAILY_TASKS: &str = "/api/tasks/daily-tasks";
    pub const DEFAULT_TASKS: &str = "/api/tasks/default-tasks";
    pub const COMPLETE_TASK: &str = "/api/tasks/complete";
    pub const CLAIM_TASK: &str = "/api/tasks/claim";
    pub const GAME_START: &str = "/api/game/start";
    pub const GAME_SAVE_TILE: &str = "/api/game/save-tile";
    pub const GAME_OVER: &str = "/api/game/over";
}

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "Mozilla/5.0 ({}; {}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 clayton-bot/{}",
        std::env::consts::OS,
        std::env::consts::ARCH,
        env!("CARGO_PKG_VERSION")
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_are_doubling_powers_of_two() {
        assert_eq!(DEFAULT_TILE_MILESTONES.first(), Some(&2));
        assert_eq!(DEFAULT_TILE_MILESTONES.last(), Some(&256));
        for pair in DEFAULT_TILE_MILESTONES.windows(2) {
            assert_eq!(pair[1], pair[0] * 2);
        }
    }

    #[test]
    fn user_agent_carries_crate_version() {
        assert!(USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
