use crate::constants;
use serde::{Deserialize, Serialize};
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_site_origin")]
    pub site_origin: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub game: GameConfig,
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_site_origin() -> String {
    constants::DEFAULT_SITE_ORIGIN.to_string()
}

fn default_request_timeout() -> u64 {
    constants::DEFAULT_REQUEST_TIMEOUT_SECS
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_proxy_file")]
    pub proxy_file: String,
}

fn default_data_file() -> String {
    constants::DEFAULT_DATA_FILE.to_string()
}

fn default_proxy_file() -> String {
    constants::DEFAULT_PROXY_FILE.to_string()
}

impl InputConfig {
    pub fn new() -> Self {
        Self {
            data_file: default_data_file(),
            proxy_file: default_proxy_file(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new()
    }
}
/// Retry budget and backoff windows for the request engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_rate_limit_cooldown_ms")]
    pub rate_limit_cooldown_ms: u64,
    #[serde(default = "default_server_error_delay_ms")]
    pub server_error_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    constants::DEFAULT_MAX_ATTEMPTS
}

fn default_rate_limit_cooldown_ms() -> u64 {
    constants::DEFAULT_RATE_LIMIT_COOLDOWN_MS
}

fn default_server_error_delay_ms() -> u64 {
    constants::DEFAULT_SERVER_ERROR_DELAY_MS
}

impl RetryConfig {
    pub fn new() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            rate_limit_cooldown_ms: default_rate_limit_cooldown_ms(),
            server_error_delay_ms: default_server_error_delay_ms(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_game_name")]
    pub name: String,
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,
    #[serde(default = "default_milestones")]
    pub milestones: Vec<u64>,
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
}

fn default_game_name() -> String {
    constants::DEFAULT_GAME_NAME.to_string()
}

fn default_pacing_ms() -> u64 {
    constants::DEFAULT_GAME_PACING_MS
}

fn default_milestones() -> Vec<u64> {
    constants::DEFAULT_TILE_MILESTONES.to_vec()
}

fn default_multiplier() -> u32 {
    constants::DEFAULT_GAME_MULTIPLIER
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            name: default_game_name(),
            pacing_ms: default_pacing_ms(),
            milestones: default_milestones(),
            multiplier: default_multiplier(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            base_url: default_base_url(),
            site_origin: default_site_origin(),
            request_timeout_secs: default_request_timeout(),
            input: InputConfig::default(),
            retry: RetryConfig::default(),
            game: GameConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
