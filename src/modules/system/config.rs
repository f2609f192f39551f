use std::fs;
use std::path::PathBuf;

use crate::models::AppConfig;

const DATA_DIR: &str = ".clayton-bot";
const CONFIG_FILE: &str = "config.json";

pub fn get_data_dir() -> Result<PathBuf, String> {
    fn ensure_dir(path: &PathBuf) -> Result<(), String> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(|e| format!("failed_to_create_data_dir: {}", e))?;
        }
        Ok(())
    }
    if let Ok(env_path) = std::env::var("DATA_DIR") {
        if !env_path.trim().is_empty() {
            let data_dir = PathBuf::from(env_path);
            ensure_dir(&data_dir)?;
            return Ok(data_dir);
        }
    }
    if cfg!(test) {
        let data_dir =
            std::env::temp_dir().join(format!(".clayton-bot-test-{}", std::process::id()));
        ensure_dir(&data_dir)?;
        return Ok(data_dir);
    }

    if let Some(home) = dirs::home_dir() {
        let data_dir = home.join(DATA_DIR);
        if ensure_dir(&data_dir).is_ok() {
            return Ok(data_dir);
        }
    }

    let fallback = std::env::temp_dir().join(DATA_DIR);
    ensure_dir(&fallback)?;
    Ok(fallback)
}

pub fn load_app_config() -> Result<AppConfig, String> {
    let data_dir = get_data_dir()?;
    let config_path = data_dir.join(CONFIG_FILE);

    if !config_path.exists() {
        let config = AppConfig::new();
        let _ = save_app_config(&config);
        return Ok(config);
    }

    let content = fs::read_to_string(&config_path)
        .map_err(|e| format!("failed_to_read_config_file: {}", e))?;

    serde_json::from_str(&content).map_err(|e| format!("failed_to_parse_config_file: {}", e))
}

pub fn save_app_config(config: &AppConfig) -> Result<(), String> {
    let data_dir = get_data_dir()?;
    let config_path = data_dir.join(CONFIG_FILE);

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("failed_to_serialize_config: {}", e))?;

    fs::write(&config_path, content).map_err(|e| format!("failed_to_save_config: {}", e))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = non_empty_env(key)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {} value: {}", key, raw);
            None
        }
    }
}

/// Applies `CLAYTON_*` environment overrides on top of the file config.
pub fn apply_env_overrides(config: &mut AppConfig) {
    if let Some(url) = non_empty_env("CLAYTON_BASE_URL") {
        tracing::info!("Using base URL from environment: {}", url);
        config.base_url = url;
    }
    if let Some(path) = non_empty_env("CLAYTON_DATA_FILE") {
        tracing::info!("Using credential list from environment: {}", path);
        config.input.data_file = path;
    }
    if let Some(path) = non_empty_env("CLAYTON_PROXY_FILE") {
        tracing::info!("Using proxy list from environment: {}", path);
        config.input.proxy_file = path;
    }
    if let Some(attempts) = parse_env_number::<u32>("CLAYTON_MAX_ATTEMPTS") {
        config.retry.max_attempts = attempts;
    }
    if let Some(pacing) = parse_env_number::<u64>("CLAYTON_PACING_MS") {
        config.game.pacing_ms = pacing;
    }
}
