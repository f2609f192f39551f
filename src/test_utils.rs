use std::sync::{Mutex, MutexGuard, OnceLock};

/// Serializes tests that touch process-wide environment variables.
pub(crate) fn lock_env() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets or clears a batch of env vars and restores all of them on drop.
#[derive(Default)]
pub(crate) struct ScopedEnv {
    saved: Vec<(&'static str, Option<String>)>,
}

impl ScopedEnv {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn remember(&mut self, key: &'static str) {
        if !self.saved.iter().any(|(k, _)| *k == key) {
            self.saved.push((key, std::env::var(key).ok()));
        }
    }

    pub(crate) fn set(mut self, key: &'static str, value: &str) -> Self {
        self.remember(key);
        std::env::set_var(key, value);
        self
    }

    pub(crate) fn unset(mut self, key: &'static str) -> Self {
        self.remember(key);
        std::env::remove_var(key);
        self
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain(..).rev() {
            match original {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// A test `AppConfig` pointed at a mock server, with every wait shortened.
pub(crate) fn fast_config(base_url: &str) -> crate::models::AppConfig {
    let mut config = crate::models::AppConfig::default();
    config.base_url = base_url.to_string();
    config.request_timeout_secs = 5;
    config.retry.rate_limit_cooldown_ms = 10;
    config.retry.server_error_delay_ms = 10;
    config.game.pacing_ms = 0;
    config
}
