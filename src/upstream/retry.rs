use crate::models::RetryConfig;
use tokio::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenignReason {
    /// 409: the action already happened server-side.
    Conflict,
    /// 500: the backend reports the feature as unavailable right now.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    BenignTerminal(BenignReason),
    RateLimited,
    TransientServer,
    Fatal,
}

/// Maps a failed call's HTTP status (or `None` for transport failures) onto
/// the failure taxonomy.
pub fn classify(status: Option<u16>) -> FailureClass {
    match status {
        Some(409) => FailureClass::BenignTerminal(BenignReason::Conflict),
        Some(500) => FailureClass::BenignTerminal(BenignReason::Unavailable),
        Some(429) => FailureClass::RateLimited,
        Some(code) if code >= 500 => FailureClass::TransientServer,
        _ => FailureClass::Fatal,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub rate_limit_cooldown: Duration,
    pub server_error_delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            rate_limit_cooldown: Duration::from_millis(config.rate_limit_cooldown_ms),
            server_error_delay: Duration::from_millis(config.server_error_delay_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Stop without an error; the caller sees "nothing to do".
    Resolve(BenignReason),
    /// Wait, then repeat the call without spending an attempt.
    RetrySameAttempt(Duration),
    /// Wait, then move on to the next attempt.
    RetryNextAttempt(Duration),
    Raise,
}

/// `attempt` is 0-based.
pub fn determine_retry_decision(
    class: FailureClass,
    attempt: u32,
    max_attempts: u32,
    policy: &RetryPolicy,
) -> RetryDecision {
    match class {
        FailureClass::BenignTerminal(reason) => RetryDecision::Resolve(reason),
        FailureClass::RateLimited => RetryDecision::RetrySameAttempt(policy.rate_limit_cooldown),
        FailureClass::TransientServer if attempt + 1 < max_attempts => {
            RetryDecision::RetryNextAttempt(policy.server_error_delay)
        }
        FailureClass::TransientServer | FailureClass::Fatal => RetryDecision::Raise,
    }
}
