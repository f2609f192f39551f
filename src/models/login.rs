use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyReward {
    #[serde(default)]
    pub can_claim_today: bool,
    #[serde(default)]
    pub is_subscribed: bool,
}

impl DailyReward {
    pub fn is_claimable(&self) -> bool {
        self.can_claim_today && self.is_subscribed
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub daily_attempts: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: UserInfo,
    #[serde(default, rename = "dailyReward")]
    pub daily_reward: DailyReward,
}

/// Body returned by the complete-task and claim-task endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskActionResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reward_tokens: Option<Value>,
}

impl TaskActionResult {
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or("ok")
    }

    pub fn reward_display(&self) -> String {
        match &self.reward_tokens {
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
            None => "0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_reads_reward_and_attempts() {
        let login: LoginResponse = serde_json::from_value(json!({
            "user": {"daily_attempts": 4, "tokens": 120},
            "dailyReward": {"can_claim_today": true, "is_subscribed": true}
        }))
        .expect("decode login");
        assert_eq!(login.user.daily_attempts, 4);
        assert!(login.daily_reward.is_claimable());
    }

    #[test]
    fn reward_requires_subscription_and_availability() {
        let reward = DailyReward {
            can_claim_today: true,
            is_subscribed: false,
        };
        assert!(!reward.is_claimable());
        let reward = DailyReward {
            can_claim_today: false,
            is_subscribed: true,
        };
        assert!(!reward.is_claimable());
    }

    #[test]
    fn sparse_login_response_defaults() {
        let login: LoginResponse = serde_json::from_value(json!({})).expect("decode login");
        assert_eq!(login.user.daily_attempts, 0);
        assert!(!login.daily_reward.is_claimable());
    }

    #[test]
    fn reward_display_handles_numbers_and_strings() {
        let result: TaskActionResult =
            serde_json::from_value(json!({"message": "claimed", "reward_tokens": 25}))
                .expect("decode");
        assert_eq!(result.reward_display(), "25");
        assert_eq!(result.message_or_default(), "claimed");

        let result: TaskActionResult =
            serde_json::from_value(json!({"reward_tokens": "7.5"})).expect("decode");
        assert_eq!(result.reward_display(), "7.5");
        assert_eq!(result.message_or_default(), "ok");
    }
}
