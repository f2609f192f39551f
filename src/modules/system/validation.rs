use crate::models::config::{GameConfig, InputConfig, RetryConfig};
use crate::models::AppConfig;
use std::fmt;
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
    pub actual_value: Option<String>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.actual_value {
            Some(val) => write!(f, "  • {}: {} (got: {})", self.field, self.message, val),
            None => write!(f, "  • {}: {}", self.field, self.message),
        }
    }
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            actual_value: None,
        }
    }

    fn with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            actual_value: Some(value.to_string()),
        }
    }
}
pub fn validate_app_config(config: &AppConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    validate_http_url("base_url", &config.base_url, &mut errors);
    validate_http_url("site_origin", &config.site_origin, &mut errors);
    if config.request_timeout_secs == 0 || config.request_timeout_secs > 600 {
        errors.push(ConfigError::with_value(
            "request_timeout_secs",
            "must be between 1 and 600 seconds",
            config.request_timeout_secs,
        ));
    }
    validate_input_config(&config.input, &mut errors);
    validate_retry_config(&config.retry, &mut errors);
    validate_game_config(&config.game, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_http_url(field: &str, value: &str, errors: &mut Vec<ConfigError>) {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {}
        Ok(_) => errors.push(ConfigError::with_value(
            field,
            "must be an http(s) URL with a host",
            value,
        )),
        Err(e) => errors.push(ConfigError::with_value(
            field,
            format!("is not a valid URL ({})", e),
            value,
        )),
    }
}

fn validate_input_config(config: &InputConfig, errors: &mut Vec<ConfigError>) {
    if config.data_file.trim().is_empty() {
        errors.push(ConfigError::new("input.data_file", "must not be empty"));
    }
    if config.proxy_file.trim().is_empty() {
        errors.push(ConfigError::new("input.proxy_file", "must not be empty"));
    }
}

fn validate_retry_config(config: &RetryConfig, errors: &mut Vec<ConfigError>) {
    if config.max_attempts == 0 {
        errors.push(ConfigError::with_value(
            "retry.max_attempts",
            "must be at least 1",
            config.max_attempts,
        ));
    }
}

fn validate_game_config(config: &GameConfig, errors: &mut Vec<ConfigError>) {
    if config.name.trim().is_empty() {
        errors.push(ConfigError::new("game.name", "must not be empty"));
    }
    if config.milestones.is_empty() {
        errors.push(ConfigError::new("game.milestones", "must not be empty"));
    }
    for (i, tile) in config.milestones.iter().enumerate() {
        if *tile == 0 {
            errors.push(ConfigError::with_value(
                format!("game.milestones[{}]", i),
                "tile value must be greater than 0",
                tile,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &[ConfigError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_app_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_problem() {
        let mut config = AppConfig::default();
        config.base_url = "ftp://example.com".into();
        config.request_timeout_secs = 0;
        config.input.data_file = " ".into();
        config.retry.max_attempts = 0;
        config.game.milestones = vec![2, 0];

        let errors = validate_app_config(&config).expect_err("invalid config");
        let fields = fields(&errors);
        assert!(fields.contains(&"base_url"));
        assert!(fields.contains(&"request_timeout_secs"));
        assert!(fields.contains(&"input.data_file"));
        assert!(fields.contains(&"retry.max_attempts"));
        assert!(fields.contains(&"game.milestones[1]"));
    }

    #[test]
    fn unparseable_url_and_empty_milestones() {
        let mut config = AppConfig::default();
        config.base_url = "not a url".into();
        config.game.milestones.clear();

        let errors = validate_app_config(&config).expect_err("invalid config");
        assert_eq!(fields(&errors), vec!["base_url", "game.milestones"]);
        assert!(errors[0].to_string().contains("not a valid URL"));
    }

    #[test]
    fn display_includes_actual_value() {
        let err = ConfigError::with_value("retry.max_attempts", "must be at least 1", 0);
        assert_eq!(err.to_string(), "  • retry.max_attempts: must be at least 1 (got: 0)");
    }
}
