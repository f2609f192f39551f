// Per-account API client and the resilient request engine built on it.

use crate::constants::{INIT_DATA_HEADER, REFERER_PATH, USER_AGENT};
use crate::error::{AppError, AppResult};
use crate::models::{AccountCredential, AppConfig};
use crate::upstream::proxy::ProxyDescriptor;
use crate::upstream::retry::{
    classify, determine_retry_decision, BenignReason, RetryDecision, RetryPolicy,
};
use reqwest::{header, Client, Method};
use serde_json::Value;
use tokio::time::{sleep, Duration};

const MAX_ERROR_BODY_CHARS: usize = 200;

pub struct ApiClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl ApiClient {
    /// Builds the client for one account. A malformed proxy is a
    /// configuration error for this account only.
    pub fn new(config: &AppConfig, credential: &AccountCredential) -> AppResult<Self> {
        let headers = Self::build_headers(&credential.init_data, &config.site_origin)?;

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(20))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(USER_AGENT.as_str())
            .default_headers(headers);

        if let Some(raw) = credential.proxy.as_deref() {
            let descriptor = ProxyDescriptor::parse(raw)?;
            tracing::debug!("ApiClient enabled proxy: {}", descriptor);
            builder = builder.proxy(descriptor.to_reqwest()?);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::from_config(&config.retry),
        })
    }

    fn build_headers(init_data: &str, site_origin: &str) -> AppResult<header::HeaderMap> {
        let origin = site_origin.trim_end_matches('/');
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::HeaderName::from_static("init-data"),
            header::HeaderValue::from_str(init_data).map_err(|e| {
                AppError::Config(format!("{} is not a valid header value: {}", INIT_DATA_HEADER, e))
            })?,
        );
        headers.insert(
            header::ORIGIN,
            header::HeaderValue::from_str(origin)
                .map_err(|e| AppError::Config(format!("invalid site origin: {}", e)))?,
        );
        headers.insert(
            header::REFERER,
            header::HeaderValue::from_str(&format!("{}{}", origin, REFERER_PATH))
                .map_err(|e| AppError::Config(format!("invalid site origin: {}", e)))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        Ok(headers)
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_once(&self, method: &Method, path: &str, payload: Option<&Value>) -> AppResult<Value> {
        let mut request = self.http.request(method.clone(), self.url(path));
        if *method != Method::GET {
            let empty = Value::Object(Default::default());
            request = request.json(payload.unwrap_or(&empty));
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            // Plain-text acknowledgements are still successes.
            return Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)));
        }

        Err(AppError::Http {
            status: status.as_u16(),
            message: extract_error_message(&text, status),
        })
    }

    /// Runs one call under the configured retry budget.
    ///
    /// `Ok(None)` means the server answered with a benign terminal status
    /// (409 or 500) and there is nothing to do. Rate limiting is retried
    /// without limit; other 5xx responses consume the attempt budget.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> AppResult<Option<Value>> {
        self.execute_with_attempts(method, path, payload, self.retry.max_attempts)
            .await
    }

    pub async fn execute_with_attempts(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
        max_attempts: u32,
    ) -> AppResult<Option<Value>> {
        let max_attempts = max_attempts.max(1);
        let mut attempt: u32 = 0;

        loop {
            let err = match self.send_once(&method, path, payload.as_ref()).await {
                Ok(body) => return Ok(Some(body)),
                Err(err) => err,
            };

            let status = err.status();
            match determine_retry_decision(classify(status), attempt, max_attempts, &self.retry) {
                RetryDecision::Resolve(BenignReason::Conflict) => {
                    let message = match &err {
                        AppError::Http { message, .. } => message.as_str(),
                        _ => "",
                    };
                    tracing::warn!(path, "Conflict error (409): {}", message);
                    return Ok(None);
                }
                RetryDecision::Resolve(BenignReason::Unavailable) => {
                    tracing::warn!(path, "Server reports {} unavailable at the moment", path);
                    return Ok(None);
                }
                RetryDecision::RetrySameAttempt(delay) => {
                    tracing::info!(
                        path,
                        "Too many requests, retrying in {}ms",
                        delay.as_millis()
                    );
                    sleep(delay).await;
                }
                RetryDecision::RetryNextAttempt(delay) => {
                    tracing::info!(
                        path,
                        status = ?status,
                        "Retrying request... attempt {}/{}, delay={}ms",
                        attempt + 1,
                        max_attempts,
                        delay.as_millis()
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                RetryDecision::Raise => {
                    tracing::error!(path, status = ?status, "Request failed: {}", err);
                    return Err(err);
                }
            }
        }
    }
}

fn extract_error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = map.get("message").or_else(|| map.get("error")) {
            return message.clone();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn error_message_prefers_json_message_field() {
        assert_eq!(
            extract_error_message(r#"{"message":"Task already completed"}"#, StatusCode::CONFLICT),
            "Task already completed"
        );
        assert_eq!(
            extract_error_message(r#"{"error":"bad init data"}"#, StatusCode::UNAUTHORIZED),
            "bad init data"
        );
    }

    #[test]
    fn error_message_falls_back_to_body_or_reason() {
        assert_eq!(
            extract_error_message("upstream timeout", StatusCode::BAD_GATEWAY),
            "upstream timeout"
        );
        assert_eq!(
            extract_error_message("", StatusCode::BAD_GATEWAY),
            "Bad Gateway"
        );
        let long = "x".repeat(1000);
        assert_eq!(
            extract_error_message(&long, StatusCode::BAD_REQUEST).len(),
            MAX_ERROR_BODY_CHARS
        );
    }

    #[test]
    fn malformed_proxy_fails_client_construction() {
        let credential = AccountCredential::new("query_id=1", Some("http://no-creds:8080".into()));
        match ApiClient::new(&AppConfig::default(), &credential) {
            Err(AppError::Config(msg)) => assert!(msg.contains("missing credentials")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("client should not build with malformed proxy"),
        }
    }

    #[test]
    fn builds_client_without_proxy() {
        let credential = AccountCredential::new("query_id=1&user=%7B%7D", None);
        let client = ApiClient::new(&AppConfig::default(), &credential).expect("client");
        assert_eq!(client.retry_policy().max_attempts, 3);
        assert_eq!(client.url("/api/user/auth"), "https://tonclayton.fun/api/user/auth");
    }
}
