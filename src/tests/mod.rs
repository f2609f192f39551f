mod game_session;

use crate::models::{AccountCredential, AppConfig};
use crate::test_utils::fast_config;
use crate::upstream::ApiClient;
use serde_json::Value;
use wiremock::MockServer;

pub(crate) const ALICE_INIT_DATA: &str =
    "query_id=AAA&user=%7B%22id%22%3A1%2C%22first_name%22%3A%22Alice%22%7D&hash=a1";
pub(crate) const BOB_INIT_DATA: &str =
    "query_id=BBB&user=%7B%22id%22%3A2%2C%22first_name%22%3A%22Bob%22%7D&hash=b2";

pub(crate) fn mock_config(server: &MockServer) -> AppConfig {
    fast_config(&server.uri())
}

pub(crate) fn mock_client(server: &MockServer) -> ApiClient {
    mock_client_with(&mock_config(server))
}

pub(crate) fn mock_client_with(config: &AppConfig) -> ApiClient {
    ApiClient::new(config, &AccountCredential::new(ALICE_INIT_DATA, None))
        .expect("build client for mock server")
}

/// JSON bodies of every request the server saw on `path`, in arrival order.
pub(crate) async fn json_bodies(server: &MockServer, path: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|req| req.url.path() == path)
        .map(|req| serde_json::from_slice(&req.body).unwrap_or(Value::Null))
        .collect()
}

pub(crate) async fn request_count(server: &MockServer, path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|req| req.url.path() == path)
        .count()
}
