use super::{json_bodies, mock_client, request_count};
use crate::constants::endpoints;
use crate::models::GameConfig;
use crate::pipeline::game::{play, GameSession};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn instant_session() -> GameSession {
    let mut config = GameConfig::default();
    config.pacing_ms = 0;
    GameSession::from_config(&config)
}

async fn mount_game(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(endpoints::GAME_START))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"session": "s1"})))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path(endpoints::GAME_SAVE_TILE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path(endpoints::GAME_OVER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"earn": 42})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn reports_every_milestone_in_order_then_ends_once() {
    let server = MockServer::start().await;
    mount_game(&server).await;

    let result = play(&mock_client(&server), &instant_session())
        .await
        .expect("session completes");
    assert_eq!(result, Some(json!({"earn": 42})));

    let tiles: Vec<u64> = json_bodies(&server, endpoints::GAME_SAVE_TILE)
        .await
        .iter()
        .filter_map(|b| b.get("maxTile").and_then(Value::as_u64))
        .collect();
    assert_eq!(tiles, vec![2, 4, 8, 16, 32, 64, 128, 256]);

    assert_eq!(
        json_bodies(&server, endpoints::GAME_OVER).await,
        vec![json!({"multiplier": 1})]
    );
    assert_eq!(request_count(&server, endpoints::GAME_START).await, 1);

    let order: Vec<String> = server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(order.first().map(String::as_str), Some(endpoints::GAME_START));
    assert_eq!(order.last().map(String::as_str), Some(endpoints::GAME_OVER));
}

#[tokio::test]
async fn failed_save_tile_aborts_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoints::GAME_SAVE_TILE))
        .and(body_json(json!({"maxTile": 16})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "cheater"})))
        .mount(&server)
        .await;
    mount_game(&server).await;

    let err = play(&mock_client(&server), &instant_session())
        .await
        .expect_err("400 on save-tile aborts");
    assert_eq!(err.status(), Some(400));

    assert_eq!(request_count(&server, endpoints::GAME_SAVE_TILE).await, 4);
    assert_eq!(request_count(&server, endpoints::GAME_OVER).await, 0);
}

#[tokio::test]
async fn pacing_delay_is_applied_per_stage() {
    let server = MockServer::start().await;
    mount_game(&server).await;

    let session = GameSession {
        name: "1024".into(),
        milestones: vec![2, 4, 8],
        pacing: std::time::Duration::from_millis(30),
        multiplier: 1,
    };
    let started = std::time::Instant::now();
    play(&mock_client(&server), &session)
        .await
        .expect("session completes");
    assert!(started.elapsed() >= std::time::Duration::from_millis(90));
}
