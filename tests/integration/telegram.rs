//! Telegram Bot API client against a mocked server.

use serde_json::json;
use signal_vault::config::TelegramConfig;
use signal_vault::services::notifier::Notifier;
use signal_vault::services::telegram::TelegramClient;
use signal_vault::TransportError;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{bot_path, mock_get_me, mock_send_message, telegram_client, CHAT_ID, TOKEN};

#[tokio::test]
async fn get_me_returns_bot_identity() {
    let server = MockServer::start().await;
    mock_get_me(&server).await;

    let me = telegram_client(&server).get_me().await.expect("getMe succeeds");
    assert_eq!(me.username.as_deref(), Some("sv_intelligence_bot"));
    assert_eq!(me.display(), "@sv_intelligence_bot (Signal Vault)");
}

#[tokio::test]
async fn send_text_posts_chat_id_and_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(bot_path("sendMessage")))
        .and(body_json(json!({"chat_id": 6475054244i64, "text": "📊 hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": {"message_id": 42, "date": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = telegram_client(&server)
        .send_text("📊 hello")
        .await
        .expect("delivery succeeds");
    assert_eq!(receipt.message_id, 42);
    assert_eq!(receipt.chat_id, CHAT_ID);
}

#[tokio::test]
async fn http_error_is_reported_once_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(bot_path("sendMessage")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = telegram_client(&server).send_text("hello").await.unwrap_err();
    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "Bad Request: chat not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn ok_false_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(bot_path("getMe")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "error_code": 401,
            "description": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let err = telegram_client(&server).get_me().await.unwrap_err();
    assert!(matches!(
        err,
        TransportError::Api { code: Some(401), ref description } if description == "Unauthorized"
    ));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(bot_path("sendMessage")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = telegram_client(&server).send_text("hello").await.unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}

#[tokio::test]
async fn network_error_does_not_leak_token() {
    let config = TelegramConfig::new(TOKEN, CHAT_ID).with_api_base_url("http://127.0.0.1:9");
    let client = TelegramClient::with_client(config, reqwest::Client::new());

    let err = client.send_text("hello").await.unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));
    assert!(!err.to_string().contains(TOKEN));
    assert!(!format!("{err:?}").contains(TOKEN));
}

#[tokio::test]
async fn get_me_then_send() {
    let server = MockServer::start().await;
    mock_get_me(&server).await;
    mock_send_message(&server, 7).await;

    let client = telegram_client(&server);
    client.get_me().await.expect("getMe succeeds");
    let receipt = client.send_text("ping").await.expect("send succeeds");
    assert_eq!(receipt.message_id, 7);

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 2);
}
