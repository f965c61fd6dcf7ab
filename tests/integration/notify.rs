//! Credential resolution in front of delivery.

use signal_vault::config::{TELEGRAM_API_URL, TELEGRAM_BOT_TOKEN, TELEGRAM_CHAT_ID};
use signal_vault::core::notify::{connect, send_with_lookup, ANNOUNCEMENT_MESSAGE};
use signal_vault::{ConfigError, Error};
use wiremock::MockServer;

use crate::test_utils::{lookup, mock_send_message, CHAT_ID, TOKEN};

#[tokio::test]
async fn missing_credentials_make_no_network_calls() {
    let server = MockServer::start().await;
    mock_send_message(&server, 1).await;
    let uri = server.uri();

    let err = send_with_lookup(lookup(&[(TELEGRAM_API_URL, uri.as_str())]), "hello")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Config(ConfigError::MissingVar(TELEGRAM_BOT_TOKEN))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_chat_id_is_reported_by_name() {
    let err = connect(lookup(&[(TELEGRAM_BOT_TOKEN, TOKEN)])).err().unwrap();
    assert!(err.to_string().contains("TELEGRAM_CHAT_ID"));
}

#[tokio::test]
async fn sends_through_resolved_config() {
    let server = MockServer::start().await;
    mock_send_message(&server, 99).await;
    let uri = server.uri();

    let receipt = send_with_lookup(
        lookup(&[
            (TELEGRAM_BOT_TOKEN, TOKEN),
            (TELEGRAM_CHAT_ID, CHAT_ID),
            (TELEGRAM_API_URL, uri.as_str()),
        ]),
        ANNOUNCEMENT_MESSAGE,
    )
    .await
    .expect("message delivered");

    assert_eq!(receipt.message_id, 99);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["text"], ANNOUNCEMENT_MESSAGE);
}
