//! Tests of the startup availability probe
//!
//! These tests validate that:
//! 1. A healthy report with the credential present offers the chat.
//! 2. An explicit report missing either flag withholds it.
//! 3. Everything else, from HTML error pages to an unreachable backend,
//!    falls back to offering the chat.

use guide_chat::api::{Availability, ChatClient};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn healthy_backend_offers_chat() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/health/env");
        then.status(200).json_body(json!({"ok": true, "groq_present": true}));
    });

    let client = ChatClient::new(&server.base_url());
    assert_eq!(client.probe().await, Availability::Available);
    mock.assert();
}

#[tokio::test]
async fn missing_credential_withholds_chat() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health/env");
        then.status(200).json_body(json!({"ok": true, "groq_present": false}));
    });

    let client = ChatClient::new(&server.base_url());
    assert_eq!(client.probe().await, Availability::Unavailable);
}

#[tokio::test]
async fn error_status_with_health_envelope_still_decides() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health/env");
        then.status(503)
            .json_body(json!({"ok": false, "groq_present": false}));
    });

    let client = ChatClient::new(&server.base_url());
    assert_eq!(client.probe().await, Availability::Unavailable);
}

#[tokio::test]
async fn html_health_page_offers_chat() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health/env");
        then.status(200).body("<html>maintenance</html>");
    });

    let client = ChatClient::new(&server.base_url());
    assert_eq!(client.probe().await, Availability::Available);
}

#[tokio::test]
async fn missing_endpoint_offers_chat() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health/env");
        then.status(404).body("Not Found");
    });

    let client = ChatClient::new(&server.base_url());
    assert_eq!(client.probe().await, Availability::Available);
}

#[tokio::test]
async fn unreachable_backend_offers_chat() {
    let client = ChatClient::new("http://127.0.0.1:9");
    assert_eq!(client.probe().await, Availability::Available);
}
