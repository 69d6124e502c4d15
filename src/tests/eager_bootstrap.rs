use std::sync::Arc;
use std::time::Duration;

use crate::FotmobClient;
use crate::credential::{BootstrapEndpoint, CredentialGate};
use crate::tests::test_support::{BOOTSTRAP_PATH, base_config};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn construction_starts_bootstrap_before_first_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(BOOTSTRAP_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"x-mas": "eager-token"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = FotmobClient::new(base_config(&server.uri())).expect("client");

    let mut seen = 0;
    for _ in 0..50 {
        seen = server.received_requests().await.map(|r| r.len()).unwrap_or(0);
        if seen > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(seen, 1, "bootstrap should run without any fetch");

    let credential = client.credential().await;
    assert_eq!(credential.value(), "eager-token");
    server.verify().await;
}

#[test]
fn prime_outside_runtime_defers_to_first_use() {
    let endpoint = BootstrapEndpoint::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9/bootstrap",
        "x-mas",
        Duration::from_millis(100),
    );
    let gate = Arc::new(CredentialGate::new(endpoint, "fallback"));
    assert!(!gate.prime());
    assert!(gate.resolved().is_none());
}
