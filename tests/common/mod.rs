#![allow(dead_code)]

use std::time::Duration;

use fotmob_client::Config;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const BOOTSTRAP_PATH: &str = "/bootstrap";

pub fn config(server: &MockServer) -> Config {
    let mut config = Config::with_hosts(
        format!("{}/api/", server.uri()),
        format!("{}{}", server.uri(), BOOTSTRAP_PATH),
    );
    config.bootstrap_timeout = Duration::from_millis(300);
    config.request_timeout = Duration::from_secs(2);
    config
}

/// Bootstrap answering with `token`, expected exactly once.
pub async fn mount_bootstrap(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path(BOOTSTRAP_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "x-mas": token })))
        .expect(1)
        .mount(server)
        .await;
}
