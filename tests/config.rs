use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use fotmob_client::{Config, ConfigLocation, Error, FotmobClient, read_config};

fn write_config(name: &str, value: serde_json::Value) -> PathBuf {
    let mut cfg_path = PathBuf::from("target");
    cfg_path.push(format!("test-config-{}-{}.json", name, std::process::id()));
    fs::create_dir_all("target").ok();
    fs::write(&cfg_path, serde_json::to_string(&value).unwrap()).unwrap();
    cfg_path
}

#[tokio::test]
async fn reads_config_file_with_friendly_durations() {
    let path = write_config(
        "file",
        serde_json::json!({
            "api_base_url": "http://localhost:8080/api/",
            "bootstrap_url": "http://localhost:6006/",
            "fallback_token": "offline",
            "request_timeout": "3s",
            "cache_ttl": "PT1M"
        }),
    );

    let config = read_config(ConfigLocation::File(path.to_string_lossy().to_string()))
        .await
        .expect("config");
    assert_eq!(config.api_base_url, "http://localhost:8080/api/");
    assert_eq!(config.fallback_token, "offline");
    assert_eq!(config.request_timeout, Duration::from_secs(3));
    assert_eq!(config.cache_ttl, Duration::from_secs(60));
    assert_eq!(config.bootstrap_timeout, Duration::from_secs(5));
    assert_eq!(config.token_field, "x-mas");
}

#[tokio::test]
async fn invalid_config_file_is_rejected() {
    let path = write_config(
        "invalid",
        serde_json::json!({ "bootstrap_url": "://not-a-valid-url" }),
    );

    match read_config(ConfigLocation::File(path.to_string_lossy().to_string())).await {
        Err(Error::Config(msg)) => assert!(msg.contains("bootstrap_url")),
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn missing_config_file_is_io_error() {
    let res = read_config(ConfigLocation::File("target/does-not-exist.json".into())).await;
    assert!(matches!(res, Err(Error::Io(_))));
}

#[test]
fn env_overrides_defaults() {
    // SAFETY: this is the only test in this binary touching FOTMOB_* variables.
    unsafe {
        std::env::set_var("FOTMOB_FALLBACK_TOKEN", "from-env");
        std::env::set_var("FOTMOB_CACHE_TTL", "2m");
    }
    let config = Config::from_env().expect("env config");
    unsafe {
        std::env::remove_var("FOTMOB_FALLBACK_TOKEN");
        std::env::remove_var("FOTMOB_CACHE_TTL");
    }

    assert_eq!(config.fallback_token, "from-env");
    assert_eq!(config.cache_ttl, Duration::from_secs(120));
    assert_eq!(config.api_base_url, fotmob_client::config::DEFAULT_API_BASE_URL);
}

#[test]
fn client_rejects_invalid_config_before_network() {
    let mut config = Config::default();
    config.request_timeout = Duration::ZERO;
    match FotmobClient::new(config) {
        Err(Error::Config(msg)) => assert!(msg.contains("request_timeout")),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected config error"),
    }
}
