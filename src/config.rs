//! read configuration from a file, the environment, or AWS Secrets Manager

use std::time::Duration;

use aws_config::BehaviorVersion;
use jiff::SignedDuration;
use serde::{Deserialize, Deserializer};

use crate::errors::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://www.fotmob.com/api/";
pub const DEFAULT_BOOTSTRAP_URL: &str = "http://46.101.91.154:6006/";
pub const DEFAULT_TOKEN_FIELD: &str = "x-mas";
pub const DEFAULT_FALLBACK_TOKEN: &str = "static-fallback-value";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; fotmob-client-rust/0.1.0)";

pub enum ConfigLocation {
    File(String),
    Env,
    Secret,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub bootstrap_url: String,
    /// JSON field of the bootstrap response holding the token.
    pub token_field: String,
    pub fallback_token: String,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub request_timeout: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub bootstrap_timeout: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            bootstrap_url: DEFAULT_BOOTSTRAP_URL.to_string(),
            token_field: DEFAULT_TOKEN_FIELD.to_string(),
            fallback_token: DEFAULT_FALLBACK_TOKEN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(10),
            bootstrap_timeout: Duration::from_secs(5),
            cache_ttl: Duration::from_secs(5 * 60),
        }
    }
}

impl Config {
    /// Default configuration pointed at custom API and bootstrap hosts.
    pub fn with_hosts(api_base_url: impl Into<String>, bootstrap_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            bootstrap_url: bootstrap_url.into(),
            ..Self::default()
        }
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Every `FOTMOB_*` variable is optional; unset ones keep their defaults.
    /// # ENV Vars
    /// * `FOTMOB_API_URL` - Base URL of the upstream API
    /// * `FOTMOB_BOOTSTRAP_URL` - URL of the credential bootstrap service
    /// * `FOTMOB_TOKEN_FIELD` - JSON field holding the token in the bootstrap response
    /// * `FOTMOB_FALLBACK_TOKEN` - Credential used when bootstrap fails
    /// * `FOTMOB_USER_AGENT` - Client identifier sent upstream
    /// * `FOTMOB_REQUEST_TIMEOUT`, `FOTMOB_BOOTSTRAP_TIMEOUT`, `FOTMOB_CACHE_TTL` - durations such as `10s` or `5m`
    pub fn from_env() -> Result<Self, Error> {
        let mut config = Config::default();
        if let Some(v) = env_var("FOTMOB_API_URL") {
            config.api_base_url = v;
        }
        if let Some(v) = env_var("FOTMOB_BOOTSTRAP_URL") {
            config.bootstrap_url = v;
        }
        if let Some(v) = env_var("FOTMOB_TOKEN_FIELD") {
            config.token_field = v;
        }
        if let Some(v) = env_var("FOTMOB_FALLBACK_TOKEN") {
            config.fallback_token = v;
        }
        if let Some(v) = env_var("FOTMOB_USER_AGENT") {
            config.user_agent = v;
        }
        if let Some(v) = env_var("FOTMOB_REQUEST_TIMEOUT") {
            config.request_timeout = parse_duration(&v)?;
        }
        if let Some(v) = env_var("FOTMOB_BOOTSTRAP_TIMEOUT") {
            config.bootstrap_timeout = parse_duration(&v)?;
        }
        if let Some(v) = env_var("FOTMOB_CACHE_TTL") {
            config.cache_ttl = parse_duration(&v)?;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (name, url) in [
            ("api_base_url", &self.api_base_url),
            ("bootstrap_url", &self.bootstrap_url),
        ] {
            reqwest::Url::parse(url)
                .map_err(|e| Error::Config(format!("Invalid {} '{}': {}", name, url, e)))?;
        }
        if self.token_field.is_empty() {
            return Err(Error::Config("token_field must not be empty".into()));
        }
        for (name, value) in [
            ("request_timeout", self.request_timeout),
            ("bootstrap_timeout", self.bootstrap_timeout),
            ("cache_ttl", self.cache_ttl),
        ] {
            if value.is_zero() {
                return Err(Error::Config(format!("{} must be > 0", name)));
            }
        }
        Ok(())
    }
}

pub async fn read_config(loc: ConfigLocation) -> Result<Config, Error> {
    let config = match loc {
        ConfigLocation::File(path) => Config::from_file(path)?,
        ConfigLocation::Env => Config::from_env()?,
        ConfigLocation::Secret => read_config_from_secret().await?,
    };
    config.validate()?;
    Ok(config)
}

async fn read_config_from_secret() -> Result<Config, Error> {
    let secret_arn = std::env::var("FOTMOB_CONFIG_SECRET_ARN")
        .map_err(|_| Error::Config("Missing FOTMOB_CONFIG_SECRET_ARN env var".to_string()))?;
    let client = aws_sdk_secretsmanager::Client::new(
        &aws_config::load_defaults(BehaviorVersion::latest()).await,
    );
    let resp = client
        .get_secret_value()
        .secret_id(secret_arn)
        .send()
        .await
        .map_err(|e| Error::Config(format!("Failed to get secret: {}", e)))?;
    let secret = match resp.secret_string() {
        Some(s) => Ok(s),
        None => Err(Error::Config(
            "Failed to get secret string, returned None".to_string(),
        )),
    }?;
    let config: Config = serde_json::from_str(secret)?;
    Ok(config)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Accepts the friendly (`10s`, `5m`, `1h 30m`) and ISO 8601 (`PT5M`) forms.
pub fn parse_duration(raw: &str) -> Result<Duration, Error> {
    let signed: SignedDuration = raw
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid duration '{}': {}", raw, e)))?;
    Duration::try_from(signed)
        .map_err(|_| Error::Config(format!("Duration '{}' must not be negative", raw)))
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_duration(&raw).map_err(serde::de::Error::custom)
}
