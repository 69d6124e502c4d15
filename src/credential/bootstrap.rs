use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::errors::Error;

/// Side-channel service handing out the dynamic credential.
#[derive(Clone, Debug)]
pub struct BootstrapEndpoint {
    http: Client,
    url: String,
    token_field: String,
    timeout: Duration,
}

impl BootstrapEndpoint {
    pub fn new(
        http: Client,
        url: impl Into<String>,
        token_field: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            url: url.into(),
            token_field: token_field.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Single GET against the bootstrap service. Never retried.
    pub async fn fetch_token(&self) -> Result<String, Error> {
        let resp = self
            .http
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::Bootstrap(format!("request to '{}' failed: {}", self.url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Bootstrap(format!(
                "status={} body='{}'",
                status, body
            )));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| Error::Bootstrap(format!("malformed response: {}", e)))?;
        debug!(url = %self.url, "bootstrap response decoded");
        extract_token(&body, &self.token_field)
    }
}

fn extract_token(body: &Value, field: &str) -> Result<String, Error> {
    match body.get(field) {
        Some(Value::String(token)) if !token.is_empty() => Ok(token.clone()),
        Some(Value::String(_)) => Err(Error::Bootstrap(format!("field '{}' is empty", field))),
        Some(other) => Err(Error::Bootstrap(format!(
            "field '{}' is not a string: {}",
            field, other
        ))),
        None => Err(Error::Bootstrap(format!("field '{}' missing", field))),
    }
}
