use std::sync::Arc;
use std::time::Instant;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{cache::ResponseCache, credential::CredentialGate, errors::Error};

/// Header carrying the dynamic credential on every upstream call.
pub const CREDENTIAL_HEADER: &str = "x-mas";

/// Serves decoded upstream responses by logical key, reusing fresh results.
///
/// Concurrent misses for one key each hit upstream and the last write wins;
/// only the credential is single-flight.
pub struct CachingFetcher {
    http: Client,
    base_url: String,
    gate: Arc<CredentialGate>,
    cache: ResponseCache,
}

impl CachingFetcher {
    pub fn new(
        http: Client,
        base_url: impl Into<String>,
        gate: Arc<CredentialGate>,
        cache: ResponseCache,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            gate,
            cache,
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn gate(&self) -> Arc<CredentialGate> {
        Arc::clone(&self.gate)
    }

    pub fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key.trim_start_matches('/'))
    }

    pub async fn fetch(&self, key: &str) -> Result<Value, Error> {
        if let Some(value) = self.cache.get_fresh(key, Instant::now()).await {
            debug!(key = %key, "cache hit");
            return Ok(value);
        }
        debug!(key = %key, "cache miss");

        let credential = self.gate.current_value().await;
        let url = self.url_for(key);
        let value = self
            .request(&url, credential)
            .await
            .map_err(|source| {
                warn!(key = %key, status = ?source.status(), error = %source, "upstream request failed");
                Error::Upstream {
                    key: key.to_string(),
                    source,
                }
            })?;

        self.cache.insert(key, value.clone(), Instant::now()).await;
        info!(key = %key, "upstream response cached");
        Ok(value)
    }

    async fn request(&self, url: &str, credential: &str) -> Result<Value, reqwest::Error> {
        self.http
            .get(url)
            .header(CREDENTIAL_HEADER, credential)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}
