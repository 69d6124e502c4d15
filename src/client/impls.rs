use std::sync::Arc;
use std::time::Instant;

use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::info;

use crate::{
    FotmobClient,
    cache::ResponseCache,
    config::Config,
    credential::{BootstrapEndpoint, Credential, CredentialGate},
    errors::Error,
    fetcher::CachingFetcher,
    query::{LeagueQuery, MatchDetailsQuery},
};

impl FotmobClient {
    /// Create a new FotmobClient
    /// # Arguments
    /// * `config` - Explicit configuration (`Config`), typically loaded via `Config::from_file`, `Config::from_env` or `read_config`.
    ///
    /// Credential bootstrap starts in the background immediately when called
    /// inside a tokio runtime.
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        let endpoint = BootstrapEndpoint::new(
            http.clone(),
            config.bootstrap_url.as_str(),
            config.token_field.as_str(),
            config.bootstrap_timeout,
        );
        let gate = Arc::new(CredentialGate::new(endpoint, config.fallback_token.as_str()));
        let primed = gate.prime();

        let fetcher = CachingFetcher::new(
            http,
            config.api_base_url.as_str(),
            gate,
            ResponseCache::new(config.cache_ttl),
        );
        info!(
            "client ready: api='{}' bootstrap='{}' ttl={:?} primed={}",
            config.api_base_url, config.bootstrap_url, config.cache_ttl, primed
        );

        Ok(Self {
            fetcher: Arc::new(fetcher),
        })
    }

    /// Fetch a logical key such as `leagues?id=47&tab=table&type=league&timeZone=UTC`.
    pub async fn fetch(&self, key: &str) -> Result<Value, Error> {
        self.fetcher.fetch(key).await
    }

    pub async fn fetch_league(&self, query: &LeagueQuery) -> Result<Value, Error> {
        let key = query.key()?;
        self.fetcher.fetch(&key).await
    }

    pub async fn fetch_match_details(&self, query: &MatchDetailsQuery) -> Result<Value, Error> {
        let key = query.key()?;
        self.fetcher.fetch(&key).await
    }

    /// League data with the default tab and time zone.
    pub async fn league(&self, id: impl ToString) -> Result<Value, Error> {
        self.fetch_league(&LeagueQuery::new(id)).await
    }

    /// Match details with the default time zone.
    pub async fn match_details(&self, id: impl ToString) -> Result<Value, Error> {
        self.fetch_match_details(&MatchDetailsQuery::new(id)).await
    }

    /// Waits for the credential to resolve and returns it.
    pub async fn credential(&self) -> Credential {
        let gate = self.fetcher.gate();
        gate.ensure_ready().await.clone()
    }

    /// Keys currently served from cache.
    pub async fn cached_entries(&self) -> Vec<String> {
        self.fetcher.cache().fresh_keys(Instant::now()).await
    }
}
