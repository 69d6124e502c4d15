use std::sync::{Arc, Mutex, OnceLock};

use futures::future::{BoxFuture, FutureExt, Shared};
use tracing::{debug, error};

use crate::telemetry::bootstrap::BootstrapTelemetry;

use super::BootstrapEndpoint;

/// Outcome of the one bootstrap attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credential {
    Fetched(String),
    Fallback(String),
}

impl Credential {
    /// Header value to send upstream.
    pub fn value(&self) -> &str {
        match self {
            Credential::Fetched(value) | Credential::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Credential::Fallback(_))
    }
}

type Resolution = Shared<BoxFuture<'static, Credential>>;

/// Process-wide credential, resolved at most once.
///
/// The bootstrap call runs in its own task, owned by the gate. Callers only
/// wait on it, so a caller that gives up never cancels or restarts it. A
/// failed bootstrap resolves to the fallback value and is never attempted
/// again for the life of the gate.
pub struct CredentialGate {
    endpoint: BootstrapEndpoint,
    fallback: String,
    resolution: Mutex<Option<Resolution>>,
    resolved: OnceLock<Credential>,
}

impl CredentialGate {
    pub fn new(endpoint: BootstrapEndpoint, fallback: impl Into<String>) -> Self {
        Self {
            endpoint,
            fallback: fallback.into(),
            resolution: Mutex::new(None),
            resolved: OnceLock::new(),
        }
    }

    /// Starts resolution in the background so the first request does not pay
    /// the full bootstrap latency. Returns false when no tokio runtime is
    /// available, in which case resolution starts on first use.
    pub fn prime(&self) -> bool {
        if tokio::runtime::Handle::try_current().is_err() {
            debug!("no runtime available; credential resolves lazily");
            return false;
        }
        self.resolution();
        true
    }

    pub async fn ensure_ready(&self) -> &Credential {
        if let Some(credential) = self.resolved.get() {
            return credential;
        }
        let credential = self.resolution().await;
        self.resolved.get_or_init(|| credential)
    }

    /// Resolves first if needed, so the value is never read unresolved.
    pub async fn current_value(&self) -> &str {
        self.ensure_ready().await.value()
    }

    /// Non-blocking peek for diagnostics.
    pub fn resolved(&self) -> Option<&Credential> {
        self.resolved.get()
    }

    /// The single shared resolution, spawned on first call.
    fn resolution(&self) -> Resolution {
        let mut slot = self
            .resolution
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.get_or_insert_with(|| {
            let fallback = self.fallback.clone();
            let task = tokio::spawn(resolve(self.endpoint.clone(), fallback.clone()));
            async move {
                task.await.unwrap_or_else(|err| {
                    error!(error = %err, "bootstrap task did not complete; using static fallback");
                    Credential::Fallback(fallback)
                })
            }
            .boxed()
            .shared()
        })
        .clone()
    }
}

async fn resolve(endpoint: BootstrapEndpoint, fallback: String) -> Credential {
    let telemetry = BootstrapTelemetry::start("credential.bootstrap", endpoint.url());
    match endpoint.fetch_token().await {
        Ok(token) => {
            telemetry.emit_success(token.len());
            Credential::Fetched(token)
        }
        Err(err) => {
            telemetry.emit_fallback(&err);
            Credential::Fallback(fallback)
        }
    }
}
