use std::time::Instant;

use tracing::{Level, event};
use uuid::Uuid;

use crate::errors::Error;

/// Events for one bootstrap attempt, tied together by `attempt_id`.
#[derive(Clone, Debug)]
pub struct BootstrapTelemetry {
    attempt_id: Uuid,
    context: &'static str,
    started: Instant,
}

impl BootstrapTelemetry {
    /// Emits `bootstrap.start` and begins timing the attempt.
    pub fn start(context: &'static str, url: &str) -> Self {
        let telemetry = Self {
            attempt_id: Uuid::new_v4(),
            context,
            started: Instant::now(),
        };
        event!(
            Level::INFO,
            attempt_id = %telemetry.attempt_id,
            context = telemetry.context,
            url = %url,
            "bootstrap.start"
        );
        telemetry
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn emit_success(&self, token_len: usize) {
        event!(
            Level::INFO,
            attempt_id = %self.attempt_id,
            context = self.context,
            token_len,
            elapsed_ms = self.elapsed_ms(),
            "bootstrap.success"
        );
    }

    pub fn emit_fallback(&self, error: &Error) {
        event!(
            Level::ERROR,
            attempt_id = %self.attempt_id,
            context = self.context,
            elapsed_ms = self.elapsed_ms(),
            error = %error,
            "bootstrap.fallback: failed to fetch dynamic credential, using static fallback"
        );
    }
}
