//! Where a validated contact form goes.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::validate::ContactFields;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("The message was rejected: {0}")]
    Rejected(String),
    #[error("The contact service is unavailable: {0}")]
    Unavailable(String),
}

/// Integration boundary for contact form submission.
///
/// A real backend implements this and is handed to the runtime scheduler.
/// Retries and backoff, if any, belong to the implementation.
#[async_trait]
pub trait SubmitSink: Send + Sync {
    /// Returns the name of this sink for logging.
    fn name(&self) -> &'static str;

    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError>;
}

/// Stand-in sink: waits `latency`, then accepts everything.
#[derive(Debug, Clone)]
pub struct SimulatedSink {
    latency: Duration,
}

impl SimulatedSink {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SubmitSink for SimulatedSink {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError> {
        tracing::debug!(email = %fields.email, "Simulating contact form submission");
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn simulated_sink_waits_then_succeeds() {
        let sink = SimulatedSink::new(Duration::from_millis(2000));
        let started = tokio::time::Instant::now();
        let result = sink.submit(&ContactFields::default()).await;
        assert!(result.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }
}
