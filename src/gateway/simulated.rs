//! Stand-in gateway that pretends to deliver the message
//!
//! Waits a fixed delay, logs the payload and resolves. No network is touched;
//! a real client would implement [`SubmissionGateway`] the same way.

use super::traits::{FormValues, SubmissionError, SubmissionGateway};
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated round-trip time
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Gateway that resolves after a delay
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    /// When set, every send fails with this reason
    failure: Option<String>,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// Make every send fail with `reason`
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
    async fn send(&self, values: &FormValues) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;

        let payload: serde_json::Map<String, serde_json::Value> = values
            .iter()
            .map(|(field, value)| {
                (
                    field.key().to_string(),
                    serde_json::Value::String(value.clone()),
                )
            })
            .collect();
        tracing::info!(payload = %serde_json::Value::Object(payload), "form data submitted");

        match &self.failure {
            Some(reason) if reason.is_empty() => Err(SubmissionError::Unexpected),
            Some(reason) => Err(SubmissionError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}
