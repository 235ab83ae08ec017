//! Submission gateway module

mod simulated;
mod traits;

use std::time::Duration;

pub use simulated::{SimulatedGateway, DEFAULT_DELAY};
pub use traits::{FormValues, SubmissionError, SubmissionGateway, GENERIC_FAILURE};

#[cfg(test)]
pub use traits::MockSubmissionGateway;

/// Send `values` through `gateway`, giving up after `timeout` if one is set
pub async fn dispatch(
    gateway: &dyn SubmissionGateway,
    values: &FormValues,
    timeout: Option<Duration>,
) -> Result<(), SubmissionError> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, gateway.send(values))
            .await
            .map_err(|_| SubmissionError::TimedOut(limit))?,
        None => gateway.send(values).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_times_out_slow_gateway() {
        let gateway = SimulatedGateway::new(Duration::from_secs(60));
        let result = dispatch(&gateway, &FormValues::new(), Some(Duration::from_secs(5))).await;
        assert_eq!(
            result,
            Err(SubmissionError::TimedOut(Duration::from_secs(5)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_within_deadline_passes_result_through() {
        let gateway = SimulatedGateway::new(Duration::from_secs(1)).failing("nope");
        let result = dispatch(&gateway, &FormValues::new(), Some(Duration::from_secs(5))).await;
        assert_eq!(result, Err(SubmissionError::Rejected("nope".to_string())));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_without_timeout_waits() {
        let gateway = SimulatedGateway::new(Duration::from_secs(600));
        let result = dispatch(&gateway, &FormValues::new(), None).await;
        assert!(result.is_ok());
    }
}
