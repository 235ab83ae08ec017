//! Trait abstraction for message delivery to enable mocking in tests

use crate::state::FieldId;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Submitted field values keyed by field
pub type FormValues = BTreeMap<FieldId, String>;

/// Reason shown when a failure carries no specific reason
pub const GENERIC_FAILURE: &str = "Unexpected error while sending the message";

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Rejected(String),
    #[error("request timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
    #[error("Unexpected error while sending the message")]
    Unexpected,
}

/// Delivers a completed contact form.
///
/// At most one call is in flight at a time; implementations get no retry or
/// idempotency guarantees beyond that.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Send the form values
    async fn send(&self, values: &FormValues) -> Result<(), SubmissionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_reason() {
        let err = SubmissionError::Rejected("mailbox full".to_string());
        assert_eq!(err.to_string(), "mailbox full");
    }

    #[test]
    fn test_timed_out_displays_seconds() {
        let err = SubmissionError::TimedOut(Duration::from_secs(30));
        assert_eq!(err.to_string(), "request timed out after 30s");
    }

    #[test]
    fn test_unexpected_uses_generic_reason() {
        assert_eq!(SubmissionError::Unexpected.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn test_mock_gateway_returns_configured_result() {
        let mut gateway = MockSubmissionGateway::new();
        gateway
            .expect_send()
            .times(1)
            .returning(|_| Err(SubmissionError::Unexpected));

        let result = tokio_test::block_on(gateway.send(&FormValues::new()));
        tokio_test::assert_err!(&result);
        assert_eq!(result, Err(SubmissionError::Unexpected));
    }

    #[test]
    fn test_gateway_usable_as_trait_object() {
        let mut gateway = MockSubmissionGateway::new();
        gateway.expect_send().returning(|_| Ok(()));

        let gateway: Box<dyn SubmissionGateway> = Box::new(gateway);
        tokio_test::assert_ok!(tokio_test::block_on(gateway.send(&FormValues::new())));
    }
}
