//! Trait abstraction for the submission gateway to enable mocking in tests

use crate::state::ContactFormData;
use anyhow::Result;
use async_trait::async_trait;

/// Outcome of a delivery attempt, as reported by the endpoint.
///
/// Both halves are ordinary data; a failed delivery is `success: false`
/// (or an `Err` from the transport), never an unwound panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub success: bool,
    pub message: String,
}

/// Delivery mechanism for a completed, validated form.
///
/// Single attempt per call; the workflow performs no automatic retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Deliver the submission and report the endpoint's verdict.
    async fn send(&self, submission: &ContactFormData) -> Result<SendOutcome>;
}
