//! Submission gateway module for delivering contact messages

mod client;
mod traits;

pub use client::HttpGateway;
pub use traits::{SendOutcome, SubmissionGateway};

#[cfg(test)]
pub use traits::MockSubmissionGateway;
