//! Gate control port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::timing::Duration;

/// Successful answer from the gate endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateResponse {
    pub status: u16,
    pub body: String,
}

/// Gate trigger failures. All of them map to the error cue.
#[derive(Debug, Clone, Error)]
pub enum GateError {
    #[error("request timed out after {0}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("request failed: {0}")]
    Request(String),
}

/// Port for the remote gate actuation endpoint
#[async_trait]
pub trait GateClient: Send + Sync {
    /// Ask the gate to open. Must give up after the configured timeout.
    async fn trigger(&self) -> Result<GateResponse, GateError>;

    /// Human-readable endpoint for logs
    fn endpoint(&self) -> &str;
}
