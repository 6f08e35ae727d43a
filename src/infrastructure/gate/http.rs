//! HTTP gate client adapter

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{GateClient, GateError, GateResponse};
use crate::domain::timing::Duration;

/// Triggers the gate with an empty POST to a fixed URL
pub struct HttpGateClient {
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpGateClient {
    /// Create a client for `url` that gives up after `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, GateError> {
        let client = reqwest::Client::builder()
            .timeout(timeout.as_std())
            .build()
            .map_err(|e| GateError::Request(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            timeout,
            client,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Map a transport error onto the gate error taxonomy
    fn classify(&self, e: reqwest::Error) -> GateError {
        if e.is_timeout() {
            GateError::Timeout(self.timeout)
        } else if e.is_connect() {
            GateError::Connection(e.to_string())
        } else {
            GateError::Request(e.to_string())
        }
    }
}

#[async_trait]
impl GateClient for HttpGateClient {
    async fn trigger(&self) -> Result<GateResponse, GateError> {
        debug!("POST {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        // The body read is still bounded by the client timeout
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            return Err(GateError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(GateResponse {
            status: status.as_u16(),
            body,
        })
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
