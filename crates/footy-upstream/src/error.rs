//! Error types for API-Sports communication.

use thiserror::Error;

/// Errors that can occur while talking to API-Sports.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP request could not be completed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// API-Sports answered non-2xx with a decodable error envelope.
    #[error("upstream returned {status}: {message}")]
    Upstream {
        /// HTTP status code received from API-Sports.
        status: u16,
        /// Message from the upstream error envelope.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// The HTTP status code this error carries. Transport and decode
    /// failures map to 500; upstream errors keep the original code.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Transport(_) | Self::Decode(_) => 500,
        }
    }
}
