//! Error types for probe operations

use thiserror::Error;

/// Faults raised while configuring the probe or talking to the API
///
/// Application-level errors reported by the remote service (HTTP 200 with
/// an `error_code` body) are not faults: they decode into
/// [`crate::model::ApiReply::Error`] and are checked by scenarios.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Transport failure (connect, timeout, TLS, body read)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Response body was not the expected JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
}

/// Type alias for probe results
pub type ProbeResult<T> = Result<T, ProbeError>;
