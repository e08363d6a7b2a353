//! Error types for the fitadmin client

use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// Outbound headers could not be built; no request was dispatched.
    #[error("request preparation failed: {0}")]
    RequestPreparation(String),

    /// No response reached us at all (connect failure, timeout, DNS).
    /// Stored credentials are left untouched.
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The server answered with a non-success status. Rotation headers, if
    /// any, were already harvested before this error was built.
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// HTTP status carried by this error, if it came from a server reply.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
