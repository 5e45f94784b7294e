//! Error type returned by the request template.

use thiserror::Error;

/// Failure of a single request. Nothing is retried; every variant reaches the caller.
#[derive(Debug, Error)]
pub enum RestError {
    /// The URL could not be parsed.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Curl reported an error (resolve, connect, timeout, TLS, ...).
    #[error("connection failed: {0}")]
    Connection(#[from] curl::Error),
    /// Reading or writing a connection stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Response status was rejected by the status check.
    #[error("HTTP {code}")]
    HttpStatus { code: u32 },
    /// The charset label (after alias correction) names no known encoding.
    #[error("unsupported charset {0:?}")]
    UnsupportedCharset(String),
    /// The body contains byte sequences that are invalid in the resolved charset.
    #[error("response body is not valid {charset}")]
    Decode { charset: String },
    /// The decoded body is not valid JSON for the requested type.
    #[error("malformed JSON response: {0}")]
    Json(#[source] serde_json::Error),
    /// A request value could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl RestError {
    /// HTTP status code, if the failure was a rejected status.
    pub fn status(&self) -> Option<u32> {
        match self {
            RestError::HttpStatus { code } => Some(*code),
            _ => None,
        }
    }
}
