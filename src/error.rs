//! Error types for webfetch
//!
//! One variant per failure class the fetcher can report:
//! - client construction failures (no network activity attempted)
//! - transport failures during the request itself
//! - completed transfers with a non-200 final status
//! - aborted transfers where the body sink refused bytes

use thiserror::Error;

/// Result type alias for webfetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for webfetch
///
/// A failed fetch never carries response bytes: whatever body was accumulated
/// before the failure was detected is discarded.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP client could not be constructed; no request was attempted
    #[error("failed to initialize HTTP client: {0}")]
    Init(String),

    /// DNS, connection, TLS, timeout, redirect-limit, or protocol failure
    /// while performing the request; the message comes from the transport
    /// library's own diagnostic
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The transfer completed but the final HTTP status was not 200
    #[error("HTTP status code: {code}")]
    HttpStatus {
        /// The final status code returned by the server
        code: u16,
    },

    /// The body sink consumed fewer bytes than it was offered, aborting the
    /// transfer (e.g. the configured body-size cap was exceeded)
    #[error("transfer aborted: body sink accepted {accepted} of {offered} bytes")]
    TransferAborted {
        /// Number of bytes the sink actually consumed from the last chunk
        accepted: usize,
        /// Number of bytes the last chunk offered
        offered: usize,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "timeout")
        key: Option<String>,
    },

    /// I/O error (e.g. the blocking wrapper could not start its runtime)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True if this error was reported by the transport layer (as opposed to
    /// being detected by the fetcher after a completed transfer)
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// The final HTTP status code, if this is a status failure
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { code } => Some(*code),
            _ => None,
        }
    }
}
