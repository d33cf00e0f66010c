//! Configuration types for webfetch

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fetch behavior configuration (timeouts, redirects, TLS, body limits)
///
/// Every knob the underlying transport would otherwise default silently is an
/// explicit, bounded value here. `FetchConfig::default()` works out of the box;
/// [`validate`](FetchConfig::validate) is called by `Fetcher::new` before any
/// client is built.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Whole-request deadline, connection setup through last body byte
    /// (default: 30 seconds)
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// Connection establishment deadline (default: 10 seconds)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Duration,

    /// Maximum number of redirects to follow (default: 10)
    ///
    /// `0` disables redirect following entirely; a redirect response is then
    /// reported as an HTTP status failure. Exceeding a non-zero limit is
    /// reported by the transport layer.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Verify the peer TLS certificate against the system trust store
    /// (default: true)
    #[serde(default = "default_true")]
    pub verify_tls: bool,

    /// Maximum accepted response body size in bytes (None = unlimited)
    ///
    /// When set, a transfer whose body exceeds the cap is aborted mid-stream
    /// and reported as `Error::TransferAborted`.
    #[serde(default)]
    pub max_body_bytes: Option<u64>,

    /// User-Agent header sent with every request
    /// (default: `webfetch/<crate version>`)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            max_redirects: default_max_redirects(),
            verify_tls: true,
            max_body_bytes: None,
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    /// Validate the configuration, naming the offending key on failure
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::Config {
                message: "timeout must be non-zero".to_string(),
                key: Some("timeout".to_string()),
            });
        }
        if self.connect_timeout.is_zero() {
            return Err(Error::Config {
                message: "connect_timeout must be non-zero".to_string(),
                key: Some("connect_timeout".to_string()),
            });
        }
        if self.user_agent.is_empty() {
            return Err(Error::Config {
                message: "user_agent must not be empty".to_string(),
                key: Some("user_agent".to_string()),
            });
        }
        if self.max_body_bytes == Some(0) {
            return Err(Error::Config {
                message: "max_body_bytes must be non-zero when set".to_string(),
                key: Some("max_body_bytes".to_string()),
            });
        }
        Ok(())
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_max_redirects() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_user_agent() -> String {
    concat!("webfetch/", env!("CARGO_PKG_VERSION")).to_string()
}
