//! Core fetcher implementation.
//!
//! The [`Fetcher`] wraps one configured HTTP client and performs single GET
//! requests with it. Construction is the one-time transport setup; each call
//! owns its request, body stream, and sink exclusively, so concurrent calls on
//! a shared (or cloned) `Fetcher` never interfere with each other.

mod sink;


use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::types::Response;

use futures::StreamExt;
use sink::BufferSink;

/// HTTP GET fetcher (cloneable - the underlying client is reference-counted)
///
/// Create one `Fetcher` per process (or per distinct configuration) and share
/// it; building the client per call defeats its connection reuse.
///
/// # Example
///
/// ```no_run
/// use webfetch::{FetchConfig, Fetcher};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let fetcher = Fetcher::new(FetchConfig::default())?;
///     let response = fetcher.fetch("https://www.example.com").await?;
///     println!("{}", response.text());
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: reqwest::Client,
    config: std::sync::Arc<FetchConfig>,
}

impl Fetcher {
    /// Create a fetcher from the given configuration
    ///
    /// Validates the configuration and builds the HTTP client. No network
    /// activity happens here.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid, or
    /// `Error::Init` if the client could not be constructed.
    pub fn new(config: FetchConfig) -> Result<Self> {
        config.validate()?;

        let redirect_policy = if config.max_redirects == 0 {
            reqwest::redirect::Policy::none()
        } else {
            reqwest::redirect::Policy::limited(config.max_redirects)
        };

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(redirect_policy)
            .user_agent(config.user_agent.clone());

        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Init(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: std::sync::Arc::new(config),
        })
    }

    /// Perform a single GET request and return the response body
    ///
    /// The body is streamed chunk by chunk through an accumulation sink; a
    /// sink that consumes fewer bytes than offered aborts the transfer. After
    /// the body is fully received, a final status other than 200 is reported
    /// as a failure and the accumulated body is discarded.
    ///
    /// # Errors
    ///
    /// - `Error::Transport` — DNS, connection, TLS, timeout, redirect-limit,
    ///   or protocol failure (including malformed or empty URLs)
    /// - `Error::HttpStatus` — transfer completed with a non-200 final status
    /// - `Error::TransferAborted` — the configured body cap was exceeded
    pub async fn fetch(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();

        let mut body_sink = BufferSink::with_limit(self.config.max_body_bytes);
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            let accepted = body_sink.write(&chunk);
            if accepted < chunk.len() {
                tracing::warn!(
                    url = %final_url,
                    accumulated = body_sink.len(),
                    "response body exceeded configured cap, aborting transfer"
                );
                return Err(Error::TransferAborted {
                    accepted,
                    offered: chunk.len(),
                });
            }
        }

        if status != 200 {
            tracing::warn!(url = %final_url, status, "fetch failed with HTTP status");
            return Err(Error::HttpStatus { code: status });
        }

        tracing::debug!(url = %final_url, bytes = body_sink.len(), "fetch completed");
        Ok(Response::new(status, final_url, body_sink.into_bytes()))
    }

    /// Blocking variant of [`fetch`](Fetcher::fetch)
    ///
    /// Runs the request on a private current-thread runtime and blocks the
    /// calling thread for the full round trip. Must not be called from within
    /// an async runtime; doing so returns `Error::Io` instead of deadlocking.
    pub fn fetch_blocking(&self, url: &str) -> Result<Response> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(Error::Io(std::io::Error::other(
                "fetch_blocking called from within an async runtime; use fetch instead",
            )));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.fetch(url))
    }

    /// The configuration this fetcher was built with
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}
