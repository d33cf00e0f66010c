//! # webfetch
//!
//! Small, configurable HTTP GET fetch library.
//!
//! ## Design Philosophy
//!
//! webfetch is designed to be:
//! - **Explicit** - Redirect limits, timeouts, and TLS verification are
//!   bounded configuration values, never invisible transport defaults
//! - **Sensible defaults** - Works out of the box with zero configuration
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Stateless** - Every call is independent; nothing is shared between
//!   calls except the reusable client
//!
//! ## Quick Start
//!
//! ```no_run
//! use webfetch::{FetchConfig, Fetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = Fetcher::new(FetchConfig {
//!         max_redirects: 5,
//!         ..Default::default()
//!     })?;
//!
//!     match fetcher.fetch("https://www.example.com").await {
//!         Ok(response) => println!("{}", response.text()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Core fetcher implementation
pub mod fetcher;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::FetchConfig;
pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use types::Response;

/// Fetch a URL with default configuration.
///
/// Convenience for one-off calls; builds a throwaway [`Fetcher`] per call.
/// Programs fetching more than once should construct a `Fetcher` and reuse it
/// so the underlying client's connections are shared.
///
/// # Example
///
/// ```no_run
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let response = webfetch::fetch("https://www.example.com").await?;
///     println!("{} bytes", response.len());
///     Ok(())
/// }
/// ```
pub async fn fetch(url: &str) -> Result<Response> {
    Fetcher::new(FetchConfig::default())?.fetch(url).await
}
