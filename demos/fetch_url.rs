//! Basic fetch example
//!
//! This example demonstrates the core functionality of webfetch:
//! - Building a configuration
//! - Creating a fetcher instance
//! - Fetching a URL and handling the outcome
//!
//! Run with: `cargo run --example fetch_url -- https://www.example.com`

use webfetch::{FetchConfig, Fetcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.example.com".to_string());

    // Build configuration with explicit bounds
    let config = FetchConfig {
        timeout: std::time::Duration::from_secs(15),
        max_redirects: 5,
        ..Default::default()
    };

    // Create fetcher instance (reusable across calls)
    let fetcher = Fetcher::new(config)?;

    match fetcher.fetch(&url).await {
        Ok(response) => {
            println!("Response from {}:", response.final_url());
            println!("{}", response.text());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
