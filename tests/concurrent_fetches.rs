//! Tests for concurrent use of a shared fetcher
//!
//! These tests verify that independent calls on one `Fetcher` (or on clones
//! handed to separate tasks) keep their buffers and outcomes fully isolated,
//! and that the crate-level convenience function behaves like a
//! default-configured fetcher.

use tokio_test::assert_ok;
use webfetch::{Error, FetchConfig, Fetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn start_server_with_pages() -> MockServer {
    let server = MockServer::start().await;

    for (route, body) in [("/alpha", "alpha body"), ("/beta", "beta body")] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("nothing here"))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn shared_fetcher_across_spawned_tasks() {
    let server = start_server_with_pages().await;
    let fetcher = Fetcher::new(FetchConfig::default()).unwrap();

    let mut handles = Vec::new();
    for _ in 0..3 {
        let fetcher = fetcher.clone();
        let url = format!("{}/alpha", server.uri());
        handles.push(tokio::spawn(async move { fetcher.fetch(&url).await }));
    }

    for handle in handles {
        let response = assert_ok!(handle.await.unwrap());
        assert_eq!(response.text(), "alpha body");
    }
}

#[tokio::test]
async fn interleaved_success_and_failure_do_not_interfere() {
    let server = start_server_with_pages().await;
    let fetcher = Fetcher::new(FetchConfig::default()).unwrap();

    let alpha_url = format!("{}/alpha", server.uri());
    let gone_url = format!("{}/gone", server.uri());
    let beta_url = format!("{}/beta", server.uri());
    let (alpha, gone, beta) = tokio::join!(
        fetcher.fetch(&alpha_url),
        fetcher.fetch(&gone_url),
        fetcher.fetch(&beta_url),
    );

    assert_eq!(alpha.unwrap().text(), "alpha body");
    assert_eq!(beta.unwrap().text(), "beta body");
    match gone.unwrap_err() {
        Error::HttpStatus { code } => assert_eq!(code, 404),
        other => panic!("Expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn crate_level_fetch_uses_defaults() {
    let server = start_server_with_pages().await;

    let response = assert_ok!(webfetch::fetch(&format!("{}/beta", server.uri())).await);
    assert_eq!(response.text(), "beta body");

    let err = webfetch::fetch(&format!("{}/gone", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "HTTP status code: 404");
}

#[tokio::test]
async fn distinct_fetcher_instances_are_independent() {
    let server = start_server_with_pages().await;

    let strict = Fetcher::new(FetchConfig {
        max_body_bytes: Some(4),
        ..Default::default()
    })
    .unwrap();
    let lax = Fetcher::new(FetchConfig::default()).unwrap();

    let url = format!("{}/alpha", server.uri());
    let (capped, full) = tokio::join!(strict.fetch(&url), lax.fetch(&url));

    assert!(matches!(
        capped.unwrap_err(),
        Error::TransferAborted { .. }
    ));
    assert_eq!(full.unwrap().text(), "alpha body");
}
