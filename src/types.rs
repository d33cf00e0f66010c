//! Core types for webfetch

use url::Url;

/// A successfully fetched HTTP response
///
/// Only produced when the transfer completed without a transport error and the
/// final status code was exactly 200, so `status()` is 200 on every value a
/// caller can observe. The body is owned by this value and dropped with it.
#[derive(Clone, Debug)]
pub struct Response {
    status: u16,
    final_url: Url,
    body: Vec<u8>,
}

impl Response {
    pub(crate) fn new(status: u16, final_url: Url, body: Vec<u8>) -> Self {
        Self {
            status,
            final_url,
            body,
        }
    }

    /// The final HTTP status code (200 on the success path)
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The URL the body was ultimately served from, after any redirects
    pub fn final_url(&self) -> &Url {
        &self.final_url
    }

    /// The accumulated response body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The response body as text, replacing invalid UTF-8 sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Consume the response and take ownership of the body bytes
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Body length in bytes
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// True if the body is empty
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
