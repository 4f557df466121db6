//! The HTTP layer underneath [`YouTubeClient`](crate::YouTubeClient).
//!
//! The client only ever needs "GET this URL, give me the status and the body", so that is
//! all [`Transport`] asks for. [`ReqwestTransport`] is the implementation used by default.
//! Timeouts, proxies and connection reuse are configured on the [`reqwest::Client`] it wraps.

use std::future::Future;

/// Error type produced by a [`Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A completed HTTP exchange, whatever its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs plain GET requests.
///
/// An `Err` means the request did not complete at all. Any response that did arrive,
/// including 4xx and 5xx ones, is an `Ok`.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, BoxError>> + Send;
}

/// [`Transport`] backed by [`reqwest`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an already configured HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, BoxError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
