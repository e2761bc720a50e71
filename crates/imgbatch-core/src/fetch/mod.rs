//! HTTP GET for image variants.
//!
//! [`Fetcher`] is the seam between the batch and the network; the batch only
//! sees a status, a reason phrase and a body. [`CurlFetcher`] is the libcurl
//! implementation.

mod client;
mod error;

pub use client::{CurlFetcher, CurlOptions};
pub use error::FetchError;

/// Response of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    /// Reason phrase from the final status line (may be empty, e.g. HTTP/2).
    pub reason: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// `"<code> <reason>"`, e.g. `"404 Not Found"`.
    pub fn status_text(&self) -> String {
        if self.reason.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.reason)
        }
    }
}

/// Blocking HTTP GET. Called from the tokio blocking pool, one request at a
/// time per fetch unit.
pub trait Fetcher: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}
