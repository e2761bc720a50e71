//! libcurl-backed [`Fetcher`].

use std::str;
use std::time::Duration;

use super::{FetchError, Fetcher, HttpResponse};

/// Transfer options. `None` leaves libcurl's default (no timeout).
#[derive(Debug, Clone, Default)]
pub struct CurlOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

/// One fresh `Easy` handle per request; the handle is not shared between
/// fetch units.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: CurlOptions,
}

impl CurlFetcher {
    pub fn new(options: CurlOptions) -> Self {
        Self { options }
    }
}

impl Fetcher for CurlFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let mut body = Vec::new();
        let mut status_line: Option<String> = None;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(t) = self.options.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = self.options.timeout {
            easy.timeout(t)?;
        }
        if let Some(ua) = &self.options.user_agent {
            easy.useragent(ua)?;
        }

        let performed = {
            let mut transfer = easy.transfer();
            // Redirects produce one status line per hop; keep the last one.
            transfer.header_function(|data| {
                if let Ok(line) = str::from_utf8(data) {
                    if line.starts_with("HTTP/") {
                        status_line = Some(line.trim_end().to_string());
                    }
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };

        let status = easy.response_code().unwrap_or(0);
        if let Err(e) = performed {
            match status {
                0 => return Err(FetchError::Transport(e)),
                200 => return Err(FetchError::Body(e)),
                _ => tracing::debug!("transfer of {} ended early after HTTP {}: {}", url, status, e),
            }
        }

        let reason = status_line
            .as_deref()
            .and_then(reason_phrase)
            .unwrap_or_default();
        Ok(HttpResponse {
            status,
            reason,
            body,
        })
    }
}

/// Reason phrase of an HTTP status line: `HTTP/1.1 404 Not Found` gives
/// `Not Found`.
fn reason_phrase(line: &str) -> Option<String> {
    let mut parts = line.splitn(3, ' ');
    let version = parts.next()?;
    if !version.starts_with("HTTP/") {
        return None;
    }
    parts.next()?.parse::<u32>().ok()?;
    Some(parts.next().unwrap_or("").trim().to_string())
}
