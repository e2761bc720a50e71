//! Fetch error type.

use std::fmt;

/// Failure of a single GET, before a usable response exists.
#[derive(Debug)]
pub enum FetchError {
    /// No response status was received (DNS, connect, TLS, invalid URL...).
    Transport(curl::Error),
    /// A 200 status arrived but the transfer broke while reading the body.
    Body(curl::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "{}", e),
            FetchError::Body(e) => write!(f, "body read failed: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) | FetchError::Body(e) => Some(e),
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Transport(e)
    }
}
