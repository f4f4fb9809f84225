//! Typed error enum for the gateway crate.

use catalogue_core::{GENERIC_FAILURE_MESSAGE, SESSION_EXPIRED_MESSAGE};
use thiserror::Error;

/// Errors from catalogue API calls.
///
/// Transport failures (the request or its body went wrong) and application
/// rejections (the backend said no) are separate variants so callers can
/// show the server's text verbatim and keep transport details in the log.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("unexpected response (HTTP {status}): {body}")]
    Malformed { status: u16, body: String },
    #[error("{0}")]
    Rejected(String),
    #[error("not authenticated, redirected to {location}")]
    Unauthenticated { location: String },
    #[error("invalid base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl GatewayError {
    /// The request never produced a usable answer.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::HttpRequest(_) | Self::Malformed { .. } | Self::InvalidUrl { .. } | Self::ClientInit(_)
        )
    }

    /// The backend answered with a well-formed refusal.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Text to put in front of the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(reason) => reason.clone(),
            Self::Unauthenticated { .. } => SESSION_EXPIRED_MESSAGE.to_owned(),
            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}
