//! Error types for the external gateways.

use composer::ComposeError;
use thiserror::Error;
use tracing::warn;

/// Broad failure class, used to decide how a failure is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied incomplete input; nothing was sent.
    Validation,
    /// A required handshake or configuration is missing; nothing was sent.
    Precondition,
    /// The remote service failed or could not be reached.
    Upstream,
    /// A local failure unrelated to the input.
    Internal,
}

/// Errors that can occur when talking to an external service.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No access token from a prior identity handshake
    #[error("Not connected to LinkedIn")]
    NotConnected,

    /// Service credentials are missing
    #[error("{0} not configured")]
    NotConfigured(&'static str),

    /// A required request field is missing or blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The generation request itself is invalid
    #[error(transparent)]
    Compose(#[from] ComposeError),

    /// The service answered with a non-success status
    #[error("{service} returned {status}: {message}")]
    Upstream {
        service: &'static str,
        status: u16,
        message: String,
    },

    /// The service answered successfully but reported a failure in its body
    #[error("{service} reported an error: {message}")]
    Rejected {
        service: &'static str,
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not have the expected shape
    #[error("Unexpected response from {service}: {reason}")]
    Decode {
        service: &'static str,
        reason: String,
    },

    /// E-mail body rendering failed
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

impl GatewayError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField(_) | Self::Compose(_) => ErrorKind::Validation,
            Self::NotConnected | Self::NotConfigured(_) => ErrorKind::Precondition,
            Self::Upstream { .. } | Self::Rejected { .. } | Self::Http(_) | Self::Decode { .. } => {
                ErrorKind::Upstream
            }
            Self::Template(_) => ErrorKind::Internal,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Pass successful responses through; turn anything else into
/// [`GatewayError::Upstream`] carrying the status and body.
pub(crate) async fn ensure_success(
    service: &'static str,
    response: reqwest::Response,
) -> GatewayResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    warn!(
        service,
        status = %status,
        body = %body,
        "Upstream request failed"
    );

    Err(GatewayError::Upstream {
        service,
        status: status.as_u16(),
        message: body,
    })
}

/// Reject blank required fields before any request is made.
pub(crate) fn require<'a>(field: &'static str, value: &'a str) -> GatewayResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(GatewayError::MissingField(field))
    } else {
        Ok(value)
    }
}
