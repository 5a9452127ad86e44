//! Errors surfaced by the authoring session and HTTP functions.

use composer::ComposeError;
use gateway::{ErrorKind, GatewayError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudioError {
    /// The action is missing input the user has to supply
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl StudioError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::Compose(_) => ErrorKind::Validation,
            Self::Gateway(err) => err.kind(),
        }
    }
}

pub type StudioResult<T> = Result<T, StudioError>;
