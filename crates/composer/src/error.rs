//! Error types for post composition.

use thiserror::Error;

/// Errors raised before or during composition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// Neither a topic nor free text was supplied.
    #[error("Select at least one topic or provide your own content to generate a post")]
    EmptyRequest,

    /// The free-text path was invoked with blank content.
    #[error("Content must not be empty")]
    EmptyContent,
}

pub type ComposeResult<T> = Result<T, ComposeError>;
