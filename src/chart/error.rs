use std::fmt::Display;

use thiserror::Error;

use crate::domain::DomainError;

/// Chart-level errors for rendering and mode selection
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("chart backend error: {0}")]
    Backend(String),

    #[error("unknown chart kind `{0}` (expected `average` or `per-test`)")]
    UnknownKind(String),

    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

impl ChartError {
    /// Wrap a plotters backend error.
    ///
    /// Plotters errors are generic over the backend, so they are carried as
    /// their rendered message rather than as a source chain.
    pub(crate) fn backend(err: impl Display) -> Self {
        Self::Backend(err.to_string())
    }
}
