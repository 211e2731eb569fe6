//! Terminal results of data sources.

use thiserror::Error;

use crate::Payload;

/// Error carried by a rejected source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a single source once it has settled.
///
/// A sum type rather than a `Result` so that a rejected source reads as an
/// expected, recorded state instead of an error to propagate.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The source resolved with a payload.
    Fulfilled(Payload),
    /// The source failed. The error is kept for diagnostics only.
    Rejected(SourceError),
}

impl Outcome {
    /// Short status label used in logs.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Fulfilled(_) => "fulfilled",
            Self::Rejected(_) => "rejected",
        }
    }

    /// Returns the payload of a fulfilled outcome.
    #[must_use]
    pub fn into_payload(self) -> Option<Payload> {
        match self {
            Self::Fulfilled(payload) => Some(payload),
            Self::Rejected(_) => None,
        }
    }
}

impl From<Result<Payload, SourceError>> for Outcome {
    fn from(result: Result<Payload, SourceError>) -> Self {
        match result {
            Ok(payload) => Self::Fulfilled(payload),
            Err(err) => Self::Rejected(err),
        }
    }
}
