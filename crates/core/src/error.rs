//! Default error type carried by a failed [`Outcome`](crate::Outcome).
//!
//! Errors are plain data: comparable, cloneable, and renderable as text.
//! Nothing in this crate raises them.

use thiserror::Error;

/// Core error type for railway operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// Free-form failure message.
    #[error("{0}")]
    Message(String),

    /// A value was rejected by a predicate.
    #[error("condition not satisfied: {reason}")]
    Unsatisfied { reason: String },

    /// An inner error annotated with what was being attempted.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a message error.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Create an unsatisfied-condition error.
    pub fn unsatisfied(reason: impl Into<String>) -> Self {
        Self::Unsatisfied {
            reason: reason.into(),
        }
    }

    /// Wrap an error with context.
    pub fn context(context: impl Into<String>, source: Self) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Capture the textual description of any foreign error.
    #[must_use]
    pub fn from_std(error: &dyn std::error::Error) -> Self {
        Self::Message(error.to_string())
    }

    /// Innermost error of a context chain.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::msg(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}
