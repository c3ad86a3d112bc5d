//! Extension traits for Railway-Oriented Programming.
//!
//! Logged helpers for [`Outcome`] and bridges from the shapes fallible code
//! usually produces: std `Result`, `Option`, and `(value, error)` pairs.
//! The container itself never logs; only the `*_logged` methods here do.

use std::fmt::Display;

use crate::outcome::Outcome;

/// Logged combinators for outcomes whose error can be displayed.
pub trait OutcomeExt<T, E> {
    /// Convert to an `Option`, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;

    /// [`Outcome::fallback`], logging the discarded error at warn level.
    fn fallback_logged(self, fallback: T) -> Outcome<T, E>;

    /// Inspect the error without consuming the outcome.
    fn inspect_error<F: FnOnce(&E)>(self, f: F) -> Outcome<T, E>;
}

impl<T, E: Display> OutcomeExt<T, E> for Outcome<T, E> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(e) => {
                tracing::error!("Operation failed: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                default
            }
        }
    }

    fn fallback_logged(self, fallback: T) -> Outcome<T, E> {
        self.tap_failure(|e| tracing::warn!(error = %e, "Falling back after failure"))
            .fallback(fallback)
    }

    fn inspect_error<F: FnOnce(&E)>(self, f: F) -> Outcome<T, E> {
        self.tap_failure(f)
    }
}

/// Lift a std `Result` into an [`Outcome`].
pub trait ResultExt<T, E> {
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

/// Lift a `(value, error)` pair into an [`Outcome`], as [`Outcome::wrap`] does.
pub trait PairExt<T, E> {
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> PairExt<T, E> for (T, Option<E>) {
    fn into_outcome(self) -> Outcome<T, E> {
        let (value, error) = self;
        Outcome::wrap(value, error)
    }
}

/// Extension trait for Option types providing Railway-style operations.
pub trait OptionExt<T> {
    /// `Success` for `Some`, `Failure(error)` for `None`.
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E>;

    /// Like [`ok_or_failure`](Self::ok_or_failure) with a lazily built error.
    fn ok_or_failure_with<E, F: FnOnce() -> E>(self, err: F) -> Outcome<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E> {
        self.ok_or(error).into()
    }

    fn ok_or_failure_with<E, F: FnOnce() -> E>(self, err: F) -> Outcome<T, E> {
        self.ok_or_else(err).into()
    }
}
