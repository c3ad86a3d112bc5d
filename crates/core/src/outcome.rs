//! The `Outcome` container and its combinator algebra.
//!
//! An [`Outcome`] is either a `Success` holding a payload or a `Failure`
//! holding an error. Combinators consume the outcome and return a new one,
//! so chains of fallible steps read top to bottom without branching at each
//! stage:
//!
//! ```
//! use railway_core::{Error, Outcome};
//!
//! let label = Outcome::<i32>::success(42)
//!     .ensure(|v| *v > 0, Error::msg("value must be positive"))
//!     .map(|v| v.saturating_mul(2))
//!     .fold(|v| format!("Value: {v}"), |e| format!("Error: {e}"));
//!
//! assert_eq!(label, "Value: 84");
//! ```

use either::Either;

use crate::error::Error;

/// A value that is either a success holding `T` or a failure holding `E`.
///
/// The variant tag alone decides success or failure. A `Failure` whose error
/// is itself "empty" (for example `Outcome<T, Option<X>>::Failure(None)`) is
/// still a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E = Error> {
    /// Success carrying the payload.
    Success(T),
    /// Failure carrying the error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // ------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------

    /// Wrap a value as a success.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap an error as a failure.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Adapt a `(value, error)` pair: failure when `error` is present, success
    /// otherwise. The value is dropped on failure.
    pub fn wrap(value: T, error: Option<E>) -> Self {
        match error {
            Some(e) => Self::Failure(e),
            None => Self::Success(value),
        }
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// `true` iff this is a `Success`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` iff this is a `Failure`.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_ok()
    }

    /// Borrow the payload, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure(_) => None,
        }
    }

    /// Payload on success, `T::default()` on failure.
    ///
    /// Check [`is_ok`](Self::is_ok) first: a failure is indistinguishable from
    /// a success holding the default.
    #[must_use]
    pub fn val(&self) -> T
    where
        T: Default + Clone,
    {
        self.value().cloned().unwrap_or_default()
    }

    /// Borrow the error, if any. Always `None` on success.
    #[must_use]
    pub const fn err(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(e),
        }
    }

    /// `(val(), err())` in one call, cloned out of `self`.
    #[must_use]
    pub fn to_pair(&self) -> (T, Option<E>)
    where
        T: Default + Clone,
        E: Clone,
    {
        (self.val(), self.err().cloned())
    }

    /// Consume into a `(payload-or-default, error)` pair.
    #[must_use]
    pub fn into_pair(self) -> (T, Option<E>)
    where
        T: Default,
    {
        match self {
            Self::Success(v) => (v, None),
            Self::Failure(e) => (T::default(), Some(e)),
        }
    }

    /// View both arms by reference.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(v) => Outcome::Success(v),
            Self::Failure(e) => Outcome::Failure(e),
        }
    }

    // ------------------------------------------------------------------
    // Combinators
    // ------------------------------------------------------------------

    /// Replace a failure with `Success(fallback)`, discarding the error.
    pub fn fallback(self, fallback: T) -> Self {
        match self {
            Self::Success(v) => Self::Success(v),
            Self::Failure(_) => Self::Success(fallback),
        }
    }

    /// Like [`fallback`](Self::fallback), computing the replacement from the error.
    pub fn fallback_with<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) -> T,
    {
        match self {
            Self::Success(v) => Self::Success(v),
            Self::Failure(e) => Self::Success(f(&e)),
        }
    }

    /// Turn a success whose payload fails `predicate` into `Failure(error)`.
    ///
    /// Failures pass through and `predicate` is not called.
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.ensure_with(predicate, |_| error)
    }

    /// Like [`ensure`](Self::ensure), building the error from the rejected value.
    pub fn ensure_with<P, F>(self, predicate: P, make_error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Success(v) => {
                if predicate(&v) {
                    Self::Success(v)
                } else {
                    Self::Failure(make_error(v))
                }
            }
            Self::Failure(e) => Self::Failure(e),
        }
    }

    /// Call exactly one of the two callbacks, then return `self` unchanged.
    pub fn tap<S, F>(self, on_success: S, on_error: F) -> Self
    where
        S: FnOnce(&T),
        F: FnOnce(&E),
    {
        match &self {
            Self::Success(v) => on_success(v),
            Self::Failure(e) => on_error(e),
        }
        self
    }

    /// Observe the payload of a success.
    pub fn tap_success<S: FnOnce(&T)>(self, f: S) -> Self {
        if let Self::Success(ref v) = self {
            f(v);
        }
        self
    }

    /// Observe the error of a failure.
    pub fn tap_failure<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Self::Failure(ref e) = self {
            f(e);
        }
        self
    }

    /// Sequence a step that reports failure through a `(value, error)` pair.
    ///
    /// A failure short-circuits with its original error and `f` is not called.
    pub fn pipe<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> (U, Option<E>),
    {
        self.and_then(|v| {
            let (value, error) = f(v);
            Outcome::wrap(value, error)
        })
    }

    /// Sequence a step that returns an `Outcome` directly.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(v) => f(v),
            Self::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Sequence a step that returns a std `Result`.
    pub fn try_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.and_then(|v| f(v).into())
    }

    /// Transform the payload with an infallible function.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(v) => Outcome::Success(f(v)),
            Self::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Transform the error, leaving a success untouched.
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(v) => Outcome::Success(v),
            Self::Failure(e) => Outcome::Failure(f(e)),
        }
    }

    /// Map both arms in a single operation.
    pub fn bimap<U, E2, F, G>(self, ok_fn: F, err_fn: G) -> Outcome<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(v) => Outcome::Success(ok_fn(v)),
            Self::Failure(e) => Outcome::Failure(err_fn(e)),
        }
    }

    /// Recover from a failure with a step that may itself fail.
    pub fn or_else<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Self::Success(v) => Outcome::Success(v),
            Self::Failure(e) => f(e),
        }
    }

    /// Collapse into a plain value by calling exactly one of the two functions.
    pub fn fold<U, S, F>(self, on_success: S, on_error: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Success(v) => on_success(v),
            Self::Failure(e) => on_error(e),
        }
    }

    // ------------------------------------------------------------------
    // Conversions
    // ------------------------------------------------------------------

    /// Convert into a std `Result`.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Convert into `Either`, failure on the left.
    pub fn into_either(self) -> Either<E, T> {
        match self {
            Self::Success(v) => Either::Right(v),
            Self::Failure(e) => Either::Left(e),
        }
    }
}

impl<T> Outcome<T, Error> {
    /// Annotate a failure's error with what was being attempted.
    pub fn with_context<C, F>(self, context: F) -> Self
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::context(context(), e))
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::Success(v),
            Err(e) => Self::Failure(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(e) => Err(e),
        }
    }
}

impl<T, E> From<Either<E, T>> for Outcome<T, E> {
    fn from(either: Either<E, T>) -> Self {
        either.either(Self::Failure, Self::Success)
    }
}

impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    /// Collect payloads until the first failure, which is returned instead.
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}
