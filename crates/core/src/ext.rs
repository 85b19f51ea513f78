//! Extension traits for moving onto the Outcome tracks and for logged unwrapping.

use std::fmt::Display;

use crate::Outcome;

/// Lift a standard `Result` into an [`Outcome`] in method position.
pub trait IntoOutcome<V, E> {
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E> IntoOutcome<V, E> for std::result::Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        self.into()
    }
}

/// Extension trait for Option types providing Outcome conversions.
pub trait OptionExt<V> {
    /// `Some` becomes a success, `None` becomes `Failure(error)`.
    fn ok_or_failure<E>(self, error: E) -> Outcome<V, E>;

    /// Like [`OptionExt::ok_or_failure`], building the error only when needed.
    fn ok_or_else_failure<E, F: FnOnce() -> E>(self, error: F) -> Outcome<V, E>;
}

impl<V> OptionExt<V> for Option<V> {
    #[inline]
    fn ok_or_failure<E>(self, error: E) -> Outcome<V, E> {
        self.ok_or(error).into()
    }

    #[inline]
    fn ok_or_else_failure<E, F: FnOnce() -> E>(self, error: F) -> Outcome<V, E> {
        self.ok_or_else(error).into()
    }
}

/// Unwrapping helpers that log the discarded failure.
pub trait OutcomeExt<V> {
    /// Convert to an Option, logging the error if present.
    fn value_logged(self) -> Option<V>;

    /// Get the value or a default, logging the error if present.
    fn get_or_default_logged(self, default: V) -> V;
}

impl<V, E: Display> OutcomeExt<V> for Outcome<V, E> {
    #[inline]
    fn value_logged(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(e) => {
                tracing::error!("Operation failed: {}", e);
                None
            }
        }
    }

    #[inline]
    fn get_or_default_logged(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}
