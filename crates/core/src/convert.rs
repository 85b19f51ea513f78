//! Adapters between [`Outcome`] and the carriers Rust already has.
//!
//! - `std::result::Result` in both directions, so `?` keeps working.
//! - Unwinding panics (`std::thread::Result`), via [`Outcome::catching`].
//! - `either::Either`, with failures on the left.
//! - Iterators of outcomes, collected or partitioned.

use std::any::Any;
use std::panic::UnwindSafe;

use either::Either;
use itertools::Itertools;

use crate::{Error, Fallible, Outcome, Raised};

impl<V, E> From<std::result::Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: std::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for std::result::Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

impl<V, E> From<Either<E, V>> for Outcome<V, E> {
    #[inline]
    fn from(either: Either<E, V>) -> Self {
        match either {
            Either::Left(error) => Self::Failure(error),
            Either::Right(value) => Self::Success(value),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Either<E, V> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.fold(Either::Right, Either::Left)
    }
}

impl<V, E> Outcome<V, E> {
    /// Convert to a standard `Result` so a failure can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns the failure value as `Err`.
    #[inline]
    pub fn into_result(self) -> std::result::Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Split outcomes into their successes and their failures, keeping order.
    #[inline]
    pub fn partition<I>(outcomes: I) -> (Vec<V>, Vec<E>)
    where
        I: IntoIterator<Item = Self>,
    {
        outcomes.into_iter().partition_map(|outcome| match outcome {
            Self::Success(value) => itertools::Either::Left(value),
            Self::Failure(error) => itertools::Either::Right(error),
        })
    }
}

/// Collect successes into `C`, stopping at the first failure.
impl<V, E, C> FromIterator<Outcome<V, E>> for Outcome<C, E>
where
    C: FromIterator<V>,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        itertools::process_results(iter.into_iter().map(Outcome::into_result), |values| {
            values.collect()
        })
        .into()
    }
}

impl<V> Fallible<V> {
    /// Run `f`, turning a panic into a failure.
    ///
    /// An error raised by [`Outcome::get_or_throw`] is recovered: an [`Error`]
    /// comes back as itself, any other error as [`Error::Other`] wrapping the
    /// original. String payloads become [`Error::Panicked`].
    #[inline]
    pub fn catching<F>(f: F) -> Self
    where
        F: FnOnce() -> V + UnwindSafe,
    {
        Self::from_unwind(std::panic::catch_unwind(f))
    }

    /// Adapt the result of `std::panic::catch_unwind` or `JoinHandle::join`.
    #[inline]
    pub fn from_unwind(result: std::thread::Result<V>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(payload_into_error(payload)),
        }
    }
}

fn payload_into_error(payload: Box<dyn Any + Send>) -> Error {
    let payload = match payload.downcast::<Raised>() {
        Ok(raised) => return raised_into_error(*raised),
        Err(payload) => payload,
    };
    match payload.downcast::<Error>() {
        Ok(error) => *error,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|message| (*message).to_owned())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_owned());
            tracing::debug!(%message, "captured panic");
            Error::panicked(message)
        }
    }
}

fn raised_into_error(raised: Raised) -> Error {
    tracing::debug!(error = %raised, "recovered raised failure");
    match raised.downcast::<Error>() {
        Ok(error) => error,
        Err(raised) => Error::Other(raised.into_inner()),
    }
}
