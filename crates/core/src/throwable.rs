//! Raising a failure through Rust's native unwinding.
//!
//! A raised error travels boxed inside a [`Raised`] panic payload. A caller
//! that wants it back can `catch_unwind`, `downcast::<Raised>()` and then
//! [`Raised::downcast`] to the original type, or run the code under
//! [`Outcome::catching`].

use std::convert::Infallible;
use std::fmt;

use crate::Outcome;

/// Errors that can be raised as an unwinding panic.
///
/// Implemented for every `std::error::Error + Send + Sync + 'static` type,
/// which includes [`crate::Error`] and any `thiserror` enum.
pub trait Throwable: std::error::Error + Send + Sync + 'static {
    /// Raise `self`. Never returns.
    ///
    /// # Panics
    ///
    /// Always: unwinds with `self` boxed in a [`Raised`] payload.
    #[inline]
    #[allow(clippy::panic)]
    fn throw(self) -> !
    where
        Self: Sized,
    {
        tracing::error!(error = %self, "raising failure");
        std::panic::panic_any(Raised(Box::new(self)))
    }
}

impl<E> Throwable for E where E: std::error::Error + Send + Sync + 'static {}

/// Panic payload carrying an error raised by [`Throwable::throw`].
#[derive(Debug)]
pub struct Raised(Box<dyn std::error::Error + Send + Sync>);

impl Raised {
    /// Recover the raised error as its original type.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when the error is not an `E`.
    #[inline]
    pub fn downcast<E: std::error::Error + 'static>(self) -> Result<E, Self> {
        self.0.downcast::<E>().map(|error| *error).map_err(Self)
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.0
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<V, E: Throwable> Outcome<V, E> {
    /// The success value. A failure is raised.
    ///
    /// # Panics
    ///
    /// On a failure, unwinds with the error inside a [`Raised`] payload.
    #[inline]
    pub fn get_or_throw(self) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => error.throw(),
        }
    }
}

impl<E: Throwable> Outcome<Infallible, E> {
    /// Raise the error of an outcome that can only be a failure.
    ///
    /// # Panics
    ///
    /// Always: unwinds with the error inside a [`Raised`] payload.
    #[inline]
    pub fn throw_exception(self) -> ! {
        self.into_error().throw()
    }
}
