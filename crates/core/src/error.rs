//! The universal failure type for Outcome-based code.
//!
//! Plays the role a platform "throwable" plays elsewhere: any error can be
//! boxed into it, panics captured by [`Outcome::catching`] land in it, and it
//! satisfies [`Throwable`] so it can be raised again.
//!
//! [`Outcome::catching`]: crate::Outcome::catching
//! [`Throwable`]: crate::Throwable

use thiserror::Error;

use crate::Outcome;

/// An [`Outcome`] whose failure channel carries the universal [`Error`].
pub type Fallible<V> = Outcome<V, Error>;

/// Core failure type.
#[derive(Debug, Error)]
pub enum Error {
    /// A panic captured while running a closure under `catching`.
    #[error("panicked: {message}")]
    Panicked { message: String },

    #[error("{0}")]
    Message(String),

    /// Any other error, boxed.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create a free-form failure.
    #[inline]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Create a captured-panic failure.
    #[inline]
    pub fn panicked(message: impl Into<String>) -> Self {
        Self::Panicked {
            message: message.into(),
        }
    }

    /// Box an arbitrary error.
    #[inline]
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(error))
    }

    /// Whether this failure came from a captured panic.
    #[inline]
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }
}
