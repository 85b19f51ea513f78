//! The two-track [`Outcome`] type and its combinator algebra.
//!
//! Every combinator consumes the receiver and returns a new value; nothing is
//! mutated in place. Callbacks run at most once and are never wrapped in an
//! unwind boundary: a panic inside a callback reaches the caller untouched.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

/// Either a success value or a failure value. Never both, never neither.
///
/// # Examples
///
/// ```
/// use railway_core::Outcome;
///
/// let doubled = Outcome::<i32, &str>::success(5)
///     .map(|x| x * 2)
///     .get_or_default(0);
/// assert_eq!(doubled, 10);
///
/// let fallback = Outcome::<i32, &str>::failure("bad")
///     .map(|x| x * 2)
///     .get_or_default(0);
/// assert_eq!(fallback, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<V, E> {
    /// The success track.
    Success(V),
    /// The failure track.
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    /// Wrap a value as a success.
    #[inline]
    pub const fn success(value: V) -> Self {
        Self::Success(value)
    }

    /// Wrap an error as a failure.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// `true` for a success, `false` for a failure.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` for a failure, `false` for a success.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// `true` if this is a success whose value satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn is_success_and<F: FnOnce(V) -> bool>(self, predicate: F) -> bool {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// `true` if this is a failure whose error satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn is_failure_and<F: FnOnce(E) -> bool>(self, predicate: F) -> bool {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    /// The success value, or `None` for a failure.
    #[inline]
    pub fn value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure value, or `None` for a success.
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrow the payload of either track.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match *self {
            Self::Success(ref value) => Outcome::Success(value),
            Self::Failure(ref error) => Outcome::Failure(error),
        }
    }

    /// Mutably borrow the payload of either track.
    #[inline]
    pub const fn as_mut(&mut self) -> Outcome<&mut V, &mut E> {
        match *self {
            Self::Success(ref mut value) => Outcome::Success(value),
            Self::Failure(ref mut error) => Outcome::Failure(error),
        }
    }

    /// Run exactly one of the two handlers and return its result.
    ///
    /// Every other combinator can be written in terms of `fold`.
    #[inline]
    pub fn fold<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(V) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Transform the success value. A failure passes through re-typed.
    #[inline]
    pub fn map<R, F: FnOnce(V) -> R>(self, transform: F) -> Outcome<R, E> {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure value. A success passes through re-typed.
    #[inline]
    pub fn map_error<NE, F: FnOnce(E) -> NE>(self, transform: F) -> Outcome<V, NE> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(transform(error)),
        }
    }

    /// Chain a fallible step on the success track.
    ///
    /// ```
    /// use railway_core::Outcome;
    ///
    /// fn positive(x: i32) -> Outcome<i32, &'static str> {
    ///     if x > 0 { Outcome::Success(x) } else { Outcome::Failure("neg") }
    /// }
    ///
    /// let n = Outcome::success(5).flat_map(positive).fold(|x| x, |_| -1);
    /// assert_eq!(n, 5);
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, transform: F) -> Outcome<R, E>
    where
        F: FnOnce(V) -> Outcome<R, E>,
    {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain a step on the failure track, typically to recover or re-classify.
    #[inline]
    pub fn flat_map_error<NE, F>(self, transform: F) -> Outcome<V, NE>
    where
        F: FnOnce(E) -> Outcome<V, NE>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => transform(error),
        }
    }

    /// Observe the success value. Returns `self` unchanged.
    #[inline]
    pub fn on_success<F: FnOnce(&V)>(self, action: F) -> Self {
        if let Self::Success(ref value) = self {
            action(value);
        }
        self
    }

    /// Observe the failure value. Returns `self` unchanged.
    #[inline]
    pub fn on_failure<F: FnOnce(&E)>(self, action: F) -> Self {
        if let Self::Failure(ref error) = self {
            action(error);
        }
        self
    }

    /// The success value, or a fallback computed from the error.
    #[inline]
    pub fn get_or_else<F: FnOnce(E) -> V>(self, on_failure: F) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => on_failure(error),
        }
    }

    /// The success value, or `default`. The error is discarded.
    #[inline]
    pub fn get_or_default(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// The success value, or `V::default()`.
    #[inline]
    pub fn get_or_default_value(self) -> V
    where
        V: Default,
    {
        self.get_or_else(|_| V::default())
    }

    /// Move every failure onto the success track.
    #[inline]
    pub fn recover<F: FnOnce(E) -> V>(self, on_failure: F) -> Outcome<V, Infallible> {
        Outcome::Success(self.get_or_else(on_failure))
    }

    /// Exchange the two tracks.
    #[inline]
    pub fn swap(self) -> Outcome<E, V> {
        match self {
            Self::Success(value) => Outcome::Failure(value),
            Self::Failure(error) => Outcome::Success(error),
        }
    }

    /// `other` if this is a success, otherwise this failure.
    #[inline]
    pub fn and<W>(self, other: Outcome<W, E>) -> Outcome<W, E> {
        self.flat_map(|_| other)
    }

    /// This success, otherwise `other`.
    #[inline]
    pub fn or<NE>(self, other: Outcome<V, NE>) -> Outcome<V, NE> {
        self.flat_map_error(|_| other)
    }

    /// Pair two successes. The first failure, left to right, wins.
    #[inline]
    pub fn zip<W>(self, other: Outcome<W, E>) -> Outcome<(V, W), E> {
        self.flat_map(|value| other.map(|second| (value, second)))
    }
}

impl<V, E> Outcome<Outcome<V, E>, E> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<V, E> {
        self.flat_map(|inner| inner)
    }
}

impl<E> Outcome<Infallible, E> {
    /// The error of an outcome that can only be a failure.
    #[inline]
    pub fn into_error(self) -> E {
        let Self::Failure(error) = self;
        error
    }

    /// Re-type a failure-only outcome to any success type.
    #[inline]
    pub fn widen<V>(self) -> Outcome<V, E> {
        Outcome::Failure(self.into_error())
    }
}

impl<V> Outcome<V, Infallible> {
    /// The value of an outcome that can only be a success.
    #[inline]
    pub fn into_value(self) -> V {
        let Self::Success(value) = self;
        value
    }
}
