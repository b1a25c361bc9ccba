//! Extension traits for entering the rail from std types.
//!
//! # Examples
//!
//! ```
//! use railway_ops::traits::{OptionExt, ResultExt};
//! use railway_ops::Outcome;
//!
//! let stages = "7".parse::<i32>()
//!     .rail()
//!     .lift("double", |n| n * 2)
//!     .into_outcome();
//! assert_eq!(stages, Outcome::Success(14));
//!
//! let missing: Option<i32> = None;
//! assert_eq!(missing.ok_or_failure("absent"), Outcome::Failure("absent"));
//! ```

use crate::types::{Outcome, Rail};

/// Extension trait for starting a labelled [`Rail`] from a `Result`.
pub trait ResultExt<T, E> {
    /// Starts a [`Rail`] on the track matching this result.
    fn rail(self) -> Rail<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn rail(self) -> Rail<T, E> {
        Rail::new(self.into())
    }
}

/// Extension trait for turning an `Option` into an [`Outcome`].
pub trait OptionExt<T> {
    /// `Some(v)` becomes `Success(v)`, `None` becomes `Failure(error)`.
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E>;

    /// Like [`ok_or_failure`](OptionExt::ok_or_failure), building the error
    /// only when it is needed.
    fn ok_or_else_failure<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(error),
        }
    }

    #[inline]
    fn ok_or_else_failure<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(f()),
        }
    }
}
