//! Conversion helpers between `Outcome`, `Result` and `Option`.
//!
//! `Outcome` and `Result` are the same two-track shape, so the `From`
//! impls here are lossless in both directions. This makes it cheap to keep
//! std-returning code at the edges and still compose it on the rail.
//!
//! # Examples
//!
//! ```
//! use railway_ops::convert::*;
//! use railway_ops::Outcome;
//!
//! let outcome = result_to_outcome::<i32, &str>(Ok(42));
//! assert_eq!(outcome, Outcome::Success(42));
//!
//! let back: Result<i32, &str> = outcome_to_result(Outcome::failure("failed"));
//! assert_eq!(back, Err("failed"));
//! ```

use crate::types::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Converts a `Result` to an `Outcome`.
///
/// # Examples
///
/// ```
/// use railway_ops::convert::result_to_outcome;
/// use railway_ops::Outcome;
///
/// assert_eq!(result_to_outcome::<(), &str>(Err("no")), Outcome::Failure("no"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(error),
    }
}

/// Converts an `Outcome` to a `Result`.
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts an `Option` to an `Outcome`, using `error` for `None`.
///
/// # Examples
///
/// ```
/// use railway_ops::convert::option_to_outcome;
/// use railway_ops::Outcome;
///
/// assert_eq!(option_to_outcome(Some(1), "missing"), Outcome::Success(1));
/// assert_eq!(option_to_outcome(None::<i32>, "missing"), Outcome::Failure("missing"));
/// ```
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, error: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(error),
    }
}

/// Swaps the tracks: successes become failures and vice versa.
///
/// Useful for stages whose "expected" result is a rejection, such as a
/// uniqueness check that should fail when a record is found.
///
/// # Examples
///
/// ```
/// use railway_ops::convert::flip;
/// use railway_ops::Outcome;
///
/// assert_eq!(flip(Outcome::<i32, &str>::success(1)), Outcome::Failure(1));
/// ```
#[inline]
pub fn flip<T, E>(outcome: Outcome<T, E>) -> Outcome<E, T> {
    match outcome {
        Outcome::Success(value) => Outcome::Failure(value),
        Outcome::Failure(error) => Outcome::Success(error),
    }
}
