//! Stage constructors for the right-hand side of `>>`.
//!
//! `outcome >> f` needs `f: FnOnce(T) -> Outcome<U, E>`. The adapters here
//! turn ordinary functions and observers into such stages, so a whole
//! pipeline reads left to right:
//!
//! ```
//! use railway_ops::{stage, Outcome};
//!
//! fn halve(x: i32) -> Outcome<i32, String> {
//!     if x % 2 == 0 { Outcome::success(x / 2) } else { Outcome::failure(format!("{x} is odd")) }
//! }
//!
//! let mut log = Vec::new();
//! let out = Outcome::success(8)
//!     >> halve
//!     >> stage::tee(|x: &i32| log.push(*x))
//!     >> stage::lift(|x: i32| x + 1)
//!     >> halve;
//!
//! assert_eq!(out, Outcome::Failure("5 is odd".to_string()));
//! assert_eq!(log, vec![4]);
//! ```

use crate::ops;
use crate::traits::Verdict;
use crate::types::Outcome;

/// A stage that applies `f` and wraps its return as `Success`.
#[inline]
pub fn lift<T, U, E, F>(f: F) -> impl FnOnce(T) -> Outcome<U, E>
where
    F: FnOnce(T) -> U,
{
    move |value| ops::lift(value, f)
}

/// A stage that applies `f`, turning a panic into a failure.
///
/// The caught [`Fault`](crate::types::Fault) is converted into the rail's
/// error type with `From`.
///
/// ```
/// use railway_ops::{stage, Fault, Outcome};
///
/// let out = Outcome::<i32, Fault>::success(0) >> stage::try_lift(|x: i32| 10 / x);
/// assert!(out.unwrap_failure().message().is_some());
/// ```
#[cfg(feature = "std")]
#[inline]
pub fn try_lift<T, U, E, F>(f: F) -> impl FnOnce(T) -> Outcome<U, E>
where
    F: FnOnce(T) -> U,
    E: From<crate::types::Fault>,
{
    move |value| ops::try_lift(value, f).map_failure(E::from)
}

/// A stage that observes the value and passes it on unchanged.
#[inline]
pub fn tee<T, E, R, F>(f: F) -> impl FnOnce(T) -> Outcome<T, E>
where
    F: FnOnce(&T) -> R,
{
    move |value| ops::tee(value, f)
}

/// A stage that observes the value and may veto the rail.
#[inline]
pub fn tee_or_fail<T, E, R, F>(f: F) -> impl FnOnce(T) -> Outcome<T, E>
where
    F: FnOnce(&T) -> R,
    R: Verdict<E>,
{
    move |value| ops::tee_or_fail(value, f)
}
