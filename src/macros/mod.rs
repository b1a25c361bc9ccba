//! Macros for writing rails without the operator.
//!
//! - [`macro@crate::pipe`] - chains stages left to right, short-circuiting on
//!   the first failure, the macro spelling of `start >> a >> b`.
//! - [`macro@crate::success`] / [`macro@crate::failure`] - shorthands for the
//!   two outcome constructors.
//!
//! # Examples
//!
//! ```
//! use railway_ops::{pipe, stage, success, Outcome};
//!
//! fn inc(x: i32) -> Outcome<i32, &'static str> {
//!     success!(x + 1)
//! }
//!
//! let out = pipe!(success!(1) => inc => stage::lift(|x: i32| x * 10) => inc);
//! assert_eq!(out, Outcome::Success(21));
//! ```

/// Chains stages onto a starting outcome.
///
/// The start may be an [`Outcome`](crate::Outcome) or a std `Result`; it is
/// normalized with [`wrap_success`](crate::ops::wrap_success). Each stage is
/// then applied with [`sequence`](crate::ops::sequence) in source order, and
/// stages after the first failure are not evaluated.
///
/// # Syntax
///
/// `pipe!(start => stage => stage ...)`
///
/// # Examples
///
/// ```
/// use railway_ops::{failure, pipe, Outcome};
///
/// let mut calls = 0;
/// let out: Outcome<i32, &str> = pipe!(Err("bad") => |x: i32| {
///     calls += 1;
///     Outcome::success(x)
/// });
///
/// assert_eq!(out, failure!("bad"));
/// assert_eq!(calls, 0);
/// ```
#[macro_export]
macro_rules! pipe {
    ($start:expr $(=> $stage:expr)* $(,)?) => {{
        let outcome = $crate::ops::wrap_success($start);
        $(
            let outcome = $crate::ops::sequence(outcome, $stage);
        )*
        outcome
    }};
}

/// Shorthand for [`Outcome::Success`](crate::Outcome::Success).
#[macro_export]
macro_rules! success {
    ($value:expr $(,)?) => {
        $crate::Outcome::Success($value)
    };
}

/// Shorthand for [`Outcome::Failure`](crate::Outcome::Failure).
///
/// The payload is used as is; unlike `panic!`, no formatting happens.
///
/// ```
/// use railway_ops::{failure, Outcome};
///
/// let out: Outcome<(), &str> = failure!("not found");
/// assert_eq!(out, Outcome::Failure("not found"));
/// ```
#[macro_export]
macro_rules! failure {
    ($error:expr $(,)?) => {
        $crate::Outcome::Failure($error)
    };
}
