//! Value-first combinators.
//!
//! Each function takes the value (or outcome) on the left and a stage on the
//! right, the same argument order as the `>>` operator. They are the building
//! blocks that [`Outcome`]'s methods, the [`stage`](crate::stage)
//! constructors and [`Rail`](crate::Rail) are written in terms of.
//!
//! | Function | On success | Catches panics |
//! |----------|------------|----------------|
//! | [`sequence`] | stage's own outcome | no |
//! | [`lift`] | `Success(f(x))` | no |
//! | [`try_lift`] | `Success(f(x))` | yes, as `Failure(Fault)` |
//! | [`tee`] | `Success(x)` | no |
//! | [`tee_or_fail`] | `Success(x)` unless vetoed | no |
//!
//! # Examples
//!
//! ```
//! use railway_ops::ops::{lift, sequence, tee};
//! use railway_ops::Outcome;
//!
//! let observed: Outcome<i32, ()> = tee(1, |x| assert_eq!(*x, 1));
//! let out = sequence(observed, |x| lift(x, |n: i32| n.to_string()));
//! assert_eq!(out, Outcome::Success("1".to_string()));
//! ```

use crate::traits::{IntoOutcome, Verdict};
use crate::types::Outcome;

/// Wraps a plain value as `Success(value)`.
#[inline]
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Normalizes an already-tagged value onto the rail.
///
/// Both variants pass through unchanged: a failure stays a failure with the
/// same payload, and a success is not wrapped a second time. Plain values
/// are wrapped with [`success`].
///
/// # Examples
///
/// ```
/// use railway_ops::ops::wrap_success;
/// use railway_ops::Outcome;
///
/// let kept: Outcome<i32, &str> = wrap_success(Outcome::failure("bad"));
/// assert_eq!(kept, Outcome::Failure("bad"));
///
/// let not_doubled: Outcome<i32, &str> = wrap_success(Outcome::success(1));
/// assert_eq!(not_doubled, Outcome::Success(1));
/// ```
#[inline]
pub fn wrap_success<T, E, R>(value: R) -> Outcome<T, E>
where
    R: IntoOutcome<T, E>,
{
    value.into_outcome()
}

/// Wraps `error` as `Failure(error)`, whatever its shape.
///
/// This is deliberately not symmetric with [`wrap_success`]: an `Outcome`
/// passed here is nested inside the failure rather than passed through.
///
/// # Examples
///
/// ```
/// use railway_ops::ops::wrap_failure;
/// use railway_ops::Outcome;
///
/// let nested: Outcome<(), Outcome<i32, &str>> = wrap_failure(Outcome::success(1));
/// assert_eq!(nested, Outcome::Failure(Outcome::Success(1)));
/// ```
#[inline]
pub fn wrap_failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// Escalates an outcome; see [`Outcome::unwrap`].
///
/// # Panics
///
/// Panics with the failure payload itself if `outcome` is a failure.
#[cfg(feature = "std")]
#[inline]
#[track_caller]
pub fn unwrap<T, E>(outcome: Outcome<T, E>) -> T
where
    E: Send + 'static,
{
    outcome.unwrap()
}

/// Escalates an untyped value that is expected to be an `Outcome<T, E>`.
///
/// # Panics
///
/// * with the failure payload `e` if `value` is `Outcome::Failure(e)`
/// * with a [`NotAnOutcome`](crate::types::NotAnOutcome) payload if `value`
///   is not an `Outcome<T, E>` at all
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use railway_ops::ops::{escalate, try_lift};
/// use railway_ops::{NotAnOutcome, Outcome};
///
/// let good: Box<dyn Any + Send> = Box::new(Outcome::<i32, String>::success(3));
/// assert_eq!(escalate::<i32, String>(good), 3);
///
/// let misuse = try_lift((), |_| escalate::<i32, String>(Box::new("oops")));
/// assert!(misuse.unwrap_failure().is::<NotAnOutcome>());
/// ```
#[cfg(feature = "std")]
#[track_caller]
pub fn escalate<T, E>(value: std::boxed::Box<dyn core::any::Any + Send>) -> T
where
    T: 'static,
    E: Send + 'static,
{
    match Outcome::<T, E>::from_any(value) {
        Ok(outcome) => outcome.unwrap(),
        Err(misuse) => std::panic::panic_any(misuse),
    }
}

/// Runs `stage` on the success value of `left`, or skips it on failure.
///
/// The stage's outcome is returned directly. On failure the stage is never
/// invoked and the failure is returned with its payload untouched.
///
/// # Examples
///
/// ```
/// use railway_ops::ops::sequence;
/// use railway_ops::Outcome;
///
/// fn inc(x: i32) -> Outcome<i32, &'static str> {
///     Outcome::success(x + 1)
/// }
///
/// assert_eq!(sequence(sequence(Outcome::success(1), inc), inc), Outcome::Success(3));
/// ```
#[inline]
pub fn sequence<T, U, E, F>(left: Outcome<T, E>, stage: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    left.then(stage)
}

/// Applies a plain function and wraps its return as `Success`.
///
/// The return is wrapped even if it is already an `Outcome`. Panics in `f`
/// propagate.
///
/// # Examples
///
/// ```
/// use railway_ops::ops::lift;
/// use railway_ops::Outcome;
///
/// assert_eq!(lift::<_, _, (), _>(1, |n: i32| n.to_string()), Outcome::Success("1".to_string()));
/// ```
#[inline]
pub fn lift<T, U, E, F>(value: T, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> U,
{
    Outcome::Success(f(value))
}

/// Applies a function that may panic, catching the panic as a failure.
///
/// Normal completion yields `Success(f(value))`. A panic is caught with
/// [`std::panic::catch_unwind`] and yields `Failure(Fault)` holding the
/// panic payload. This is the boundary to put around code that signals
/// errors by panicking.
///
/// `f` is run under [`AssertUnwindSafe`](std::panic::AssertUnwindSafe):
/// state `f` mutated before panicking may be observed half-updated
/// afterwards.
///
/// The global panic hook still runs, so a caught panic is still reported on
/// stderr unless the hook is replaced.
///
/// # Examples
///
/// ```
/// use railway_ops::ops::try_lift;
///
/// let ok = try_lift(4, |x: i32| x * 2);
/// assert_eq!(ok.success_value(), Some(8));
///
/// let caught = try_lift(0, |x: i32| 10 / x);
/// assert!(caught.is_failure());
/// ```
#[cfg(feature = "std")]
pub fn try_lift<T, U, F>(value: T, f: F) -> Outcome<U, crate::types::Fault>
where
    F: FnOnce(T) -> U,
{
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || f(value))) {
        Ok(output) => Outcome::Success(output),
        Err(payload) => Outcome::Failure(crate::types::Fault::from_payload(payload)),
    }
}

/// Runs `f` for its side effect and passes `value` on unchanged.
///
/// The return of `f` is dropped without being inspected, even when it is a
/// failing `Outcome`.
///
/// # Examples
///
/// ```
/// use railway_ops::ops::tee;
/// use railway_ops::Outcome;
///
/// let out: Outcome<i32, ()> = tee(1, |_| Outcome::<(), &str>::failure("ignored"));
/// assert_eq!(out, Outcome::Success(1));
/// ```
#[inline]
pub fn tee<T, E, R, F>(value: T, f: F) -> Outcome<T, E>
where
    F: FnOnce(&T) -> R,
{
    let _ = f(&value);
    Outcome::Success(value)
}

/// Runs `f` and passes `value` on, unless `f` vetoes with a failure.
///
/// See [`Verdict`] for which returns count as a veto. The observer's own
/// success payload never replaces `value`.
///
/// The observer must return a [`Verdict`]: an `Outcome`, a `Result` or `()`.
/// An observer that returns some other raw value cannot veto, so pass it to
/// [`tee`] instead.
///
/// # Examples
///
/// ```
/// use railway_ops::ops::tee_or_fail;
/// use railway_ops::Outcome;
///
/// let kept = tee_or_fail(1, |_| Outcome::<i32, &str>::success(99));
/// assert_eq!(kept, Outcome::Success(1));
///
/// let vetoed = tee_or_fail(1, |_| Outcome::<i32, &str>::failure("bad"));
/// assert_eq!(vetoed, Outcome::Failure("bad"));
/// ```
#[inline]
pub fn tee_or_fail<T, E, R, F>(value: T, f: F) -> Outcome<T, E>
where
    F: FnOnce(&T) -> R,
    R: Verdict<E>,
{
    match f(&value).into_veto() {
        Some(error) => Outcome::Failure(error),
        None => Outcome::Success(value),
    }
}
