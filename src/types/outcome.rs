#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Verdict;

/// The tagged result flowing along a rail.
///
/// An `Outcome<T, E>` is exactly one of two tracks:
///
/// * `Success(T)` - the stage completed and hands `T` to the next stage
/// * `Failure(E)` - the stage failed; every later stage is skipped and `E`
///   travels to the end of the chain untouched
///
/// The failure payload is opaque to this crate. No combinator inspects,
/// converts, or reorders it; interpretation happens wherever the caller
/// finally matches on the outcome or escalates it with [`Outcome::unwrap`].
///
/// # Serde Support
///
/// With the `serde` feature the enum serializes externally tagged, e.g.
/// `{"Success":3}` or `{"Failure":"bad"}`.
///
/// # Examples
///
/// ```
/// use railway_ops::Outcome;
///
/// fn inc(x: i32) -> Outcome<i32, &'static str> {
///     Outcome::success(x + 1)
/// }
///
/// let chained = Outcome::success(1) >> inc >> inc;
/// assert_eq!(chained, Outcome::Success(3));
///
/// let stopped = Outcome::failure("bad") >> inc >> inc;
/// assert_eq!(stopped, Outcome::Failure("bad"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Puts a plain value on the success track.
    ///
    /// For values that may already be tagged, use
    /// [`wrap_success`](crate::ops::wrap_success), which never double-wraps.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Puts a value on the failure track, unconditionally.
    ///
    /// Unlike [`wrap_success`](crate::ops::wrap_success) this never looks at
    /// the shape of `error`: passing an `Outcome` nests it.
    ///
    /// ```
    /// use railway_ops::Outcome;
    ///
    /// let inner: Outcome<i32, ()> = Outcome::success(1);
    /// let nested: Outcome<(), Outcome<i32, ()>> = Outcome::failure(inner);
    /// assert_eq!(nested, Outcome::Failure(Outcome::Success(1)));
    /// ```
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success payload, discarding a failure.
    #[must_use]
    #[inline]
    pub fn success_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure payload, discarding a success.
    #[must_use]
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Sequences the next stage onto this outcome.
    ///
    /// On `Success(x)` the stage runs and its outcome is returned as is. On
    /// `Failure(e)` the stage is never called and the failure passes through
    /// unchanged. The `>>` operator is sugar for this method.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway_ops::Outcome;
    ///
    /// let mut calls = 0;
    /// let skipped = Outcome::<i32, &str>::failure("bad").then(|x| {
    ///     calls += 1;
    ///     Outcome::success(x + 1)
    /// });
    ///
    /// assert_eq!(skipped, Outcome::Failure("bad"));
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn then<U, F>(self, stage: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => stage(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Lifts a plain function onto the success track.
    ///
    /// The return value of `f` is always wrapped in `Success`, even when it
    /// is itself an `Outcome`. Panics inside `f` are not caught; see
    /// [`try_map`](Self::try_map) for that.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the failure payload, leaving a success untouched.
    #[inline]
    pub fn map_failure<F, NewE>(self, f: F) -> Outcome<T, NewE>
    where
        F: FnOnce(E) -> NewE,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Runs `f` on the success value for its side effect only.
    ///
    /// Whatever `f` returns is ignored; the original value continues down
    /// the rail.
    ///
    /// ```
    /// use railway_ops::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let out = Outcome::<i32, ()>::success(1)
    ///     .tee(|x| seen.push(*x))
    ///     .tee(|_| Outcome::<i32, ()>::failure(()));
    ///
    /// assert_eq!(out, Outcome::Success(1));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn tee<R, F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> R,
    {
        self.then(|value| crate::ops::tee(value, f))
    }

    /// Runs `f` on the success value and lets it veto the rail.
    ///
    /// A failing [`Verdict`] switches to the failure track with the verdict's
    /// error; anything else keeps the original value. A verdict's own
    /// success payload is never substituted for the value.
    ///
    /// ```
    /// use railway_ops::Outcome;
    ///
    /// let kept = Outcome::<i32, &str>::success(1)
    ///     .tee_or_fail(|_| Outcome::<i32, &str>::success(99));
    /// assert_eq!(kept, Outcome::Success(1));
    ///
    /// let vetoed = Outcome::<i32, &str>::success(1).tee_or_fail(|_| Err::<(), _>("bad"));
    /// assert_eq!(vetoed, Outcome::Failure("bad"));
    /// ```
    #[inline]
    pub fn tee_or_fail<R, F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> R,
        R: Verdict<E>,
    {
        self.then(|value| crate::ops::tee_or_fail(value, f))
    }

    /// Switches back to the success track by way of a recovery stage.
    #[inline]
    pub fn or_else<NewE, F>(self, recovery: F) -> Outcome<T, NewE>
    where
        F: FnOnce(E) -> Outcome<T, NewE>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Returns the failure payload, panicking if the outcome succeeded.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => panic!("called `Outcome::unwrap_failure()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }

    /// Leaves the rail as a std [`Result`], the non-panicking way to
    /// escalate a failure with `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting produced by lifting an `Outcome`-returning
    /// function with [`map`](Outcome::map).
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.then(|inner| inner)
    }
}

#[cfg(feature = "std")]
impl<T, E> Outcome<T, E> {
    /// Lifts a function that may panic onto the success track.
    ///
    /// A panic inside `f` is caught and becomes `Failure(E::from(fault))`.
    /// See [`try_lift`](crate::ops::try_lift).
    ///
    /// ```
    /// use railway_ops::{Fault, Outcome};
    ///
    /// let out = Outcome::<i32, Fault>::success(0).try_map(|x| 10 / x);
    /// assert!(out.is_failure());
    /// ```
    #[inline]
    pub fn try_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        E: From<crate::types::Fault>,
    {
        self.then(|value| crate::ops::try_lift(value, f).map_failure(E::from))
    }

    /// Escalates the outcome out of the rail.
    ///
    /// Returns the success payload. On `Failure(e)` this panics with `e`
    /// itself as the panic payload (via [`std::panic::panic_any`]), so the
    /// error can be recovered intact from a caught panic, for example by
    /// [`Fault::downcast`](crate::types::Fault::downcast).
    ///
    /// Callers that want to handle failures without panicking should match
    /// on the outcome or use [`into_result`](Self::into_result) instead.
    ///
    /// # Panics
    ///
    /// Panics with payload `e` if the outcome is `Failure(e)`.
    ///
    /// ```
    /// use railway_ops::{ops, Outcome};
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(7).unwrap(), 7);
    ///
    /// let caught = ops::try_lift((), |_| Outcome::<i32, &str>::failure("bad").unwrap());
    /// let fault = caught.unwrap_failure();
    /// assert_eq!(fault.downcast_ref::<&str>(), Some(&"bad"));
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Send + 'static,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => std::panic::panic_any(error),
        }
    }

    /// Recovers a typed outcome from an untyped value.
    ///
    /// Returns [`NotAnOutcome`](crate::types::NotAnOutcome) when `value` is
    /// not an `Outcome<T, E>`, which marks API misuse rather than a failure
    /// produced by a stage.
    ///
    /// ```
    /// use std::any::Any;
    /// use railway_ops::Outcome;
    ///
    /// let good: Box<dyn Any + Send> = Box::new(Outcome::<i32, String>::success(1));
    /// assert_eq!(Outcome::<i32, String>::from_any(good), Ok(Outcome::Success(1)));
    ///
    /// let bad: Box<dyn Any + Send> = Box::new(1_i32);
    /// assert!(Outcome::<i32, String>::from_any(bad).is_err());
    /// ```
    pub fn from_any(
        value: std::boxed::Box<dyn core::any::Any + Send>,
    ) -> Result<Self, crate::types::NotAnOutcome>
    where
        T: 'static,
        E: 'static,
    {
        value
            .downcast::<Self>()
            .map(|boxed| *boxed)
            .map_err(|_| crate::types::NotAnOutcome::expecting::<Self>())
    }
}

impl<T, E, U, F> core::ops::Shr<F> for Outcome<T, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    type Output = Outcome<U, E>;

    /// `outcome >> stage` is [`Outcome::then`].
    #[inline]
    fn shr(self, stage: F) -> Self::Output {
        self.then(stage)
    }
}
