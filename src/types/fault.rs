//! Faults: panics caught at the edge of the rail, and API misuse.
//!
//! A [`Fault`] is what [`try_lift`](crate::ops::try_lift) produces when the
//! lifted function panics. It owns the original panic payload, so a failure
//! escalated with [`Outcome::unwrap`](crate::Outcome::unwrap) and caught again
//! further up can be downcast back to its error type.
//!
//! [`NotAnOutcome`] is the misuse fault raised by
//! [`escalate`](crate::ops::escalate) when handed something that is not an
//! outcome at all.

use core::any::Any;
use core::fmt::{self, Debug, Display};
use std::boxed::Box;
use std::string::String;

/// A caught panic, moved onto the failure track.
///
/// # Examples
///
/// ```
/// use railway_ops::ops;
///
/// let out = ops::try_lift(3, |_: i32| -> i32 { panic!("disk on fire") });
/// let fault = out.unwrap_failure();
/// assert_eq!(fault.message(), Some("disk on fire"));
/// ```
pub struct Fault {
    payload: Box<dyn Any + Send + 'static>,
}

impl Fault {
    /// Wraps a raw panic payload, e.g. the `Err` of `std::panic::catch_unwind`.
    #[inline]
    pub fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Builds a fault carrying `value` as its payload, as if a stage had
    /// panicked with `std::panic::panic_any(value)`.
    #[inline]
    pub fn new<P: Any + Send + 'static>(value: P) -> Self {
        Self { payload: Box::new(value) }
    }

    /// The panic message, when the payload is a `&str` or `String`.
    ///
    /// `panic!` with a literal produces `&'static str`; with format
    /// arguments it produces `String`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else {
            self.payload.downcast_ref::<String>().map(String::as_str)
        }
    }

    #[must_use]
    #[inline]
    pub fn is<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    #[must_use]
    #[inline]
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Takes the payload back as a `P`, or returns the fault unchanged.
    #[inline]
    pub fn downcast<P: Any>(self) -> Result<P, Self> {
        self.payload
            .downcast::<P>()
            .map(|boxed| *boxed)
            .map_err(|payload| Self { payload })
    }

    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Re-raises the original panic with its original payload.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.debug_struct("Fault").field("message", &message).finish(),
            None => f.debug_struct("Fault").finish_non_exhaustive(),
        }
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "stage panicked: {message}"),
            None => f.write_str("stage panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for Fault {}

/// Raised when a value handed to the rail is not an outcome of the expected type.
///
/// This signals a contract violation by the caller, as opposed to a
/// `Failure` legitimately produced by a stage.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotAnOutcome {
    expected: &'static str,
}

impl NotAnOutcome {
    #[inline]
    pub(crate) fn expecting<O>() -> Self {
        Self { expected: core::any::type_name::<O>() }
    }

    /// The type name of the outcome that was expected.
    #[must_use]
    #[inline]
    pub const fn expected(&self) -> &'static str {
        self.expected
    }
}

impl Debug for NotAnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotAnOutcome").field("expected", &self.expected).finish()
    }
}

impl Display for NotAnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value is not a tagged outcome (expected `{}`)", self.expected)
    }
}

impl std::error::Error for NotAnOutcome {}
