use core::fmt::{self, Debug, Display};

#[cfg(feature = "serde")]
use serde::Serialize;
use smallvec::SmallVec;

use crate::ops;
use crate::traits::Verdict;
use crate::types::Outcome;

#[cfg(feature = "tracing")]
macro_rules! stage_event {
    ($level:ident, $stage:expr, $message:literal) => {
        tracing::$level!(stage = $stage, $message)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! stage_event {
    ($($ignored:tt)*) => {};
}

/// Labels of the stages a [`Rail`] ran successfully, in order.
///
/// Uses inline storage for up to 4 labels, which covers most pipelines
/// without touching the heap.
pub type StageLedger = SmallVec<[&'static str; 4]>;

/// A rail whose stages carry labels.
///
/// `Rail` sequences stages exactly like [`Outcome::then`], and additionally
/// remembers which stages ran and which one switched the rail to the failure
/// track. Stages after a failure are neither invoked nor recorded.
///
/// With the `tracing` feature every stage emits a `debug` event on
/// completion or failure and a `trace` event when skipped.
///
/// # Examples
///
/// ```
/// use railway_ops::{Outcome, Rail};
///
/// fn parse(input: &str) -> Outcome<i32, String> {
///     input.parse::<i32>().map_err(|_| format!("not a number: {input}")).into()
/// }
///
/// let err = Rail::start("forty-two")
///     .then("parse", parse)
///     .lift("double", |n| n * 2)
///     .finish()
///     .unwrap_failure();
///
/// assert_eq!(err.stage(), Some("parse"));
/// assert!(err.completed().is_empty());
/// assert_eq!(err.error(), "not a number: forty-two");
/// ```
#[must_use]
pub struct Rail<T, E> {
    outcome: Outcome<T, E>,
    completed: StageLedger,
    failed_at: Option<&'static str>,
}

impl<T, E> Rail<T, E> {
    /// Starts a rail from an existing outcome.
    ///
    /// An outcome that is already a failure makes every stage a no-op; the
    /// eventual [`StageError`] then names no stage.
    #[inline]
    pub fn new(outcome: Outcome<T, E>) -> Self {
        Self { outcome, completed: StageLedger::new(), failed_at: None }
    }

    /// Starts a rail on the success track.
    #[inline]
    pub fn start(value: T) -> Self {
        Self::new(Outcome::Success(value))
    }

    /// Sequences a stage that returns an [`Outcome`].
    pub fn then<U, F>(self, label: &'static str, stage: F) -> Rail<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        let Self { outcome, mut completed, failed_at } = self;

        match outcome {
            Outcome::Success(value) => match stage(value) {
                Outcome::Success(next) => {
                    stage_event!(debug, label, "stage completed");
                    completed.push(label);
                    Rail { outcome: Outcome::Success(next), completed, failed_at }
                },
                Outcome::Failure(error) => {
                    stage_event!(debug, label, "stage failed");
                    Rail { outcome: Outcome::Failure(error), completed, failed_at: Some(label) }
                },
            },
            Outcome::Failure(error) => {
                stage_event!(trace, label, "stage skipped");
                Rail { outcome: Outcome::Failure(error), completed, failed_at }
            },
        }
    }

    /// Sequences a plain function; its return value always succeeds.
    #[inline]
    pub fn lift<U, F>(self, label: &'static str, f: F) -> Rail<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.then(label, |value| ops::lift(value, f))
    }

    /// Sequences a function that may panic; a panic fails this stage.
    #[cfg(feature = "std")]
    #[inline]
    pub fn try_lift<U, F>(self, label: &'static str, f: F) -> Rail<U, E>
    where
        F: FnOnce(T) -> U,
        E: From<crate::types::Fault>,
    {
        self.then(label, |value| ops::try_lift(value, f).map_failure(E::from))
    }

    /// Observes the value without changing it.
    #[inline]
    pub fn tee<R, F>(self, label: &'static str, f: F) -> Self
    where
        F: FnOnce(&T) -> R,
    {
        self.then(label, |value| ops::tee(value, f))
    }

    /// Observes the value and lets the observer veto the rail.
    #[inline]
    pub fn tee_or_fail<R, F>(self, label: &'static str, f: F) -> Self
    where
        F: FnOnce(&T) -> R,
        R: Verdict<E>,
    {
        self.then(label, |value| ops::tee_or_fail(value, f))
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Labels of the stages that completed so far.
    #[must_use]
    #[inline]
    pub fn stages(&self) -> &[&'static str] {
        &self.completed
    }

    /// The label of the stage that failed, if any stage did.
    #[must_use]
    #[inline]
    pub fn failed_stage(&self) -> Option<&'static str> {
        self.failed_at
    }

    /// Ends the rail, attaching stage information to a failure.
    pub fn finish(self) -> Outcome<T, StageError<E>> {
        let Self { outcome, completed, failed_at } = self;
        outcome.map_failure(|error| StageError { stage: failed_at, completed, error })
    }

    /// Ends the rail and drops the stage information.
    #[inline]
    pub fn into_outcome(self) -> Outcome<T, E> {
        self.outcome
    }
}

impl<T: Debug, E: Debug> Debug for Rail<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rail")
            .field("outcome", &self.outcome)
            .field("completed", &self.completed)
            .field("failed_at", &self.failed_at)
            .finish()
    }
}

/// A failure annotated with where on the rail it happened.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StageError<E> {
    stage: Option<&'static str>,
    completed: StageLedger,
    error: E,
}

impl<E> StageError<E> {
    /// The failing stage, or `None` when the rail was started on the
    /// failure track.
    #[must_use]
    #[inline]
    pub fn stage(&self) -> Option<&'static str> {
        self.stage
    }

    /// Stages that completed before the failure.
    #[must_use]
    #[inline]
    pub fn completed(&self) -> &[&'static str] {
        &self.completed
    }

    #[must_use]
    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }

    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }
}

impl<E: Display> Display for StageError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            Some(stage) => write!(f, "stage `{stage}` failed: {}", self.error),
            None => write!(f, "rail started on the failure track: {}", self.error),
        }
    }
}

impl<E> core::error::Error for StageError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}
