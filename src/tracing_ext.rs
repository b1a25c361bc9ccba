//! Tracing integration for rails.
//!
//! Observing a rail is exactly what a tee is for; this module packages the
//! common case of emitting `tracing` events as stages complete, without
//! touching the values that flow through.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! railway-ops = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! No subscriber is installed by this crate; events go wherever the
//! application's subscriber sends them.

use core::fmt::Debug;

use crate::types::Outcome;

/// Extension trait for emitting `tracing` events about an outcome.
pub trait TraceExt<T, E>: Sized {
    /// Emits a `debug` event naming `label` and the track the outcome is on,
    /// then returns the outcome unchanged.
    fn trace_outcome(self, label: &'static str) -> Self;

    /// Emits a `warn` event with the error's `Debug` form if the outcome is
    /// a failure, then returns the outcome unchanged.
    fn warn_on_failure(self, label: &'static str) -> Self
    where
        E: Debug;
}

impl<T, E> TraceExt<T, E> for Outcome<T, E> {
    fn trace_outcome(self, label: &'static str) -> Self {
        match &self {
            Outcome::Success(_) => tracing::debug!(stage = label, track = "success", "outcome"),
            Outcome::Failure(_) => tracing::debug!(stage = label, track = "failure", "outcome"),
        }
        self
    }

    fn warn_on_failure(self, label: &'static str) -> Self
    where
        E: Debug,
    {
        if let Outcome::Failure(error) = &self {
            tracing::warn!(stage = label, error = ?error, "stage failed");
        }
        self
    }
}

/// Wraps a stage so it runs inside a `stage` span and reports its outcome.
///
/// # Example
///
/// ```
/// use railway_ops::tracing_ext::traced;
/// use railway_ops::Outcome;
///
/// fn inc(x: i32) -> Outcome<i32, ()> {
///     Outcome::success(x + 1)
/// }
///
/// let out = Outcome::success(1) >> traced("inc", inc);
/// assert_eq!(out, Outcome::Success(2));
/// ```
pub fn traced<T, U, E, F>(label: &'static str, stage: F) -> impl FnOnce(T) -> Outcome<U, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    move |value| {
        let span = tracing::debug_span!("stage", stage = label);
        let _guard = span.enter();
        stage(value).trace_outcome(label)
    }
}
