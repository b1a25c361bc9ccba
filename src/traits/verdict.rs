use crate::types::Outcome;

/// The return value of an observer passed to `tee_or_fail`.
///
/// An observer may veto the rail by returning a failure; every other return
/// keeps the observed value flowing. A verdict's success payload, if it has
/// one, is dropped.
///
/// | Return | Effect |
/// |--------|--------|
/// | `Outcome::Failure(e)` / `Err(e)` | rail fails with `e` |
/// | `Outcome::Success(_)` / `Ok(_)` | value passes through |
/// | `()` | value passes through |
pub trait Verdict<E> {
    /// Returns the error to fail with, or `None` to let the value through.
    fn into_veto(self) -> Option<E>;
}

impl<T, E> Verdict<E> for Outcome<T, E> {
    #[inline]
    fn into_veto(self) -> Option<E> {
        self.failure_value()
    }
}

impl<T, E> Verdict<E> for Result<T, E> {
    #[inline]
    fn into_veto(self) -> Option<E> {
        self.err()
    }
}

impl<E> Verdict<E> for () {
    #[inline]
    fn into_veto(self) -> Option<E> {
        None
    }
}
