use crate::types::Outcome;

/// Values that already carry a success/failure tag.
///
/// Normalizing such a value onto the rail keeps both its variant and its
/// payload: an `Outcome` is returned as is, and a std `Result` maps `Ok` to
/// `Success` and `Err` to `Failure`. A failure is never turned into a
/// success, and a success is never wrapped twice.
///
/// Plain, untagged values go through [`Outcome::success`] instead.
///
/// # Examples
///
/// ```
/// use railway_ops::traits::IntoOutcome;
/// use railway_ops::Outcome;
///
/// let already: Outcome<i32, &str> = Outcome::failure("bad");
/// assert_eq!(already.into_outcome(), Outcome::Failure("bad"));
///
/// let std_ok: Result<i32, &str> = Ok(5);
/// assert_eq!(std_ok.into_outcome(), Outcome::Success(5));
/// ```
pub trait IntoOutcome<T, E> {
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}
