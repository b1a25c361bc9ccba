use crate::types::Outcome;

/// Collects outcomes, stopping at the first failure.
///
/// Elements after the first `Failure` are not pulled from the iterator, so
/// any side effects they carry never run.
///
/// ```
/// use railway_ops::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
///
/// let first_bad: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_bad, Outcome::Failure("a"));
/// ```
impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected = ShortCircuit { inner: iter.into_iter(), failure: &mut failure }.collect();

        match failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}

struct ShortCircuit<'a, I, E> {
    inner: I,
    failure: &'a mut Option<E>,
}

impl<T, E, I> Iterator for ShortCircuit<'_, I, E>
where
    I: Iterator<Item = Outcome<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.failure.is_some() {
            return None;
        }

        match self.inner.next()? {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(error) => {
                *self.failure = Some(error);
                None
            },
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Yields the success value once, or nothing for a failure.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.success_value() }
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
