//! Core traits.

use crate::PageSampleResult;

/// A countable, windowable source of ordered elements.
///
/// Implement this for query-like sources that can answer a count and a
/// skip/take window without being fully materialized.
pub trait PageSource<T> {
    /// Counts all elements in the source.
    fn count(&self) -> PageSampleResult<usize>;

    /// Returns up to `take` elements after discarding the first `skip`.
    fn window(&self, skip: usize, take: usize) -> PageSampleResult<Vec<T>>;
}

impl<T: Clone> PageSource<T> for [T] {
    fn count(&self) -> PageSampleResult<usize> {
        Ok(self.len())
    }

    fn window(&self, skip: usize, take: usize) -> PageSampleResult<Vec<T>> {
        Ok(self.iter().skip(skip).take(take).cloned().collect())
    }
}

impl<T: Clone> PageSource<T> for Vec<T> {
    fn count(&self) -> PageSampleResult<usize> {
        Ok(self.len())
    }

    fn window(&self, skip: usize, take: usize) -> PageSampleResult<Vec<T>> {
        self.as_slice().window(skip, take)
    }
}
