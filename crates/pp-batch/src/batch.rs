//! Results of a batch run.

use pp_core::{PpError, PpResult};

/// One result per repetition, in repetition order.
///
/// A failed repetition does not abort the batch; its error is kept at its
/// index next to the successful realizations.
#[derive(Clone, Debug, PartialEq)]
pub struct Batch<T> {
    items: Vec<PpResult<T>>,
}

impl<T> Batch<T> {
    pub(crate) fn from_items(items: Vec<PpResult<T>>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Result of repetition `index`.
    pub fn get(&self, index: usize) -> Option<&PpResult<T>> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PpResult<T>> {
        self.items.iter()
    }

    /// Successful repetitions with their indices.
    pub fn successes(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().ok().map(|v| (i, v)))
    }

    /// Failed repetitions with their indices.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &PpError)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().err().map(|e| (i, e)))
    }

    pub fn success_count(&self) -> usize {
        self.items.iter().filter(|r| r.is_ok()).count()
    }

    /// All realizations, or the error of the lowest-indexed failure.
    pub fn into_realizations(self) -> PpResult<Vec<T>> {
        self.items.into_iter().collect()
    }

    pub fn into_items(self) -> Vec<PpResult<T>> {
        self.items
    }
}

impl<T> IntoIterator for Batch<T> {
    type Item = PpResult<T>;
    type IntoIter = std::vec::IntoIter<PpResult<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
