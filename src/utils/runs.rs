use core::cmp::Ordering;
use core::fmt;

use fixedbitset::FixedBitSet;

use crate::compare::{self, CompareError, Comparator};

/// Counts how many distinct sources contributed the current run of equal
/// values, and releases the value once `degree` sources have.
#[derive(Clone)]
pub(crate) struct Runs<T> {
    last: Option<T>,
    seen: FixedBitSet,
    seen_len: usize,
    degree: usize,
}

impl<T> Runs<T> {
    /// Track runs over `sources` sources. The degree defaults to all of them.
    pub(crate) fn new(sources: usize) -> Self {
        Self {
            last: None,
            seen: FixedBitSet::with_capacity(sources),
            seen_len: 0,
            degree: sources,
        }
    }

    pub(crate) fn set_degree(&mut self, degree: usize) {
        self.degree = degree;
    }

    /// Sources that already counted towards the current run.
    pub(crate) fn seen(&self) -> &FixedBitSet {
        &self.seen
    }

    /// Whether `active` sources are still enough to complete a run.
    pub(crate) fn can_progress(&self, active: usize) -> bool {
        active > 0 && active >= self.degree.saturating_sub(self.seen_len)
    }

    /// Count `value`, taken from source `index`. Returns the value once it
    /// was seen in `degree` distinct sources.
    pub(crate) fn accept<C>(
        &mut self,
        value: T,
        index: usize,
        compare: &mut C,
    ) -> Result<Option<T>, CompareError>
    where
        T: fmt::Debug,
        C: Comparator<T> + ?Sized,
    {
        let same_run = match &self.last {
            Some(last) => compare::try_compare(compare, last, &value)? == Ordering::Equal,
            None => false,
        };

        if !same_run {
            self.reset();
        }
        self.mark_seen(index);

        if self.seen_len == self.degree {
            self.reset();
            return Ok(Some(value));
        }
        if !same_run {
            self.last = Some(value);
        }
        Ok(None)
    }

    fn mark_seen(&mut self, index: usize) {
        if index >= self.seen.len() {
            self.seen.grow(index + 1);
        }
        if !self.seen.put(index) {
            self.seen_len += 1;
        }
    }

    fn reset(&mut self) {
        self.last = None;
        self.seen.clear();
        self.seen_len = 0;
    }
}

impl<T: fmt::Debug> fmt::Debug for Runs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runs")
            .field("last", &self.last)
            .field("seen", &self.seen.ones().collect::<smallvec::SmallVec<[usize; 8]>>())
            .field("degree", &self.degree)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;

    #[test]
    fn releases_after_degree_sources() {
        let mut runs = Runs::new(3);
        assert_eq!(runs.accept(2, 0, &mut Natural).unwrap(), None);
        assert_eq!(runs.accept(2, 1, &mut Natural).unwrap(), None);
        assert_eq!(runs.accept(2, 2, &mut Natural).unwrap(), Some(2));
        assert!(runs.seen().is_clear());
    }

    #[test]
    fn a_new_value_restarts_the_run() {
        let mut runs = Runs::new(2);
        assert_eq!(runs.accept(1, 0, &mut Natural).unwrap(), None);
        assert_eq!(runs.accept(2, 1, &mut Natural).unwrap(), None);
        assert!(!runs.seen().contains(0));
        assert_eq!(runs.accept(2, 0, &mut Natural).unwrap(), Some(2));
    }

    #[test]
    fn repeated_source_counts_once() {
        let mut runs = Runs::new(2);
        assert_eq!(runs.accept(4, 1, &mut Natural).unwrap(), None);
        assert_eq!(runs.accept(4, 1, &mut Natural).unwrap(), None);
        assert_eq!(runs.accept(4, 0, &mut Natural).unwrap(), Some(4));
    }

    #[test]
    fn degree_one_releases_every_value() {
        let mut runs = Runs::new(3);
        runs.set_degree(1);
        assert_eq!(runs.accept(4, 1, &mut Natural).unwrap(), Some(4));
        assert_eq!(runs.accept(4, 2, &mut Natural).unwrap(), Some(4));
    }

    #[test]
    fn progress_needs_enough_active_sources() {
        let mut runs = Runs::new(3);
        assert!(runs.can_progress(3));
        assert!(!runs.can_progress(2));
        runs.accept(1, 0, &mut Natural).unwrap();
        assert!(runs.can_progress(2));
        assert!(!runs.can_progress(0));
    }

    #[test]
    fn unordered_values_fail() {
        let mut runs = Runs::new(2);
        runs.accept(1.0, 0, &mut Natural).unwrap();
        let err = runs.accept(f64::NAN, 1, &mut Natural).unwrap_err();
        assert_eq!((err.left(), err.right()), ("1.0", "NaN"));
    }
}
