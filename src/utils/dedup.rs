use core::cmp::Ordering;
use core::fmt;

use crate::compare::{self, CompareError, Comparator};

/// Suppresses values equal to the last value let through.
#[derive(Debug, Clone)]
pub(crate) struct Dedup<T> {
    last: Option<T>,
}

impl<T> Dedup<T> {
    pub(crate) fn new() -> Self {
        Self { last: None }
    }

    /// Whether `value` differs from the last admitted value. Admitted values
    /// replace the last one.
    pub(crate) fn admit<C>(&mut self, value: &T, compare: &mut C) -> Result<bool, CompareError>
    where
        T: Clone + fmt::Debug,
        C: Comparator<T> + ?Sized,
    {
        if let Some(last) = &self.last {
            if compare::try_compare(compare, last, value)? == Ordering::Equal {
                return Ok(false);
            }
        }
        self.last = Some(value.clone());
        Ok(true)
    }
}
