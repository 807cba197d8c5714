use core::cmp::Ordering;
use core::fmt;

use fixedbitset::FixedBitSet;

use crate::compare::{self, CompareError, Comparator};

/// Find the position of the smallest value among `candidates`.
///
/// Candidates are `(source index, value)` pairs in Active Set order. Each one
/// is compared against the minimum so far as `compare(candidate, minimum)`.
/// On a tie the earlier candidate stays the minimum, unless exactly one of
/// the two sources is in `demote`: then the source that isn't demoted wins.
///
/// Returns `Ok(None)` when there are no candidates.
pub(crate) fn select_min<'a, T, C>(
    candidates: impl IntoIterator<Item = (usize, &'a T)>,
    compare: &mut C,
    demote: Option<&FixedBitSet>,
) -> Result<Option<usize>, CompareError>
where
    T: fmt::Debug + 'a,
    C: Comparator<T> + ?Sized,
{
    let is_demoted = |index: usize| demote.is_some_and(|set| set.contains(index));

    let mut min: Option<(usize, usize, &T)> = None;
    for (pos, (index, value)) in candidates.into_iter().enumerate() {
        let Some((_, min_index, min_value)) = min else {
            min = Some((pos, index, value));
            continue;
        };

        let wins = match compare::try_compare(compare, value, min_value)? {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => is_demoted(min_index) && !is_demoted(index),
        };
        if wins {
            min = Some((pos, index, value));
        }
    }
    Ok(min.map(|(pos, _, _)| pos))
}
