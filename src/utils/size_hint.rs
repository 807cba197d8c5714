//! Arithmetic on `Iterator::size_hint` bounds.

pub(crate) type SizeHint = (usize, Option<usize>);

/// The bounds of two sequences consumed one after the other.
pub(crate) fn add(a: SizeHint, b: SizeHint) -> SizeHint {
    let lower = a.0.saturating_add(b.0);
    let upper = match (a.1, b.1) {
        (Some(a), Some(b)) => a.checked_add(b),
        _ => None,
    };
    (lower, upper)
}

/// The bounds of all sequences combined. The upper bound is only known if
/// every sequence reports one.
pub(crate) fn sum(hints: impl IntoIterator<Item = SizeHint>) -> SizeHint {
    hints.into_iter().fold((0, Some(0)), add)
}
