use alloc::vec::Vec;
use core::pin::Pin;

/// Returns a pinned mutable reference to the element at `index`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[inline]
pub(crate) fn get_pin_mut_from_vec<T>(vec: Pin<&mut Vec<T>>, index: usize) -> Pin<&mut T> {
    // SAFETY: the vec is never resized or reordered while pinned, so no
    // element is ever moved. `x` is guaranteed to be pinned because it comes
    // from `vec` which is pinned.
    unsafe { vec.map_unchecked_mut(|v| &mut v[index]) }
}
