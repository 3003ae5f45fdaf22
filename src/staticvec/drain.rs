use core::{fmt, iter::FusedIterator, mem, ops, ptr::{self, NonNull}, slice};
use super::StaticVec;


#[inline]
const fn ptr_copy<T>(elt: &T) -> T { unsafe { ptr::read(elt as *const T) } }


/// Resolves `range` against a slice of length `bounds.end`.
///
/// Panics with the same messages slice indexing uses when the range is
/// inverted, overflows, or runs past the end.
#[inline]
pub(super) fn slice_range<R>(range: R, bounds: ops::RangeTo<usize>) -> ops::Range<usize>
where
    R: ops::RangeBounds<usize>,
{
    let len = bounds.end;

    let start = match range.start_bound() {
        ops::Bound::Included(&start) => start,
        ops::Bound::Excluded(&start) => match start.checked_add(1) {
            Some(start) => start,
            None => panic!("attempted to index slice from after maximum usize"),
        },
        ops::Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        ops::Bound::Included(&end) => match end.checked_add(1) {
            Some(end) => end,
            None => panic!("attempted to index slice up to maximum usize"),
        },
        ops::Bound::Excluded(&end) => end,
        ops::Bound::Unbounded => len,
    };

    if start > end {
        panic!("slice index starts at {start} but ends at {end}")
    }

    if end > len {
        panic!("range end index {end} out of range for slice of length {len}")
    }

    ops::Range { start, end }
}


/// A draining iterator for [`StaticVec`].
///
/// Created by [`StaticVec::drain`]. Elements left in the range when it is
/// dropped are dropped with it, then the tail moves back to close the gap.
pub struct Drain<'a, T: 'a, const C: usize> {
    pub(super) tail_start: usize,
    pub(super) tail_len: usize,
    pub(super) iter: slice::Iter<'a, T>,
    pub(super) vec: NonNull<StaticVec<T, C>>,
}

impl<T, const C: usize> Drain<'_, T, C> {
    /// Returns the elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] { self.iter.as_slice() }
}

#[cfg(not(tarpaulin_include))]
impl<T: fmt::Debug, const C: usize> fmt::Debug for Drain<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.iter.as_slice()).finish()
    }
}

unsafe impl<T: Sync, const C: usize> Sync for Drain<'_, T, C> {}
unsafe impl<T: Send, const C: usize> Send for Drain<'_, T, C> {}

impl<T, const C: usize> Iterator for Drain<'_, T, C> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.iter.next().map(ptr_copy) }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl<T, const C: usize> DoubleEndedIterator for Drain<'_, T, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(ptr_copy)
    }
}

impl<T, const C: usize> ExactSizeIterator for Drain<'_, T, C> {
    #[inline]
    fn len(&self) -> usize { self.iter.len() }
}

impl<T, const C: usize> FusedIterator for Drain<'_, T, C> {}

impl<T, const C: usize> Drop for Drain<'_, T, C> {
    fn drop(&mut self) {
        /// Moves the tail back into place, even if dropping the range panics.
        struct DropGuard<'r, 'a, T, const C: usize>(&'r mut Drain<'a, T, C>);

        impl<T, const C: usize> Drop for DropGuard<'_, '_, T, C> {
            fn drop(&mut self) {
                let drain = &mut *self.0;
                if drain.tail_len == 0 { return }

                let vec = unsafe { drain.vec.as_mut() };
                let start = vec.len;
                let tail = drain.tail_start;

                if tail != start {
                    let ptr = vec.as_mut_ptr();
                    unsafe { ptr.add(start).copy_from(ptr.add(tail), drain.tail_len) }
                }

                vec.len = start + drain.tail_len;
            }
        }

        let remaining = mem::take(&mut self.iter);
        let _guard = DropGuard(self);

        // Slice drop glue keeps dropping the rest if one element panics.
        unsafe { ptr::drop_in_place(remaining.as_slice() as *const [T] as *mut [T]) }
    }
}
