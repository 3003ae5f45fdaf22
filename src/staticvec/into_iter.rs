use core::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr, slice};
use super::StaticVec;


/// An owning iterator over the elements of a [`StaticVec`].
///
/// Created by the `into_iter` method of [`StaticVec`] (provided by the
/// [`IntoIterator`] trait). Elements not yet yielded are dropped with it.
pub struct IntoIter<T, const C: usize> {
    vec: ManuallyDrop<StaticVec<T, C>>,
    start: usize,
}

impl<T, const C: usize> IntoIter<T, C> {
    #[inline]
    pub(super) const fn new(vec: ManuallyDrop<StaticVec<T, C>>) -> Self {
        Self { vec, start: 0 }
    }

    /// Returns the elements not yet yielded.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut iter = StaticVec::<i32, 3>::from([1, 2, 3]).into_iter();
    /// iter.next();
    /// assert_eq!(iter.as_slice(), &[2, 3]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(self.vec.as_ptr().add(self.start), self.vec.len - self.start)
        }
    }
}

#[cfg(not(tarpaulin_include))]
impl<T: fmt::Debug, const C: usize> fmt::Debug for IntoIter<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const C: usize> Iterator for IntoIter<T, C> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.vec.len { return None }

        let value = unsafe { self.vec.data.get_unchecked(self.start).assume_init_read() };
        self.start += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len - self.start;
        (remaining, Some(remaining))
    }
}

impl<T, const C: usize> DoubleEndedIterator for IntoIter<T, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.vec.len { return None }

        self.vec.len -= 1;
        Some(unsafe { self.vec.data.get_unchecked(self.vec.len).assume_init_read() })
    }
}

impl<T, const C: usize> ExactSizeIterator for IntoIter<T, C> {}

impl<T, const C: usize> FusedIterator for IntoIter<T, C> {}

impl<T, const C: usize> Drop for IntoIter<T, C> {
    fn drop(&mut self) {
        let remaining = self.vec.len - self.start;
        unsafe {
            let tail = self.vec.as_mut_ptr().add(self.start);
            ptr::drop_in_place(slice::from_raw_parts_mut(tail, remaining));
        }
    }
}
