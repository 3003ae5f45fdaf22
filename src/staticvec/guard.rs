use core::mem;
use super::StaticVec;


/// Restores a vector's length unless committed.
///
/// Multi-element operations append through `vec` while the guard is alive. If
/// anything unwinds before [`commit`](Rollback::commit), dropping the guard
/// truncates back to the length it was created with, dropping exactly the
/// elements appended since.
pub(super) struct Rollback<'a, T, const C: usize> {
    pub(super) vec: &'a mut StaticVec<T, C>,
    len: usize,
}

impl<'a, T, const C: usize> Rollback<'a, T, C> {
    #[inline]
    pub(super) fn new(vec: &'a mut StaticVec<T, C>) -> Self {
        let len = vec.len;
        Self { vec, len }
    }

    /// Keeps everything appended so far.
    #[inline]
    pub(super) fn commit(self) { mem::forget(self) }
}

impl<T, const C: usize> Drop for Rollback<'_, T, C> {
    fn drop(&mut self) {
        self.vec.truncate(self.len)
    }
}
