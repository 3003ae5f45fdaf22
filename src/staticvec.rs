mod drain;
mod guard;
mod into_iter;

use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop, MaybeUninit},
    ops::{Deref, DerefMut, Index, IndexMut, Range, RangeBounds},
    ptr::{self, NonNull},
    slice::{self, SliceIndex},
};
use crate::errors::CapacityError;
use drain::slice_range;
use guard::Rollback;

pub use drain::Drain;
pub use into_iter::IntoIter;

/// A fixed-capacity contiguous vector with inline storage.
///
/// Holds between `0` and `C` elements of `T` in a buffer that lives inside the
/// value itself; nothing is ever allocated. Only the first [`len`](Self::len)
/// slots hold live values, the rest are never read, dropped or assumed to be
/// initialized.
///
/// # Examples
///
/// ```
/// use staticarr::StaticVec;
///
/// let mut v = StaticVec::<i32, 16>::new();
/// v.push(3);
/// v.push(7);
///
/// assert_eq!(v.len(), 2);
/// assert_eq!(v[0], 3);
///
/// assert_eq!(v.pop(), Some(7));
/// assert_eq!(v.len(), 1);
///
/// v[0] = 19;
/// v.extend([20, 21]);
/// for x in &v {
///     println!("{x}");
/// }
///
/// assert_eq!(v, [19, 20, 21]);
/// ```
///
/// # Capacity
///
/// The capacity is the const generic `C`, available as
/// [`StaticVec::CAPACITY`], [`capacity`](Self::capacity) and
/// [`max_size`](Self::max_size). No method changes it. Operations that would
/// grow the vector past `C` are caller errors and panic:
///
/// ```should_panic
/// use staticarr::StaticVec;
///
/// let mut v = StaticVec::<i32, 1>::new();
/// v.push(1);
/// v.push(2); // Panics!
/// ```
///
/// Each of them has a non-panicking counterpart, e.g.
/// [`try_push`](Self::try_push), which hands the rejected element back inside a
/// [`CapacityError`].
///
/// # Element failures
///
/// When a `Clone`, `Default`, closure or iterator panics partway through an
/// operation that constructs several elements, the elements constructed by
/// that call are dropped again and the length is restored. Elements that were
/// already live stay live.
pub struct StaticVec<T, const C: usize> {
    data: [MaybeUninit<T>; C],
    len: usize,
}

impl<T, const C: usize> StaticVec<T, C> {

    /// The fixed capacity, `C`.
    pub const CAPACITY: usize = C;

    /// Constructs a new, empty `StaticVec<T, C>`.
    ///
    /// No element is constructed; the storage stays uninitialized.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// const EMPTY: StaticVec<u8, 4> = StaticVec::new();
    /// assert!(EMPTY.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: [const { MaybeUninit::uninit() }; C],
            len: 0,
        }
    }

    /// Collects `iter` into a new vector, or returns the first element that
    /// does not fit.
    ///
    /// Elements collected before the overflow are dropped. The rest of the
    /// iterator is left unconsumed.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let v = StaticVec::<u32, 3>::try_from_iter(1..=3).unwrap();
    /// assert_eq!(v, [1, 2, 3]);
    ///
    /// let err = StaticVec::<u32, 3>::try_from_iter(1..=5).unwrap_err();
    /// assert_eq!(err.element(), 4);
    /// ```
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, CapacityError<T>> {
        let mut out = Self::new();
        for value in iter {
            out.try_push(value)?;
        }
        Ok(out)
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub const fn len(&self) -> usize { self.len }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    #[inline(always)]
    pub const fn is_full(&self) -> bool { self.len == C }

    /// Returns the capacity, always `C`.
    #[inline(always)]
    pub const fn capacity(&self) -> usize { C }

    /// Same as [`capacity`](Self::capacity): a `StaticVec` can never hold
    /// more than `C` elements.
    #[inline(always)]
    pub const fn max_size(&self) -> usize { C }

    /// Returns the remaining capacity, `C - len`.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 3>::new();
    /// assert_eq!(v.remaining_capacity(), 3);
    /// v.push(1);
    /// v.push(2);
    /// assert_eq!(v.remaining_capacity(), 1);
    /// ```
    #[inline(always)]
    pub const fn remaining_capacity(&self) -> usize { C - self.len }

    /// Moves every element into a new vector, leaving `self` empty.
    ///
    /// Only the live range is moved. `self` stays fully usable afterwards.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut a = StaticVec::<String, 2>::from(["a".to_string(), "b".to_string()]);
    /// let b = a.take();
    ///
    /// assert!(a.is_empty());
    /// assert_eq!(b, ["a", "b"].map(String::from));
    ///
    /// a.push("c".to_string());
    /// assert_eq!(a.len(), 1);
    /// ```
    pub fn take(&mut self) -> Self {
        let mut out = Self::new();
        let len = mem::replace(&mut self.len, 0);
        // The source forgets its elements before they are copied out.
        unsafe { ptr::copy_nonoverlapping(self.as_ptr(), out.as_mut_ptr(), len) }
        out.len = len;
        out
    }

    /// Replaces the contents of `self` by moving every element out of `other`.
    ///
    /// The contents are exchanged first and `other` is cleared afterwards, so
    /// the old elements of `self` are dropped last. Every element is owned by
    /// one of the two vectors at all times: if an old element panics while
    /// being dropped, the remaining old elements are still dropped and `self`
    /// already holds all of `other`'s former elements. `other` is left empty
    /// and usable.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut a = StaticVec::<i32, 4>::from([1, 2, 3]);
    /// let mut b = StaticVec::<i32, 4>::from([7]);
    /// a.take_from(&mut b);
    ///
    /// assert_eq!(a, [7]);
    /// assert!(b.is_empty());
    /// ```
    pub fn take_from(&mut self, other: &mut Self) {
        self.swap_with(other);
        other.clear();
    }

    /// Replaces the contents with the items of `iter`.
    ///
    /// Live slots are overwritten in order, further items are appended, and
    /// only once the iterator is exhausted are leftover old elements dropped.
    ///
    /// # Panics
    ///
    /// Panics if `iter` yields more than `C` items. Items appended by this
    /// call are dropped again before unwinding; overwritten slots keep their
    /// new values.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 4>::from([1, 2, 3]);
    /// v.assign([8]);
    /// assert_eq!(v, [8]);
    ///
    /// v.assign(5..9);
    /// assert_eq!(v, [5, 6, 7, 8]);
    /// ```
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();

        for i in 0..self.len {
            match iter.next() {
                Some(value) => self.as_mut_slice()[i] = value,
                None => return self.truncate(i),
            }
        }

        let guard = Rollback::new(self);
        for value in iter {
            assert!(guard.vec.len < C, "capacity exceeded during operation `assign`");
            unsafe { guard.vec.push_unchecked(value) }
        }
        guard.commit();
    }

    /// Appends an element to the back of the vector.
    ///
    /// # Panics
    ///
    /// Panics if the vector is already full.
    /// For a panic-free `push`, see [`try_push`](Self::try_push).
    ///
    /// # Examples
    ///
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 3>::from([1, 2]);
    /// v.push(3);
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(self.len < C, "capacity exceeded during operation `push`");
        unsafe { self.push_unchecked(value) }
    }

    /// Attempts to append an element, handing it back if the vector is full.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 3>::from([1, 2]);
    ///
    /// assert!(v.try_push(3).is_ok());
    /// assert_eq!(v.try_push(4).unwrap_err().element(), 4);
    /// ```
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.len == C {
            debug!("try_push rejected: capacity {} reached", C);
            return Err(CapacityError::new(value))
        }
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Appends an element without checking the capacity.
    ///
    /// # Safety
    ///
    /// Calling this method on a full `StaticVec` is
    /// [undefined behavior](<https://doc.rust-lang.org/reference/behavior-considered-undefined.html>).
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 3>::from([1, 2]);
    /// unsafe { v.push_unchecked(3); }
    /// assert_eq!(v, [1, 2, 3])
    /// ```
    #[inline(always)]
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < C);
        unsafe { self.data.get_unchecked_mut(self.len).write(value); }
        self.len += 1;
    }

    /// Constructs an element in place at the back from `f` and returns a
    /// reference to it.
    ///
    /// If `f` panics the vector is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the vector is already full.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<String, 2>::new();
    /// v.push_with(|| "hello".to_string()).push_str(" world");
    /// assert_eq!(v[0], "hello world");
    /// ```
    pub fn push_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        assert!(self.len < C, "capacity exceeded during operation `push_with`");
        let slot = unsafe { self.data.get_unchecked_mut(self.len) };
        let value = slot.write(f());
        self.len += 1;
        value
    }

    /// Removes the last element and returns it, or `None` if the vector is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 3>::from([1, 2, 3]);
    /// assert_eq!(v.pop(), Some(3));
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        match self.len == 0 {
            true => None,
            false => Some(unsafe { self.pop_unchecked() }),
        }
    }

    /// Removes the last element without checking that there is one.
    ///
    /// # Safety
    ///
    /// The vector must not be empty.
    #[inline(always)]
    pub unsafe fn pop_unchecked(&mut self) -> T {
        debug_assert!(self.len > 0);
        self.len -= 1;
        unsafe { self.data.get_unchecked(self.len).assume_init_read() }
    }

    /// Inserts an element at `index`, shifting every element after it one
    /// slot to the right.
    ///
    /// The element is appended and rotated into place, so the shifted elements
    /// are moved, never dropped and rebuilt.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 3>::from([1, 3]);
    /// v.insert(1, 2);
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`len - index`) time.
    pub fn insert(&mut self, index: usize, element: T) {
        let len = self.len;
        assert!(index <= len, "insertion index (is {index}) should be <= len (is {len})");
        assert!(len < C, "capacity exceeded during operation `insert`");

        unsafe { self.push_unchecked(element) }
        self.as_mut_slice()[index..].rotate_right(1);
    }

    /// Inserts an element at `index`, handing it back if the vector is full.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn try_insert(&mut self, index: usize, element: T) -> Result<(), CapacityError<T>> {
        let len = self.len;
        assert!(index <= len, "insertion index (is {index}) should be <= len (is {len})");
        if len == C {
            debug!("try_insert rejected at index {}: capacity {} reached", index, C);
            return Err(CapacityError::new(element))
        }
        self.insert(index, element);
        Ok(())
    }

    /// Constructs an element in place from `f` at `index` and returns a
    /// reference to it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the vector is full.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 4>::from([1, 3]);
    /// *v.insert_with(1, || 2) *= 10;
    /// assert_eq!(v, [1, 20, 3]);
    /// ```
    pub fn insert_with<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> &mut T {
        let len = self.len;
        assert!(index <= len, "insertion index (is {index}) should be <= len (is {len})");

        self.push_with(f);
        let tail = &mut self.as_mut_slice()[index..];
        tail.rotate_right(1);
        &mut tail[0]
    }

    /// Inserts every item of `iter` at `index`, keeping their order, and
    /// returns how many were inserted.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the items do not fit. Either way the
    /// items inserted by this call are dropped and the vector is left as it
    /// was.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 6>::from([1, 5]);
    /// assert_eq!(v.insert_iter(1, [2, 3, 4]), 3);
    /// assert_eq!(v, [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, index: usize, iter: I) -> usize {
        let len = self.len;
        assert!(index <= len, "insertion index (is {index}) should be <= len (is {len})");

        let guard = Rollback::new(self);
        for value in iter {
            assert!(guard.vec.len < C, "capacity exceeded during operation `insert_iter`");
            unsafe { guard.vec.push_unchecked(value) }
        }
        guard.commit();

        let inserted = self.len - len;
        self.as_mut_slice()[index..].rotate_right(inserted);
        inserted
    }

    /// Removes and returns the element at `index`, shifting every element
    /// after it one slot to the left.
    ///
    /// If you don't need to preserve the order of elements, use
    /// [`swap_remove`](Self::swap_remove) instead.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 3>::from([1, 2, 3]);
    /// assert_eq!(v.remove(1), 2);
    /// assert_eq!(v, [1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(index < len, "removal index (is {index}) should be < len (is {len})");

        self.as_mut_slice()[index..].rotate_left(1);
        unsafe { self.pop_unchecked() }
    }

    /// Removes an element and returns it, filling the hole with the last
    /// element.
    ///
    /// This doesn't preserve ordering but **is** *O*(1).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 5>::from([1, 2, 3, 4, 5]);
    /// assert_eq!(v.swap_remove(2), 3);
    /// assert_eq!(v, [1, 2, 5, 4]);
    /// ```
    pub fn swap_remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(index < len, "swap_remove index (is {index}) should be < len (is {len})");
        self.len -= 1;
        unsafe {
            self.data.swap(index, self.len);
            self.data.get_unchecked(self.len).assume_init_read()
        }
    }

    /// Drops the elements in `range` and closes the gap, returning the index
    /// of the first element after the erased ones (or `len` if there is none).
    ///
    /// The erased elements are rotated past the tail and then dropped, so the
    /// surviving elements keep their relative order.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or extends past `len`.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 5>::from([1, 2, 3, 4, 5]);
    /// let next = v.erase(1..3);
    ///
    /// assert_eq!(v, [1, 4, 5]);
    /// assert_eq!(v[next], 4);
    /// ```
    pub fn erase<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        let Range { start, end } = slice_range(range, ..self.len);
        let erased = end - start;

        self.as_mut_slice()[start..].rotate_left(erased);
        self.truncate(self.len - erased);
        start
    }

    /// Shortens the vector to `len`, dropping the trailing elements.
    ///
    /// Has no effect if `len` is not below the current length.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len { return }

        let tail = self.len - len;
        self.len = len;
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(self.as_mut_ptr().add(len), tail));
        }
    }

    /// Drops every element. The capacity is unaffected.
    #[inline]
    pub fn clear(&mut self) { self.truncate(0) }

    /// Removes `range` from the vector and returns its elements as an
    /// iterator.
    ///
    /// Elements the iterator did not yield are dropped with it, and the tail
    /// then shifts left to close the gap.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or extends past `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 4>::from([1, 2, 3, 4]);
    /// let drained: Vec<_> = v.drain(1..3).collect();
    ///
    /// assert_eq!(drained, [2, 3]);
    /// assert_eq!(v, [1, 4]);
    /// ```
    pub fn drain<R: RangeBounds<usize>>(&mut self, range: R) -> Drain<'_, T, C> {
        let Range { start, end } = slice_range(range, ..self.len);
        let len = self.len;

        // Anything from `start` on is owned by the drain until it is dropped.
        self.len = start;
        let iter = unsafe {
            slice::from_raw_parts(self.as_ptr().add(start), end - start).iter()
        };

        Drain {
            tail_start: end,
            tail_len: len - end,
            iter,
            vec: NonNull::from(self),
        }
    }

    /// Exchanges the contents of `self` and `other`.
    ///
    /// The overlapping prefix is swapped pairwise, then the rest of the longer
    /// vector is moved across. Nothing is cloned or allocated.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut a = StaticVec::<i32, 4>::from([1]);
    /// let mut b = StaticVec::<i32, 4>::from([2, 3]);
    /// a.swap_with(&mut b);
    ///
    /// assert_eq!(a, [2, 3]);
    /// assert_eq!(b, [1]);
    /// ```
    pub fn swap_with(&mut self, other: &mut Self) {
        let (small, large) = match self.len < other.len {
            true => (self, other),
            false => (other, self),
        };
        let common = small.len;
        let extra = large.len - common;

        small.as_mut_slice().swap_with_slice(&mut large.as_mut_slice()[..common]);
        unsafe {
            ptr::copy_nonoverlapping(
                large.as_ptr().add(common),
                small.as_mut_ptr().add(common),
                extra,
            );
        }
        large.len = common;
        small.len = common + extra;
    }

    /// Returns a reference to the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. See [`first`](<[T]>::first) for an
    /// `Option` returning version.
    #[inline]
    pub fn front(&self) -> &T {
        assert!(self.len > 0, "front called on an empty StaticVec");
        unsafe { self.data.get_unchecked(0).assume_init_ref() }
    }

    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "front_mut called on an empty StaticVec");
        unsafe { self.data.get_unchecked_mut(0).assume_init_mut() }
    }

    /// Returns a reference to the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back(&self) -> &T {
        assert!(self.len > 0, "back called on an empty StaticVec");
        unsafe { self.data.get_unchecked(self.len - 1).assume_init_ref() }
    }

    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "back_mut called on an empty StaticVec");
        unsafe { self.data.get_unchecked_mut(self.len - 1).assume_init_mut() }
    }

    /// Extracts a slice of the live elements.
    ///
    /// Equivalent to `&v[..]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::{self, Write};
    /// use staticarr::StaticVec;
    ///
    /// let v = StaticVec::<u8, 3>::from([1, 2, 3]);
    /// io::sink().write(v.as_slice()).unwrap();
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // We are tracking initialized values via len, ensuring the slice is not UB
        unsafe { slice::from_raw_parts(self.data.as_ptr().cast(), self.len) }
    }

    /// Extracts a mutable slice of the live elements.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // We are tracking initialized values via len, ensuring the slice is not UB
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr().cast(), self.len) }
    }

    /// Returns a raw pointer to the start of the storage.
    ///
    /// Only the first `len` elements behind it are valid `T` values; the
    /// memory up to `capacity` is addressable but uninitialized.
    #[inline]
    pub const fn as_ptr(&self) -> *const T { self.data.as_ptr().cast() }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T { self.data.as_mut_ptr().cast() }

    /// Returns the uninitialized slots past the live range.
    ///
    /// Write into them, then call [`set_len`](Self::set_len) to take
    /// ownership of what was written.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 4>::from([1]);
    /// let spare = v.spare_capacity_mut();
    /// spare[0].write(2);
    /// spare[1].write(3);
    /// unsafe { v.set_len(3) };
    ///
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.data[self.len..]
    }

    /// Forces the length to `len`.
    ///
    /// # Safety
    ///
    /// `len` must not exceed `C`, and the slots `old_len..len` must have been
    /// initialized. Shrinking this way leaks the cut-off elements instead of
    /// dropping them.
    #[inline]
    pub unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= C);
        self.len = len;
    }
}

impl<T: Default, const C: usize> StaticVec<T, C> {

    /// Constructs a vector of `n` default values.
    ///
    /// # Panics
    ///
    /// Panics if `n > C`.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let v = StaticVec::<i32, 4>::with_default(3);
    /// assert_eq!(v, [0, 0, 0]);
    /// ```
    pub fn with_default(n: usize) -> Self {
        let mut out = Self::new();
        out.resize_default(n);
        out
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `new_len > C`.
    pub fn resize_default(&mut self, new_len: usize) {
        assert!(new_len <= C, "capacity exceeded during operation `resize_default`");
        if new_len <= self.len { return self.truncate(new_len) }

        let guard = Rollback::new(self);
        while guard.vec.len < new_len {
            unsafe { guard.vec.push_unchecked(T::default()) }
        }
        guard.commit();
    }
}

impl<T: Clone, const C: usize> StaticVec<T, C> {

    /// Constructs a vector of `n` clones of `elem`.
    ///
    /// # Panics
    ///
    /// Panics if `n > C`.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let v = StaticVec::<&str, 4>::from_elem("x", 2);
    /// assert_eq!(v, ["x", "x"]);
    /// ```
    pub fn from_elem(elem: T, n: usize) -> Self {
        let mut out = Self::new();
        out.resize(n, elem);
        out
    }

    /// Clones `other` into a new vector.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let v = StaticVec::<u8, 4>::from_slice(&[1, 2]).unwrap();
    /// assert_eq!(v, [1, 2]);
    ///
    /// assert!(StaticVec::<u8, 1>::from_slice(&[1, 2]).is_err());
    /// ```
    pub fn from_slice(other: &[T]) -> Result<Self, CapacityError> {
        let mut out = Self::new();
        out.try_extend_from_slice(other)?;
        Ok(out)
    }

    /// Resizes to `new_len`, filling new slots with clones of `value`.
    ///
    /// When shrinking, the trailing elements are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `new_len > C`.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 5>::from([1, 2]);
    /// v.resize(4, 7);
    /// assert_eq!(v, [1, 2, 7, 7]);
    ///
    /// v.resize(1, 0);
    /// assert_eq!(v, [1]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        assert!(new_len <= C, "capacity exceeded during operation `resize`");
        match new_len > self.len {
            false => self.truncate(new_len),
            true => {
                let guard = Rollback::new(self);
                while guard.vec.len + 1 < new_len {
                    unsafe { guard.vec.push_unchecked(value.clone()) }
                }
                unsafe { guard.vec.push_unchecked(value) }
                guard.commit();
            }
        }
    }

    /// Replaces the contents with `n` clones of `value`.
    ///
    /// Live slots are updated through [`Clone::clone_from`], so they may keep
    /// their resources; missing slots are cloned into and the excess is dropped
    /// last.
    ///
    /// # Panics
    ///
    /// Panics if `n > C`.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 4>::from([1, 2, 3]);
    /// v.assign_elem(9, 2);
    /// assert_eq!(v, [9, 9]);
    /// ```
    pub fn assign_elem(&mut self, value: T, n: usize) {
        assert!(n <= C, "capacity exceeded during operation `assign_elem`");
        let common = self.len.min(n);
        self.as_mut_slice()[..common]
            .iter_mut()
            .for_each(|slot| slot.clone_from(&value));

        match n > self.len {
            true => self.resize(n, value),
            false => self.truncate(n),
        }
    }

    /// Inserts `n` clones of `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if `n` elements do not fit. A panicking
    /// `clone` drops the clones already made and leaves the vector as it was.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 5>::from([1, 2]);
    /// v.insert_n(1, 3, &0);
    /// assert_eq!(v, [1, 0, 0, 0, 2]);
    /// ```
    pub fn insert_n(&mut self, index: usize, n: usize, value: &T) {
        let len = self.len;
        assert!(index <= len, "insertion index (is {index}) should be <= len (is {len})");
        assert!(n <= C - len, "capacity exceeded during operation `insert_n`");

        let guard = Rollback::new(self);
        for _ in 0..n {
            unsafe { guard.vec.push_unchecked(value.clone()) }
        }
        guard.commit();

        self.as_mut_slice()[index..].rotate_right(n);
    }

    /// Clones and appends every element of `other`.
    ///
    /// # Panics
    ///
    /// Panics if `other` does not fit. See
    /// [`try_extend_from_slice`](Self::try_extend_from_slice).
    pub fn extend_from_slice(&mut self, other: &[T]) {
        assert!(other.len() <= C - self.len, "capacity exceeded during operation `extend_from_slice`");

        let mut guard = Rollback::new(self);
        other.iter().for_each(|v| unsafe { guard.vec.push_unchecked(v.clone()) });
        guard.commit();
    }

    /// Clones and appends every element of `other`, or changes nothing if
    /// they do not all fit.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let mut v = StaticVec::<i32, 3>::from([1]);
    /// assert!(v.try_extend_from_slice(&[2, 3]).is_ok());
    /// assert!(v.try_extend_from_slice(&[4]).is_err());
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    pub fn try_extend_from_slice(&mut self, other: &[T]) -> Result<(), CapacityError> {
        if other.len() > C - self.len {
            debug!("extend_from_slice rejected: {} elements, {} slots free", other.len(), C - self.len);
            return Err(CapacityError::new(()))
        }
        self.extend_from_slice(other);
        Ok(())
    }
}

/// Exchanges the contents of two vectors. Same as
/// [`StaticVec::swap_with`].
///
/// # Examples
/// ```
/// use staticarr::StaticVec;
///
/// let mut a = StaticVec::<i32, 2>::from([1]);
/// let mut b = StaticVec::<i32, 2>::from([2, 3]);
/// staticarr::swap(&mut a, &mut b);
///
/// assert_eq!(a, [2, 3]);
/// assert_eq!(b, [1]);
/// ```
#[inline]
pub fn swap<T, const C: usize>(a: &mut StaticVec<T, C>, b: &mut StaticVec<T, C>) {
    a.swap_with(b)
}

impl<T, const C: usize> Drop for StaticVec<T, C> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T, const C: usize> Default for StaticVec<T, C> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T: Clone, const C: usize> Clone for StaticVec<T, C> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        self.iter().for_each(|v| unsafe { out.push_unchecked(v.clone()) });
        out
    }

    /// Overwrites `self` with clones of `source`, reusing live slots.
    ///
    /// Slots live in both are updated with [`Clone::clone_from`], missing
    /// slots are cloned into, and the excess is dropped last.
    fn clone_from(&mut self, source: &Self) {
        let common = self.len.min(source.len);
        self.as_mut_slice()[..common].clone_from_slice(&source[..common]);

        match source.len > common {
            true => {
                let mut guard = Rollback::new(self);
                source[common..].iter().for_each(|v| unsafe { guard.vec.push_unchecked(v.clone()) });
                guard.commit();
            },
            false => self.truncate(source.len),
        }
    }
}

impl<T: fmt::Debug, const C: usize> fmt::Debug for StaticVec<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Hash, const C: usize> Hash for StaticVec<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state)
    }
}

impl<T: PartialEq, const C: usize, const D: usize> PartialEq<StaticVec<T, D>> for StaticVec<T, C> {
    fn eq(&self, other: &StaticVec<T, D>) -> bool {
        self.len == other.len &&
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const C: usize> Eq for StaticVec<T, C> {}

impl<T: PartialEq, const C: usize, const N: usize> PartialEq<[T; N]> for StaticVec<T, C> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const C: usize, const N: usize> PartialEq<&[T; N]> for StaticVec<T, C> {
    fn eq(&self, other: &&[T; N]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const C: usize> PartialEq<[T]> for StaticVec<T, C> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const C: usize> PartialEq<&[T]> for StaticVec<T, C> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

#[cfg(feature = "std")]
impl<T: PartialEq, const C: usize> PartialEq<Vec<T>> for StaticVec<T, C> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd, const C: usize, const D: usize> PartialOrd<StaticVec<T, D>> for StaticVec<T, C> {
    #[inline]
    fn partial_cmp(&self, other: &StaticVec<T, D>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, const C: usize> Ord for StaticVec<T, C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T, const C: usize> Deref for StaticVec<T, C> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target { self.as_slice() }
}

impl<T, const C: usize> DerefMut for StaticVec<T, C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target { self.as_mut_slice() }
}

impl<T, const C: usize, I: SliceIndex<[T]>> Index<I> for StaticVec<T, C> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&**self, index)
    }
}

impl<T, const C: usize, I: SliceIndex<[T]>> IndexMut<I> for StaticVec<T, C> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut **self, index)
    }
}

impl<T, const C: usize> AsRef<[T]> for StaticVec<T, C> {
    #[inline]
    fn as_ref(&self) -> &[T] { self.as_slice() }
}

impl<T, const C: usize> AsMut<[T]> for StaticVec<T, C> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T, const C: usize> Borrow<[T]> for StaticVec<T, C> {
    #[inline]
    fn borrow(&self) -> &[T] { self.as_slice() }
}

impl<T, const C: usize> BorrowMut<[T]> for StaticVec<T, C> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<'a, T, const C: usize> IntoIterator for &'a StaticVec<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T, const C: usize> IntoIterator for &'a mut StaticVec<T, C> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T, const C: usize> IntoIterator for StaticVec<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { IntoIter::new(ManuallyDrop::new(self)) }
}

impl<T, const C: usize> Extend<T> for StaticVec<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        items.into_iter().for_each(|value| {
            assert!(self.len < C, "capacity exceeded during operation `extend`");
            unsafe { self.push_unchecked(value) }
        });
    }
}

impl<'a, T: Copy + 'a, const C: usize> Extend<&'a T> for StaticVec<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, items: I) {
        self.extend(items.into_iter().copied())
    }
}

impl<T, const C: usize> FromIterator<T> for StaticVec<T, C> {

    /// Collects into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields more than `C` items. See
    /// [`try_from_iter`](StaticVec::try_from_iter).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T, const C: usize, const N: usize> From<[T; N]> for StaticVec<T, C> {

    /// Create a new instance from an array.
    ///
    /// The array consumed may be smaller than the capacity `C`.
    ///
    /// # Examples
    /// ```
    /// use staticarr::StaticVec;
    ///
    /// let v = StaticVec::<i32, 3>::from([1, 2]);
    /// assert_eq!(v.remaining_capacity(), 1);
    /// ```
    /// # Panics
    ///
    /// Panics if the array is longer than `C`.
    /// ```should_panic
    /// use staticarr::StaticVec;
    ///
    /// let v = StaticVec::<i32, 2>::from([1, 2, 3]); // Panics!
    /// ```
    fn from(arr: [T; N]) -> Self {
        assert!(N <= C, "array of length {N} does not fit in capacity {C}");

        let arr = ManuallyDrop::new(arr);
        let mut out = Self::new();

        unsafe { ptr::copy_nonoverlapping(arr.as_ptr(), out.as_mut_ptr(), N) }
        out.len = N;
        out
    }
}

impl<T: Clone, const C: usize> TryFrom<&[T]> for StaticVec<T, C> {
    type Error = CapacityError;

    #[inline]
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> { Self::from_slice(slice) }
}

#[cfg(feature = "std")]
impl<T, const C: usize> From<Vec<T>> for StaticVec<T, C> {

    /// Create a new instance from a vec.
    ///
    /// # Panics
    ///
    /// Panics if the vec is longer than `C`.
    /// ```should_panic
    /// use staticarr::StaticVec;
    ///
    /// let v = StaticVec::<i32, 2>::from(vec![1, 2, 3]); // Panics!
    /// ```
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        assert!(len <= C, "vec of length {len} does not fit in capacity {C}");
        vec.into_iter().collect()
    }
}

#[cfg(feature = "std")]
impl<T, const C: usize> From<StaticVec<T, C>> for Vec<T> {
    fn from(v: StaticVec<T, C>) -> Self {
        v.into_iter().collect()
    }
}
