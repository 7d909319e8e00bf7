use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop};
use std::ops::{Index, IndexMut};
use std::ptr;

use crate::error::infallible;
use crate::raw::{MAX_CAP, RawBuf};
use crate::{AllocError, Cursor, CursorMut, IntoIter, Position, RevCursor, RevCursorMut};

/// Capacity multiplier applied when an append finds the buffer full.
const GROWTH_FACTOR: usize = 2;

/// Growable contiguous sequence with random-access cursors.
///
/// Elements `[0, len)` of the buffer are live; slots `[len, capacity)` are
/// uninitialized and only ever written by construction in place. Capacity
/// grows by doubling on append and never shrinks on its own.
///
/// Growth reallocates: every outstanding [`Cursor`] / [`CursorMut`] /
/// [`RevCursor`] / [`RevCursorMut`] is invalidated by it. Insertion and
/// erasure also invalidate cursors at or after the mutated position.
///
/// # Example
///
/// ```
/// use cursor_vec::Vector;
///
/// let mut v = Vector::new();
/// for i in 0..5 {
///     v.push_back(i)?;
/// }
/// let third = v.begin_mut() + 2;
/// v.erase(third);
/// assert_eq!(v.as_slice(), &[0, 1, 3, 4]);
/// assert_eq!(v.to_string(), "0 1 3 4");
/// # Ok::<(), cursor_vec::AllocError>(())
/// ```
pub struct Vector<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            buf: RawBuf::with_capacity(capacity)?,
            len: 0,
        })
    }

    /// Creates a vector of `n` default values. Capacity is exactly `n`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot be allocated.
    pub fn with_len(n: usize) -> Result<Self, AllocError>
    where
        T: Default,
    {
        let mut v = Self::new();
        v.resize_default(n)?;
        Ok(v)
    }

    /// Creates a vector of `n` clones of `value`. Capacity is exactly `n`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot be allocated.
    pub fn from_elem(n: usize, value: T) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.resize(n, value)?;
        Ok(v)
    }

    /// Copies the elements in `[first, last)` into a new vector, in
    /// traversal order. Works with any cursor kind, so a reverse pair
    /// produces a reversed copy.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot be allocated.
    ///
    /// # Safety
    ///
    /// `last` must be reachable from `first` by stepping, and every
    /// position before `last` must be readable (see [`Cursor::get`]).
    pub unsafe fn from_cursors<P: Position<T>>(mut first: P, last: P) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut v = Self::new();
        while first != last {
            // SAFETY: guaranteed by the caller.
            let value = unsafe { first.read() }.clone();
            v.push_back(value)?;
            first.step();
        }
        Ok(v)
    }

    /// Number of live elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Number of live elements. Same as [`len`](Self::len).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots allocated, live or not.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Largest number of elements any vector of `T` can hold.
    ///
    /// The bound depends only on `size_of::<T>()`, so it is an associated
    /// function: `Vector::<T>::max_size()`.
    #[must_use]
    pub const fn max_size() -> usize {
        match mem::size_of::<T>() {
            0 => MAX_CAP,
            size => MAX_CAP / size,
        }
    }

    /// Ensures capacity for at least `n` elements, reallocating to
    /// exactly `n` slots if needed.
    ///
    /// Invalidates every cursor when it reallocates.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the new buffer cannot be allocated; the
    /// vector is then unchanged.
    pub fn reserve(&mut self, n: usize) -> Result<(), AllocError> {
        if n <= self.capacity() {
            return Ok(());
        }
        // SAFETY: the first `len` slots are live and len <= capacity < n.
        unsafe { self.buf.relocate(self.len, n) }
    }

    /// Makes room for `additional` more elements, reallocating to exactly
    /// `len + additional` slots if needed.
    ///
    /// An overflowing count saturates to `usize::MAX`, which `reserve`
    /// rejects as a capacity overflow.
    fn reserve_extra(&mut self, additional: usize) -> Result<(), AllocError> {
        self.reserve(self.len.saturating_add(additional))
    }

    /// Makes room for `additional` more elements, at least doubling the
    /// capacity when it has to grow.
    fn grow_for(&mut self, additional: usize) -> Result<(), AllocError> {
        let required = self.len.saturating_add(additional);
        if required <= self.capacity() {
            return Ok(());
        }
        let doubled = self.capacity().saturating_mul(GROWTH_FACTOR).min(MAX_CAP);
        self.reserve(required.max(doubled))
    }

    /// Resizes to `n` elements, filling new slots with clones of `value`.
    ///
    /// Shrinking drops the trailing elements and keeps the capacity.
    /// Growing past the capacity reserves exactly `n` slots first.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot grow; the vector is then
    /// unchanged.
    pub fn resize(&mut self, n: usize, value: T) -> Result<(), AllocError>
    where
        T: Clone,
    {
        self.resize_with(n, || value.clone())
    }

    /// Resizes to `n` elements, filling new slots with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot grow.
    pub fn resize_default(&mut self, n: usize) -> Result<(), AllocError>
    where
        T: Default,
    {
        self.resize_with(n, T::default)
    }

    /// Resizes to `n` elements, filling new slots with values from `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot grow.
    pub fn resize_with<F: FnMut() -> T>(&mut self, n: usize, mut fill: F) -> Result<(), AllocError> {
        if n <= self.len {
            self.truncate(n);
            return Ok(());
        }
        self.reserve(n)?;
        while self.len < n {
            // SAFETY: len < n <= capacity, so the slot is allocated and dead.
            unsafe { self.buf.ptr().add(self.len).write(fill()) };
            self.len += 1;
        }
        Ok(())
    }

    /// Drops every element past the first `n`. Capacity is retained.
    pub fn truncate(&mut self, n: usize) {
        if n >= self.len {
            return;
        }
        // SAFETY: [n, len) are live. len is lowered first, so a panicking
        // destructor cannot cause a second drop.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(n), self.len - n);
            self.len = n;
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element. Capacity is retained.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends `value`, doubling the capacity (or allocating one slot) when
    /// the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot grow; `value` is dropped
    /// and the vector is unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), AllocError> {
        self.grow_for(1)?;
        // SAFETY: grow_for guarantees len < capacity.
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Drops the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) {
        assert!(self.len > 0, "pop_back on empty vector");
        self.truncate(self.len - 1);
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was live and is now past len, so it is read once.
        Some(unsafe { self.buf.ptr().add(self.len).read() })
    }

    /// Returns the live elements as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) are live; the pointer is aligned and non-null
        // even when nothing is allocated.
        unsafe { std::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[must_use]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in as_slice, plus &mut self gives exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index` mutably, or `None` if out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < len()`.
    #[must_use]
    pub const unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: guaranteed by the caller.
        unsafe { &*self.buf.ptr().add(index) }
    }

    /// Returns the element at `index` mutably without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < len()`.
    #[must_use]
    pub const unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: guaranteed by the caller.
        unsafe { &mut *self.buf.ptr().add(index) }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Cursor on the first element (equal to [`end`](Self::end) if empty).
    #[must_use]
    pub const fn begin(&self) -> Cursor<T> {
        Cursor::new(self.buf.ptr(), 0)
    }

    /// Cursor one past the last element.
    #[must_use]
    pub const fn end(&self) -> Cursor<T> {
        Cursor::new(self.buf.ptr(), self.len.cast_signed())
    }

    /// Writable cursor on the first element.
    #[must_use]
    pub const fn begin_mut(&mut self) -> CursorMut<T> {
        CursorMut::new(self.buf.ptr(), 0)
    }

    /// Writable cursor one past the last element.
    #[must_use]
    pub const fn end_mut(&mut self) -> CursorMut<T> {
        CursorMut::new(self.buf.ptr(), self.len.cast_signed())
    }

    /// Reverse cursor on the last element.
    #[must_use]
    pub const fn rbegin(&self) -> RevCursor<T> {
        RevCursor::new(self.buf.ptr(), self.len.cast_signed() - 1)
    }

    /// Reverse cursor one before the first element.
    #[must_use]
    pub const fn rend(&self) -> RevCursor<T> {
        RevCursor::new(self.buf.ptr(), -1)
    }

    /// Writable reverse cursor on the last element.
    #[must_use]
    pub const fn rbegin_mut(&mut self) -> RevCursorMut<T> {
        RevCursorMut::new(self.buf.ptr(), self.len.cast_signed() - 1)
    }

    /// Writable reverse cursor one before the first element.
    #[must_use]
    pub const fn rend_mut(&mut self) -> RevCursorMut<T> {
        RevCursorMut::new(self.buf.ptr(), -1)
    }

    /// Buffer index of a cursor position, checked against `[0, limit]`.
    fn checked_index(&self, buffer: *mut T, index: isize, limit: usize) -> usize {
        debug_assert!(
            ptr::eq(buffer, self.buf.ptr()),
            "cursor does not belong to the current buffer",
        );
        match usize::try_from(index) {
            Ok(i) if i <= limit => i,
            _ => panic!(
                "cursor index {index} out of range for vector of length {}",
                self.len
            ),
        }
    }

    /// Inserts `value` before `pos` and returns a cursor to it.
    ///
    /// Elements from `pos` onward shift one slot toward the back. A full
    /// buffer grows by exactly one slot.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot grow; the vector is then
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside `[begin, end]`.
    pub fn insert(&mut self, pos: CursorMut<T>, value: T) -> Result<CursorMut<T>, AllocError> {
        let index = self.checked_index(pos.buffer(), pos.index(), self.len);
        self.reserve_extra(1)?;
        // SAFETY: index <= len < capacity. The tail move stays inside the
        // buffer and leaves `slot` logically uninitialized for the write.
        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
        Ok(self.cursor_at(index))
    }

    /// Inserts `n` clones of `value` before `pos` and returns a cursor to
    /// the first of them.
    ///
    /// The buffer grows to exactly `len + n` slots if it is too small.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot grow; the vector is then
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside `[begin, end]`.
    pub fn insert_n(&mut self, pos: CursorMut<T>, n: usize, value: &T) -> Result<CursorMut<T>, AllocError>
    where
        T: Clone,
    {
        let index = self.checked_index(pos.buffer(), pos.index(), self.len);
        self.reserve_extra(n)?;
        let old_len = self.len;
        // SAFETY: old_len + n <= capacity. While the gap is being filled the
        // shifted tail sits past len, so a panicking clone leaks it rather
        // than dropping it twice.
        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(n), old_len - index);
            self.len = index;
            for i in 0..n {
                slot.add(i).write(value.clone());
                self.len += 1;
            }
        }
        self.len = old_len + n;
        Ok(self.cursor_at(index))
    }

    /// Inserts the items of `iter` before `pos`, in order, and returns a
    /// cursor just past the last inserted item.
    ///
    /// Each item is a separate single-element [`insert`](Self::insert), so
    /// inserting `k` items costs `O(k * (len - pos))` moves and may
    /// reallocate once per item.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot grow. Items inserted
    /// before the failure stay in place.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside `[begin, end]`.
    pub fn insert_iter<I>(&mut self, mut pos: CursorMut<T>, iter: I) -> Result<CursorMut<T>, AllocError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            pos = self.insert(pos, value)?;
            pos.inc();
        }
        Ok(pos)
    }

    /// Inserts clones of `[first, last)` before `pos`, one element at a
    /// time, and returns a cursor just past the last inserted element.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot grow. Elements inserted
    /// before the failure stay in place.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside `[begin, end]`.
    ///
    /// # Safety
    ///
    /// `[first, last)` must be a readable range (see [`Cursor::get`]) of a
    /// different container, since inserting may reallocate this one.
    pub unsafe fn insert_range<P: Position<T>>(
        &mut self,
        mut pos: CursorMut<T>,
        mut first: P,
        last: P,
    ) -> Result<CursorMut<T>, AllocError>
    where
        T: Clone,
    {
        while first != last {
            // SAFETY: guaranteed by the caller.
            let value = unsafe { first.read() }.clone();
            pos = self.insert(pos, value)?;
            pos.inc();
            first.step();
        }
        Ok(pos)
    }

    /// Removes the element at `pos` and returns a cursor to the element
    /// that takes its place (or `end` if it was the last).
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside `[begin, end)`.
    pub fn erase(&mut self, pos: CursorMut<T>) -> CursorMut<T> {
        let index = self.checked_index(pos.buffer(), pos.index(), self.len);
        assert!(index < self.len, "erase at end position of vector of length {}", self.len);
        // SAFETY: index < len. The removed value is moved out before the
        // tail shifts over its slot, then dropped once the vector is
        // consistent again.
        let removed = unsafe {
            let slot = self.buf.ptr().add(index);
            let removed = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            removed
        };
        self.len -= 1;
        drop(removed);
        self.cursor_at(index)
    }

    /// Removes the elements in `[first, last)` and returns a cursor to the
    /// element that now sits at `first`.
    ///
    /// # Panics
    ///
    /// Panics if either cursor lies outside `[begin, end]` or `first` is
    /// after `last`.
    pub fn erase_range(&mut self, first: CursorMut<T>, last: CursorMut<T>) -> CursorMut<T> {
        let start = self.checked_index(first.buffer(), first.index(), self.len);
        let end = self.checked_index(last.buffer(), last.index(), self.len);
        assert!(start <= end, "erase range starts after it ends ({start} > {end})");
        let count = end - start;
        let old_len = self.len;
        // SAFETY: [start, end) are live and dropped exactly once; len is
        // lowered first so a panicking destructor leaks the tail instead.
        unsafe {
            let base = self.buf.ptr();
            self.len = start;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), count));
            ptr::copy(base.add(end), base.add(start), old_len - end);
        }
        self.len = old_len - count;
        self.cursor_at(start)
    }

    const fn cursor_at(&self, index: usize) -> CursorMut<T> {
        CursorMut::new(self.buf.ptr(), index.cast_signed())
    }

    /// Deep copy with capacity equal to the length.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the copy's buffer cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut copy = Self::with_capacity(self.len)?;
        for item in self {
            // SAFETY: copy.len < self.len == copy.capacity.
            unsafe { copy.buf.ptr().add(copy.len).write(item.clone()) };
            copy.len += 1;
        }
        Ok(copy)
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: [0, len) are live. RawBuf releases the storage afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        infallible(self.try_clone())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

/// Lexicographic: the first differing element decides, and a proper
/// prefix orders before the longer sequence.
impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Elements in order, separated by single spaces.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        infallible(self.grow_for(iter.size_hint().0));
        for value in iter {
            infallible(self.push_back(value));
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let mut this = ManuallyDrop::new(self);
        let buf = mem::replace(&mut this.buf, RawBuf::new());
        IntoIter::new(buf, this.len)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
