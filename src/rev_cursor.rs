use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{Cursor, Position};

/// Read-only position that walks a [`Vector`](crate::Vector) back to front.
///
/// Same representation and invalidation rules as [`Cursor`], with the
/// direction inverted: `rbegin` sits on the last element, `rend` one
/// before the first, incrementing moves toward the front, and `+k` moves
/// `k` elements toward the front.
///
/// ```
/// use cursor_vec::Vector;
///
/// let v: Vector<i32> = (1..=3).collect();
/// let mut seen = Vec::new();
/// let mut it = v.rbegin();
/// while it != v.rend() {
///     seen.push(unsafe { *it.get() });
///     it.inc();
/// }
/// assert_eq!(seen, [3, 2, 1]);
/// ```
pub struct RevCursor<T> {
    base: *mut T,
    index: isize,
}

impl<T> RevCursor<T> {
    pub(crate) const fn new(base: *mut T, index: isize) -> Self {
        Self { base, index }
    }

    /// Returns a cursor that refers to no buffer.
    #[must_use]
    pub const fn null() -> Self {
        Self::new(std::ptr::null_mut(), 0)
    }

    /// Returns `true` if this cursor was default-constructed.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.base.is_null()
    }

    /// Buffer index of the element under the cursor (`-1` at `rend`).
    #[must_use]
    pub const fn index(&self) -> isize {
        self.index
    }

    /// Forward cursor one element past this position.
    ///
    /// `rbegin().base() == end()` and `rend().base() == begin()`.
    #[must_use]
    pub const fn base(self) -> Cursor<T> {
        Cursor::new(self.base, self.index + 1)
    }

    /// Address this cursor designates.
    #[must_use]
    pub const fn as_ptr(&self) -> *const T {
        self.base.wrapping_offset(self.index)
    }

    /// Prefix increment: moves one element toward the front.
    pub const fn inc(&mut self) -> &mut Self {
        self.index -= 1;
        self
    }

    /// Prefix decrement: moves one element toward the back.
    pub const fn dec(&mut self) -> &mut Self {
        self.index += 1;
        self
    }

    /// Postfix increment.
    pub const fn post_inc(&mut self) -> Self {
        let old = *self;
        self.index -= 1;
        old
    }

    /// Postfix decrement.
    pub const fn post_dec(&mut self) -> Self {
        let old = *self;
        self.index += 1;
        old
    }

    /// Reads the element under the cursor.
    ///
    /// # Safety
    ///
    /// See [`Cursor::get`].
    #[must_use]
    pub const unsafe fn get<'a>(&self) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { &*self.as_ptr() }
    }

    /// Reads the element `k` positions further in reverse order,
    /// i.e. buffer index `index() - k`.
    ///
    /// # Safety
    ///
    /// See [`Cursor::get`] for the position `self + k`.
    #[must_use]
    pub const unsafe fn at<'a>(&self, k: isize) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { &*self.base.wrapping_offset(self.index - k) }
    }
}

impl<T> Clone for RevCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RevCursor<T> {}

impl<T> Default for RevCursor<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> std::fmt::Debug for RevCursor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RevCursor({})", self.index)
    }
}

impl<T> PartialEq for RevCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.index == other.index
    }
}

impl<T> Eq for RevCursor<T> {}

/// Ordered by traversal: `rbegin() < rend()`.
impl<T> PartialOrd for RevCursor<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.base == other.base).then(|| other.index.cmp(&self.index))
    }
}

impl<T> Add<isize> for RevCursor<T> {
    type Output = Self;

    fn add(self, rhs: isize) -> Self {
        Self::new(self.base, self.index - rhs)
    }
}

impl<T> Sub<isize> for RevCursor<T> {
    type Output = Self;

    fn sub(self, rhs: isize) -> Self {
        Self::new(self.base, self.index + rhs)
    }
}

impl<T> AddAssign<isize> for RevCursor<T> {
    fn add_assign(&mut self, rhs: isize) {
        self.index -= rhs;
    }
}

impl<T> SubAssign<isize> for RevCursor<T> {
    fn sub_assign(&mut self, rhs: isize) {
        self.index += rhs;
    }
}

/// Signed number of reverse steps from `rhs` to `self`.
impl<T> Sub for RevCursor<T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        debug_assert!(self.base == rhs.base, "distance between cursors of different buffers");
        rhs.index - self.index
    }
}

/// Writable reverse position. Wraps a [`RevCursor`].
pub struct RevCursorMut<T> {
    inner: RevCursor<T>,
}

impl<T> RevCursorMut<T> {
    pub(crate) const fn new(base: *mut T, index: isize) -> Self {
        Self {
            inner: RevCursor::new(base, index),
        }
    }

    /// Returns a cursor that refers to no buffer.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            inner: RevCursor::null(),
        }
    }

    /// Read-only view of the same position.
    #[must_use]
    pub const fn as_const(&self) -> RevCursor<T> {
        self.inner
    }

    /// Returns `true` if this cursor was default-constructed.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.inner.is_null()
    }

    /// Buffer index of the element under the cursor.
    #[must_use]
    pub const fn index(&self) -> isize {
        self.inner.index()
    }

    /// Address this cursor designates.
    #[must_use]
    pub const fn as_mut_ptr(&self) -> *mut T {
        self.inner.base.wrapping_offset(self.inner.index)
    }

    /// Prefix increment: moves one element toward the front.
    pub const fn inc(&mut self) -> &mut Self {
        self.inner.inc();
        self
    }

    /// Prefix decrement: moves one element toward the back.
    pub const fn dec(&mut self) -> &mut Self {
        self.inner.dec();
        self
    }

    /// Postfix increment.
    pub const fn post_inc(&mut self) -> Self {
        Self {
            inner: self.inner.post_inc(),
        }
    }

    /// Postfix decrement.
    pub const fn post_dec(&mut self) -> Self {
        Self {
            inner: self.inner.post_dec(),
        }
    }

    /// Reads the element under the cursor.
    ///
    /// # Safety
    ///
    /// See [`Cursor::get`].
    #[must_use]
    pub const unsafe fn get<'a>(&self) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.inner.get() }
    }

    /// Writable access to the element under the cursor.
    ///
    /// # Safety
    ///
    /// See [`CursorMut::get_mut`](crate::CursorMut::get_mut).
    #[must_use]
    pub const unsafe fn get_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: guaranteed by the caller.
        unsafe { &mut *self.as_mut_ptr() }
    }

    /// Reads buffer index `index() - k`.
    ///
    /// # Safety
    ///
    /// See [`Cursor::get`] for the position `self + k`.
    #[must_use]
    pub const unsafe fn at<'a>(&self, k: isize) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.inner.at(k) }
    }

    /// Writable access to buffer index `index() - k`.
    ///
    /// # Safety
    ///
    /// See [`CursorMut::get_mut`](crate::CursorMut::get_mut) for the
    /// position `self + k`.
    #[must_use]
    pub const unsafe fn at_mut<'a>(&mut self, k: isize) -> &'a mut T {
        // SAFETY: guaranteed by the caller.
        unsafe { &mut *self.as_mut_ptr().wrapping_offset(-k) }
    }
}

impl<T> Clone for RevCursorMut<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RevCursorMut<T> {}

impl<T> Default for RevCursorMut<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> std::fmt::Debug for RevCursorMut<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RevCursorMut({})", self.index())
    }
}

impl<T> From<RevCursorMut<T>> for RevCursor<T> {
    fn from(cursor: RevCursorMut<T>) -> Self {
        cursor.inner
    }
}

impl<T> PartialEq for RevCursorMut<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Eq for RevCursorMut<T> {}

impl<T> PartialEq<RevCursor<T>> for RevCursorMut<T> {
    fn eq(&self, other: &RevCursor<T>) -> bool {
        self.inner == *other
    }
}

impl<T> PartialEq<RevCursorMut<T>> for RevCursor<T> {
    fn eq(&self, other: &RevCursorMut<T>) -> bool {
        *self == other.inner
    }
}

impl<T> PartialOrd for RevCursorMut<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<T> PartialOrd<RevCursor<T>> for RevCursorMut<T> {
    fn partial_cmp(&self, other: &RevCursor<T>) -> Option<Ordering> {
        self.inner.partial_cmp(other)
    }
}

impl<T> PartialOrd<RevCursorMut<T>> for RevCursor<T> {
    fn partial_cmp(&self, other: &RevCursorMut<T>) -> Option<Ordering> {
        self.partial_cmp(&other.inner)
    }
}

impl<T> Add<isize> for RevCursorMut<T> {
    type Output = Self;

    fn add(self, rhs: isize) -> Self {
        Self {
            inner: self.inner + rhs,
        }
    }
}

impl<T> Sub<isize> for RevCursorMut<T> {
    type Output = Self;

    fn sub(self, rhs: isize) -> Self {
        Self {
            inner: self.inner - rhs,
        }
    }
}

impl<T> AddAssign<isize> for RevCursorMut<T> {
    fn add_assign(&mut self, rhs: isize) {
        self.inner += rhs;
    }
}

impl<T> SubAssign<isize> for RevCursorMut<T> {
    fn sub_assign(&mut self, rhs: isize) {
        self.inner -= rhs;
    }
}

impl<T> Sub for RevCursorMut<T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        self.inner - rhs.inner
    }
}

impl<T> Position<T> for RevCursor<T> {
    fn step(&mut self) {
        self.inc();
    }

    unsafe fn read<'a>(&self) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.get() }
    }
}

impl<T> Position<T> for RevCursorMut<T> {
    fn step(&mut self) {
        self.inc();
    }

    unsafe fn read<'a>(&self) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.get() }
    }
}
