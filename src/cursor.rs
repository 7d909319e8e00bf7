use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::RevCursor;

/// Read-only random-access position in a [`Vector`](crate::Vector)'s buffer.
///
/// A cursor is a buffer address plus a signed element index. It holds no
/// borrow of the vector and no liveness information: it stays usable only
/// while the vector is neither reallocated nor shifted past its position.
/// Moving the cursor is plain integer arithmetic and is always safe;
/// reading through it is `unsafe` and requires a live element.
///
/// Positions in three regions are meaningful: one before `begin` (only as
/// the result of stepping back from `begin`), `[begin, end)` (readable),
/// and `end` (a limit, not readable).
///
/// # Example
///
/// ```
/// use cursor_vec::Vector;
///
/// let v: Vector<i32> = (1..=3).collect();
/// let mut it = v.begin();
/// it += 2;
/// assert_eq!(unsafe { *it.get() }, 3);
/// assert_eq!(v.end() - v.begin(), 3);
/// ```
pub struct Cursor<T> {
    base: *mut T,
    index: isize,
}

impl<T> Cursor<T> {
    pub(crate) const fn new(base: *mut T, index: isize) -> Self {
        Self { base, index }
    }

    /// Returns a cursor that refers to no buffer.
    ///
    /// It compares equal only to other null cursors and must never be
    /// dereferenced.
    #[must_use]
    pub const fn null() -> Self {
        Self::new(std::ptr::null_mut(), 0)
    }

    /// Returns `true` if this cursor was default-constructed.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.base.is_null()
    }

    /// Element index relative to the start of the buffer.
    ///
    /// `-1` is the position before `begin`.
    #[must_use]
    pub const fn index(&self) -> isize {
        self.index
    }

    pub(crate) const fn buffer(&self) -> *mut T {
        self.base
    }

    /// Address this cursor designates. Computing it never dereferences.
    #[must_use]
    pub const fn as_ptr(&self) -> *const T {
        self.base.wrapping_offset(self.index)
    }

    /// Prefix increment: moves one element forward, returns the moved cursor.
    pub const fn inc(&mut self) -> &mut Self {
        self.index += 1;
        self
    }

    /// Prefix decrement: moves one element back, returns the moved cursor.
    pub const fn dec(&mut self) -> &mut Self {
        self.index -= 1;
        self
    }

    /// Postfix increment: moves one element forward, returns the old position.
    pub const fn post_inc(&mut self) -> Self {
        let old = *self;
        self.index += 1;
        old
    }

    /// Postfix decrement: moves one element back, returns the old position.
    pub const fn post_dec(&mut self) -> Self {
        let old = *self;
        self.index -= 1;
        old
    }

    /// Reads the element under the cursor.
    ///
    /// # Safety
    ///
    /// The cursor must point into `[begin, end)` of a vector that has not
    /// been reallocated or had elements moved across this position since
    /// the cursor was obtained. The returned reference must not outlive
    /// that state, nor overlap a live `&mut` to the same element.
    #[must_use]
    pub const unsafe fn get<'a>(&self) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { &*self.as_ptr() }
    }

    /// Random access: reads the element `k` positions ahead, `*(self + k)`.
    ///
    /// # Safety
    ///
    /// Same contract as [`get`](Self::get) for the position `self + k`.
    #[must_use]
    pub const unsafe fn at<'a>(&self, k: isize) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { &*self.base.wrapping_offset(self.index + k) }
    }

    /// Reverse cursor over the element just before this position.
    ///
    /// `end().reversed() == rbegin()` and `begin().reversed() == rend()`.
    #[must_use]
    pub const fn reversed(self) -> RevCursor<T> {
        RevCursor::new(self.base, self.index - 1)
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> std::fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cursor({})", self.index)
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.index == other.index
    }
}

impl<T> Eq for Cursor<T> {}

/// Cursors into different buffers are unordered.
impl<T> PartialOrd for Cursor<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.base == other.base).then(|| self.index.cmp(&other.index))
    }
}

impl<T> Add<isize> for Cursor<T> {
    type Output = Self;

    fn add(self, rhs: isize) -> Self {
        Self::new(self.base, self.index + rhs)
    }
}

impl<T> Sub<isize> for Cursor<T> {
    type Output = Self;

    fn sub(self, rhs: isize) -> Self {
        Self::new(self.base, self.index - rhs)
    }
}

impl<T> AddAssign<isize> for Cursor<T> {
    fn add_assign(&mut self, rhs: isize) {
        self.index += rhs;
    }
}

impl<T> SubAssign<isize> for Cursor<T> {
    fn sub_assign(&mut self, rhs: isize) {
        self.index -= rhs;
    }
}

/// Signed number of elements from `rhs` to `self`.
impl<T> Sub for Cursor<T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        debug_assert!(self.base == rhs.base, "distance between cursors of different buffers");
        self.index - rhs.index
    }
}

/// Writable random-access position in a [`Vector`](crate::Vector)'s buffer.
///
/// Wraps a [`Cursor`] and adds write access; every position query is
/// answered by the wrapped cursor. Same invalidation rules.
pub struct CursorMut<T> {
    inner: Cursor<T>,
}

impl<T> CursorMut<T> {
    pub(crate) const fn new(base: *mut T, index: isize) -> Self {
        Self {
            inner: Cursor::new(base, index),
        }
    }

    /// Returns a cursor that refers to no buffer.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            inner: Cursor::null(),
        }
    }

    /// Read-only view of the same position.
    #[must_use]
    pub const fn as_const(&self) -> Cursor<T> {
        self.inner
    }

    /// Returns `true` if this cursor was default-constructed.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.inner.is_null()
    }

    /// Element index relative to the start of the buffer.
    #[must_use]
    pub const fn index(&self) -> isize {
        self.inner.index()
    }

    pub(crate) const fn buffer(&self) -> *mut T {
        self.inner.buffer()
    }

    /// Address this cursor designates.
    #[must_use]
    pub const fn as_mut_ptr(&self) -> *mut T {
        self.inner.buffer().wrapping_offset(self.inner.index())
    }

    /// Prefix increment.
    pub const fn inc(&mut self) -> &mut Self {
        self.inner.inc();
        self
    }

    /// Prefix decrement.
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
    /// See [`Cursor::get`]. Additionally no other reference to the element
    /// may be alive while the returned one is used.
    #[must_use]
    pub const unsafe fn get_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: guaranteed by the caller.
        unsafe { &mut *self.as_mut_ptr() }
    }

    /// Reads the element `k` positions ahead.
    ///
    /// # Safety
    ///
    /// See [`Cursor::at`].
    #[must_use]
    pub const unsafe fn at<'a>(&self, k: isize) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.inner.at(k) }
    }

    /// Writable access to the element `k` positions ahead, `*(self + k)`.
    ///
    /// # Safety
    ///
    /// See [`get_mut`](Self::get_mut) for the position `self + k`.
    #[must_use]
    pub const unsafe fn at_mut<'a>(&mut self, k: isize) -> &'a mut T {
        // SAFETY: guaranteed by the caller.
        unsafe { &mut *self.as_mut_ptr().wrapping_offset(k) }
    }
}

impl<T> Clone for CursorMut<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CursorMut<T> {}

impl<T> Default for CursorMut<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> std::fmt::Debug for CursorMut<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CursorMut({})", self.index())
    }
}

impl<T> From<CursorMut<T>> for Cursor<T> {
    fn from(cursor: CursorMut<T>) -> Self {
        cursor.inner
    }
}

impl<T> PartialEq for CursorMut<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Eq for CursorMut<T> {}

impl<T> PartialEq<Cursor<T>> for CursorMut<T> {
    fn eq(&self, other: &Cursor<T>) -> bool {
        self.inner == *other
    }
}

impl<T> PartialEq<CursorMut<T>> for Cursor<T> {
    fn eq(&self, other: &CursorMut<T>) -> bool {
        *self == other.inner
    }
}

impl<T> PartialOrd for CursorMut<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<T> PartialOrd<Cursor<T>> for CursorMut<T> {
    fn partial_cmp(&self, other: &Cursor<T>) -> Option<Ordering> {
        self.inner.partial_cmp(other)
    }
}

impl<T> PartialOrd<CursorMut<T>> for Cursor<T> {
    fn partial_cmp(&self, other: &CursorMut<T>) -> Option<Ordering> {
        self.partial_cmp(&other.inner)
    }
}

impl<T> Add<isize> for CursorMut<T> {
    type Output = Self;

    fn add(self, rhs: isize) -> Self {
        Self {
            inner: self.inner + rhs,
        }
    }
}

impl<T> Sub<isize> for CursorMut<T> {
    type Output = Self;

    fn sub(self, rhs: isize) -> Self {
        Self {
            inner: self.inner - rhs,
        }
    }
}

impl<T> AddAssign<isize> for CursorMut<T> {
    fn add_assign(&mut self, rhs: isize) {
        self.inner += rhs;
    }
}

impl<T> SubAssign<isize> for CursorMut<T> {
    fn sub_assign(&mut self, rhs: isize) {
        self.inner -= rhs;
    }
}

impl<T> Sub for CursorMut<T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        self.inner - rhs.inner
    }
}

/// A position that can be walked forward and read through.
///
/// Implemented by all four cursor kinds, so range operations such as
/// [`Vector::from_cursors`](crate::Vector::from_cursors) accept any of them.
pub trait Position<T>: Copy + PartialEq {
    /// Moves one element in traversal order.
    fn step(&mut self);

    /// Reads the element under the position.
    ///
    /// # Safety
    ///
    /// See [`Cursor::get`].
    unsafe fn read<'a>(&self) -> &'a T;
}

impl<T> Position<T> for Cursor<T> {
    fn step(&mut self) {
        self.inc();
    }

    unsafe fn read<'a>(&self) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.get() }
    }
}

impl<T> Position<T> for CursorMut<T> {
    fn step(&mut self) {
        self.inc();
    }

    unsafe fn read<'a>(&self) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.get() }
    }
}
