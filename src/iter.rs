use std::iter::FusedIterator;
use std::ptr;

use crate::raw::RawBuf;

/// Owning iterator over the elements of a [`Vector`](crate::Vector).
///
/// Created by [`Vector::into_iter`](crate::Vector::into_iter). Elements not
/// yielded are dropped with the iterator; the buffer is released last.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    /// Live elements are `buf[head..tail]`.
    head: usize,
    tail: usize,
}

impl<T> IntoIter<T> {
    pub(crate) const fn new(buf: RawBuf<T>, len: usize) -> Self {
        Self {
            buf,
            head: 0,
            tail: len,
        }
    }

    /// Returns the elements not yet yielded as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: buf[head..tail] are initialized and owned by the iterator.
        unsafe { std::slice::from_raw_parts(self.buf.ptr().add(self.head), self.tail - self.head) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        let slot = self.head;
        self.head += 1;
        // SAFETY: slot was live and is now outside the live range, so it is
        // read exactly once.
        Some(unsafe { self.buf.ptr().add(slot).read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail - self.head;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        // SAFETY: same as `next`.
        Some(unsafe { self.buf.ptr().add(self.tail).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            // SAFETY: head <= tail <= capacity.
            unsafe { self.buf.ptr().add(self.head) },
            self.tail - self.head,
        );
        // SAFETY: the remaining range is live and never read again. The
        // buffer itself is released by RawBuf's drop afterwards.
        unsafe { ptr::drop_in_place(remaining) }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
