use std::alloc::Layout;
use std::mem;
use std::ptr::{self, NonNull};

use crate::AllocError;

/// Largest element count a buffer may hold, for any `T`.
pub(crate) const MAX_CAP: usize = isize::MAX.unsigned_abs();

/// Owner of a vector's allocation.
///
/// Knows nothing about which slots are initialized: the owner tracks the
/// live prefix and must drop those elements before the buffer goes away.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

// SAFETY: RawBuf uniquely owns its allocation, like Box<[MaybeUninit<T>]>.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Creates an empty buffer. Does not allocate.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    /// Allocates storage for exactly `cap` elements.
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, AllocError> {
        Ok(Self {
            ptr: alloc_storage::<T>(cap)?,
            cap,
        })
    }

    /// Start of the buffer. Dangling (but aligned) when nothing is allocated.
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// Moves the first `len` elements into a fresh allocation of `new_cap`
    /// slots and releases the old one.
    ///
    /// On error nothing changes. Every pointer into the old buffer is
    /// invalidated on success.
    ///
    /// # Safety
    ///
    /// The first `len` slots must be initialized and `len <= new_cap`.
    pub(crate) unsafe fn relocate(&mut self, len: usize, new_cap: usize) -> Result<(), AllocError> {
        debug_assert!(len <= self.cap && len <= new_cap);
        let new_ptr = alloc_storage::<T>(new_cap)?;

        // SAFETY: both regions are valid for `len` elements and belong to
        // different allocations. The copy is a move: the source slots are
        // released below without being dropped.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
            dealloc_storage(self.ptr, self.cap);
        }

        log::trace!(
            "relocated {len} elements of {} bytes: capacity {} -> {new_cap}",
            mem::size_of::<T>(),
            self.cap,
        );

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // SAFETY: the owner has already dropped or moved out every element.
        unsafe { dealloc_storage(self.ptr, self.cap) }
    }
}

/// Layout of `cap` slots, or `None` when nothing needs allocating.
fn storage_layout<T>(cap: usize) -> Result<Option<Layout>, AllocError> {
    if cap > MAX_CAP {
        return Err(AllocError::CapacityOverflow { requested: cap });
    }
    let layout =
        Layout::array::<T>(cap).map_err(|_| AllocError::CapacityOverflow { requested: cap })?;
    Ok((layout.size() != 0).then_some(layout))
}

/// Allocates raw, uninitialized storage for `cap` values of `T`.
fn alloc_storage<T>(cap: usize) -> Result<NonNull<T>, AllocError> {
    let Some(layout) = storage_layout::<T>(cap)? else {
        return Ok(NonNull::dangling());
    };
    // SAFETY: layout has non-zero size.
    let raw = unsafe { std::alloc::alloc(layout) };
    NonNull::new(raw.cast::<T>()).ok_or(AllocError::Exhausted { layout })
}

/// Releases storage WITHOUT dropping any values.
///
/// # Safety
///
/// `ptr` must come from `alloc_storage::<T>(cap)` and every value in it
/// must already be dropped or moved out.
unsafe fn dealloc_storage<T>(ptr: NonNull<T>, cap: usize) {
    if let Ok(Some(layout)) = storage_layout::<T>(cap) {
        // SAFETY: same layout the storage was allocated with.
        unsafe { std::alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) }
    }
}
