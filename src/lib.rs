//! Growable contiguous vector with position cursors.
//!
//! `cursor-vec` provides [`Vector<T>`], a heap buffer of live elements
//! followed by spare capacity, together with four random-access cursor
//! types that address positions inside that buffer.
//!
//! # Cursor types
//!
//! - [`Cursor<T>`] — read-only, walks front to back
//! - [`CursorMut<T>`] — writable, wraps a [`Cursor<T>`]
//! - [`RevCursor<T>`] — read-only, walks back to front
//! - [`RevCursorMut<T>`] — writable, wraps a [`RevCursor<T>`]
//!
//! Cursors are plain positions: they do not borrow the vector, so moving
//! them is safe while reading or writing through them is `unsafe`. Any
//! reallocation invalidates all of them; insertion and erasure invalidate
//! those at or after the mutated position. Nothing tracks this at runtime.
//!
//! # Key properties
//!
//! - **Amortized growth**: appends double the capacity (`0 -> 1 -> 2 -> 4`)
//! - **Exact reservation**: [`Vector::reserve`], [`Vector::resize`] and
//!   [`Vector::insert`] allocate exactly what is asked
//! - **Per-element relocation**: growth moves each element, never aliases
//! - **Fallible allocation**: growth returns [`AllocError`] instead of aborting
//!
//! # Example
//!
//! ```
//! use cursor_vec::Vector;
//!
//! let mut v = Vector::from_elem(3, 7)?;
//! assert_eq!(v.capacity(), 3);
//!
//! v.push_back(9)?;
//! assert_eq!(v.capacity(), 6);
//!
//! let pos = v.begin_mut() + 1;
//! v.insert(pos, 1)?;
//! assert_eq!(v.to_string(), "7 1 7 7 9");
//!
//! let back: Vec<i32> = {
//!     let mut out = Vec::new();
//!     let mut it = v.rbegin();
//!     while it != v.rend() {
//!         out.push(unsafe { *it.get() });
//!         it.inc();
//!     }
//!     out
//! };
//! assert_eq!(back, [9, 7, 7, 1, 7]);
//! # Ok::<(), cursor_vec::AllocError>(())
//! ```

#![deny(missing_docs)]

mod cursor;
mod error;
mod iter;
mod raw;
mod rev_cursor;
mod vector;

pub use cursor::{Cursor, CursorMut, Position};
pub use error::AllocError;
pub use iter::IntoIter;
pub use rev_cursor::{RevCursor, RevCursorMut};
pub use vector::Vector;

#[cfg(test)]
mod tests;
