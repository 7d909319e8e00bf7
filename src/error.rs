use std::alloc::Layout;

/// Failure to obtain storage for a [`Vector`](crate::Vector).
///
/// Returned by every operation that may grow the buffer. The container is
/// left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// The requested element count does not fit in a valid allocation.
    #[error("capacity overflow: {requested} elements exceed the maximum allocation size")]
    CapacityOverflow {
        /// Number of element slots that were requested, saturated at
        /// `usize::MAX` when the count itself overflows.
        requested: usize,
    },
    /// The global allocator could not satisfy the request.
    #[error("allocator could not provide {} bytes (align {})", .layout.size(), .layout.align())]
    Exhausted {
        /// Layout that was passed to the allocator.
        layout: Layout,
    },
}

impl AllocError {
    /// Escalates the error the way std collections do: capacity overflow
    /// panics, allocator exhaustion goes through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error).
    pub(crate) fn escalate(self) -> ! {
        match self {
            Self::CapacityOverflow { .. } => panic!("{self}"),
            Self::Exhausted { layout } => std::alloc::handle_alloc_error(layout),
        }
    }
}

/// Unwraps an allocation result inside infallible trait impls.
pub(crate) fn infallible<T>(result: Result<T, AllocError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => err.escalate(),
    }
}
