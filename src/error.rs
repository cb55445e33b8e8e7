use std::alloc::Layout;

use thiserror::Error;

/// Errors surfaced by fallible tree operations.
///
/// Inserting a key that is already present is not an error; [`BSTree::try_insert`] reports it as
/// `Ok(false)`.
///
/// [`BSTree::try_insert`]: crate::BSTree::try_insert
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The allocator could not provide memory for a new node. The tree is left exactly as it was
    /// before the call.
    #[error("failed to allocate {size} bytes (align {align}) for a tree node")]
    AllocationFailure {
        /// Size in bytes of the requested allocation.
        size: usize,
        /// Alignment of the requested allocation.
        align: usize,
    },
}

impl Error {
    pub(crate) fn allocation_failure(layout: Layout) -> Self {
        Self::AllocationFailure {
            size: layout.size(),
            align: layout.align(),
        }
    }

    /// The layout whose allocation failed, suitable for [`std::alloc::handle_alloc_error`].
    pub fn layout(&self) -> Layout {
        match *self {
            // A layout that was built once is valid to rebuild.
            Self::AllocationFailure { size, align } => {
                Layout::from_size_align(size, align).unwrap_or_else(|_| Layout::new::<u8>())
            }
        }
    }
}
