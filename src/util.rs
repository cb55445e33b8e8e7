use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::Error;

/// Like `Box::new` but reports allocation failure instead of aborting. `value` is dropped when the
/// allocation fails.
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>, Error> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(value));
    }

    // SAFETY: `layout` has a non-zero size.
    let ptr = unsafe { alloc::alloc(layout) }.cast::<T>();
    let Some(ptr) = NonNull::new(ptr) else {
        log::warn!("allocation of {} bytes failed", layout.size());
        return Err(Error::allocation_failure(layout));
    };

    // SAFETY: `ptr` was just allocated by the global allocator with the layout of `T`, which is
    // exactly what `Box` expects to own and later deallocate. Writing initializes it.
    unsafe {
        ptr.as_ptr().write(value);
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}
