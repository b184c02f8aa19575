//! Exact-size heap buffers.
//!
//! [`RawBuf`] is the only type in the crate that talks to the global
//! allocator. It owns `capacity` slots of a `Copy` element type and nothing
//! else: it never tracks which slots are initialized and never drops
//! elements. Growth is allocate, copy, release, in that order, so a reader
//! never observes a released buffer.
//!
//! Zero-sized requests (zero slots, or a zero-sized `T`) use a dangling,
//! well-aligned pointer and never reach the allocator.

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::{marker::PhantomData, mem, ptr, ptr::NonNull};

/// The allocation itself, untyped.
///
/// Releasing memory lives here rather than on [`RawBuf`] so that dropping a
/// buffer of `T` never counts as a use of `T`: a buffer of borrowed handles
/// may be dropped after the referents are gone.
struct Allocation {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl Drop for Allocation {
    fn drop(&mut self) {
        if self.layout.size() == 0 {
            return;
        }
        // SAFETY: a non-empty `layout` means `ptr` was returned by `alloc`
        // with exactly this layout, and it is released only here.
        unsafe { dealloc(self.ptr.as_ptr(), self.layout) }
    }
}

pub(crate) struct RawBuf<T: Copy> {
    mem: Allocation,
    cap: usize,
    _slots: PhantomData<T>,
}

// SAFETY: `RawBuf` uniquely owns its allocation; sending or sharing it is
// as safe as sending or sharing the `T`s it holds.
unsafe impl<T: Copy + Send> Send for RawBuf<T> {}
// SAFETY: see above.
unsafe impl<T: Copy + Sync> Sync for RawBuf<T> {}

fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

fn layout_for<T>(cap: usize) -> Layout {
    match Layout::array::<T>(cap) {
        Ok(layout) if layout.size() <= isize::MAX as usize => layout,
        _ => capacity_overflow(),
    }
}

impl<T: Copy> RawBuf<T> {
    /// Allocates exactly `cap` uninitialized slots.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        let layout = if mem::size_of::<T>() == 0 {
            Layout::new::<T>()
        } else {
            layout_for::<T>(cap)
        };
        let ptr = if layout.size() == 0 {
            NonNull::<T>::dangling().cast::<u8>()
        } else {
            // SAFETY: `layout` has a non-zero size.
            let raw = unsafe { alloc(layout) };
            let Some(ptr) = NonNull::new(raw) else {
                handle_alloc_error(layout);
            };
            ptr
        };

        Self {
            mem: Allocation { ptr, layout },
            cap,
            _slots: PhantomData,
        }
    }

    #[inline]
    fn ptr(&self) -> *mut T {
        self.mem.ptr.as_ptr().cast::<T>()
    }

    /// Allocates `cap` slots and copies `src` into the front of them.
    pub(crate) fn copy_from(src: &[T], cap: usize) -> Self {
        debug_assert!(src.len() <= cap);
        let mut buf = Self::with_capacity(cap);
        buf.write_slice(0, src);
        buf
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Views the first `len` slots.
    ///
    /// # Safety
    ///
    /// `len <= capacity` and the first `len` slots must have been written.
    #[inline]
    pub(crate) unsafe fn slice(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.cap);
        // SAFETY: guaranteed by the caller.
        unsafe { core::slice::from_raw_parts(self.ptr(), len) }
    }

    /// Mutable view of the first `len` slots.
    ///
    /// # Safety
    ///
    /// Same as [`RawBuf::slice`].
    #[inline]
    pub(crate) unsafe fn slice_mut(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.cap);
        // SAFETY: guaranteed by the caller.
        unsafe { core::slice::from_raw_parts_mut(self.ptr(), len) }
    }

    /// Writes `value` into slot `index`.
    ///
    /// Panics if `index` is not below the capacity.
    #[inline]
    pub(crate) fn write(&mut self, index: usize, value: T) {
        assert!(index < self.cap, "slot {index} out of capacity {}", self.cap);
        // SAFETY: `index` is in bounds of the allocation.
        unsafe { self.ptr().add(index).write(value) }
    }

    /// Copies `src` into the slots starting at `at`.
    ///
    /// Panics if the slots do not fit in the capacity.
    pub(crate) fn write_slice(&mut self, at: usize, src: &[T]) {
        assert!(
            at <= self.cap && src.len() <= self.cap - at,
            "slots {at}..{} out of capacity {}",
            at.saturating_add(src.len()),
            self.cap
        );
        // SAFETY: the range is in bounds, and `src` cannot alias this
        // buffer because `self` is borrowed mutably.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), self.ptr().add(at), src.len());
        }
    }

    /// Moves the first `live` slots into a fresh allocation of `new_cap`
    /// slots and releases the old one.
    ///
    /// # Safety
    ///
    /// `live <= self.capacity()`, `live <= new_cap`, and the first `live`
    /// slots must have been written.
    pub(crate) unsafe fn reallocate(&mut self, new_cap: usize, live: usize) {
        debug_assert!(live <= self.cap && live <= new_cap);
        // SAFETY: guaranteed by the caller.
        let next = Self::copy_from(unsafe { self.slice(live) }, new_cap);
        // Dropping the previous value releases the old allocation.
        *self = next;
    }
}
