//! Raw buffer allocation.
//!
//! [`RawBuf`] owns the heap allocation and nothing else: it hands out the
//! base pointer and tracks the slot capacity, while element liveness is
//! the container's job. This is one of the crate's two designated `unsafe`
//! modules; every `unsafe` block carries a `// SAFETY:` comment.
//!
//! Allocation failure is a value, never a panic. `grow_to` and `shrink_to`
//! return [`VesselError::AllocationFailed`] and leave the previous buffer
//! intact, which lets callers guarantee unchanged observable state.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::VesselError;

/// An owned, possibly-empty heap allocation of `cap` slots of `T`.
///
/// The pointer dangles while `cap == 0`; no allocation exists in that
/// state. For zero-sized element types no allocation is ever made and the
/// capacity is tracked purely logically, which keeps the observable
/// capacity sequence identical for every element type.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf holds its allocation exclusively, so moving it to another
// thread is exactly as safe as moving the `T`s it stores.
unsafe impl<T: Send> Send for RawBuf<T> {}

// SAFETY: a shared RawBuf exposes only the base pointer and capacity;
// shared access to the elements goes through `&T`.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// An empty buffer: dangling pointer, zero capacity, no allocation.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocated slot count.
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Base pointer. Dangling (but aligned) while `capacity == 0`,
    /// otherwise valid for `capacity` slots.
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Grow the allocation to exactly `new_cap` slots, preserving the
    /// first `capacity` slots bytewise.
    ///
    /// On failure the existing buffer is untouched.
    pub(crate) fn grow_to(&mut self, new_cap: usize) -> Result<(), VesselError> {
        debug_assert!(new_cap > self.cap);
        if mem::size_of::<T>() == 0 {
            // Zero-sized elements need no storage; record the capacity.
            self.cap = new_cap;
            return Ok(());
        }
        let new_layout = layout_for::<T>(new_cap)?;
        let raw = if self.cap == 0 {
            // SAFETY: new_layout has non-zero size because new_cap > 0 and
            // T is not zero-sized on this path.
            unsafe { alloc::alloc(new_layout) }
        } else {
            let old_layout = layout_for::<T>(self.cap)?;
            // SAFETY: self.ptr was allocated by this module with
            // old_layout, and new_layout.size() is non-zero.
            unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
        };
        self.adopt(raw, new_cap)
    }

    /// Shrink the allocation to exactly `new_cap` slots, preserving the
    /// first `new_cap` slots bytewise. `new_cap` must stay above zero;
    /// releasing entirely is [`release`](Self::release).
    ///
    /// On failure the old, larger buffer is retained and remains valid.
    pub(crate) fn shrink_to(&mut self, new_cap: usize) -> Result<(), VesselError> {
        debug_assert!(new_cap > 0 && new_cap < self.cap);
        if mem::size_of::<T>() == 0 {
            self.cap = new_cap;
            return Ok(());
        }
        let old_layout = layout_for::<T>(self.cap)?;
        let new_layout = layout_for::<T>(new_cap)?;
        // SAFETY: self.ptr was allocated by this module with old_layout,
        // and new_layout.size() is non-zero because new_cap > 0 and T is
        // not zero-sized on this path.
        let raw =
            unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) };
        self.adopt(raw, new_cap)
    }

    /// Release the allocation and return to the empty state. Idempotent.
    pub(crate) fn release(&mut self) {
        if self.cap != 0 && mem::size_of::<T>() != 0 {
            if let Ok(layout) = Layout::array::<T>(self.cap) {
                // SAFETY: self.ptr was allocated by this module with
                // exactly this layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
            }
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Take ownership of a (re)allocation result. A null result reports
    /// failure and leaves the previous buffer in place.
    fn adopt(&mut self, raw: *mut u8, new_cap: usize) -> Result<(), VesselError> {
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => {
                self.ptr = ptr;
                self.cap = new_cap;
                Ok(())
            }
            None => Err(VesselError::AllocationFailed { capacity: new_cap }),
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Array layout for `cap` slots, with unrepresentable sizes mapped to
/// [`VesselError::AllocationFailed`].
fn layout_for<T>(cap: usize) -> Result<Layout, VesselError> {
    Layout::array::<T>(cap).map_err(|_| VesselError::AllocationFailed { capacity: cap })
}
