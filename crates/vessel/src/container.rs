//! The growable contiguous-buffer container.
//!
//! This is the crate's second designated `unsafe` module: every element
//! move in and out of the raw buffer happens here, each with a
//! `// SAFETY:` comment. The central invariant is that `buf[0..len)`
//! always holds initialized elements and `len <= capacity`; outside the
//! `Active` state `len` is zero and no buffer exists.

#![allow(unsafe_code)]

use std::fmt;
use std::mem;
use std::ptr;

use crate::diag;
use crate::error::VesselError;
use crate::growth;
use crate::raw::RawBuf;
use crate::state::Lifecycle;

/// A growable contiguous-buffer container with an explicit init/destroy
/// lifecycle.
///
/// A `Vessel` is created inert with [`new`](Self::new), switched on with
/// [`init`](Self::init), and released with [`destroy`](Self::destroy).
/// Element operations are rejected outside the `Active` state and report
/// an advisory diagnostic on stderr; see the crate docs for the failure
/// model and capacity policy.
pub struct Vessel<T> {
    buf: RawBuf<T>,
    len: usize,
    state: Lifecycle,
}

impl<T> Vessel<T> {
    /// Create an uninitialized container. No allocation happens until
    /// elements are added after [`init`](Self::init).
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
            state: Lifecycle::Uninitialized,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Whether the container is `Active`, i.e. element operations will be
    /// accepted.
    pub fn is_active(&self) -> bool {
        self.state == Lifecycle::Active
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots the current buffer can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Total size of the live elements in bytes
    /// (`len * size_of::<T>()`).
    pub fn byte_len(&self) -> usize {
        self.len * mem::size_of::<T>()
    }

    /// Switch the container on, starting an empty `Active` lifecycle.
    ///
    /// Calling `init` on a container that is already `Active` is ignored
    /// apart from a stderr warning; the contents are preserved. Calling it
    /// on a `Destroyed` container begins a fresh lifecycle.
    #[track_caller]
    pub fn init(&mut self) {
        if self.state == Lifecycle::Active {
            diag::warning("init", "container already initialized");
            return;
        }
        // Uninitialized and Destroyed containers hold no buffer, so the
        // replaced RawBuf has nothing to free.
        self.buf = RawBuf::new();
        self.len = 0;
        self.state = Lifecycle::Active;
    }

    /// Drop all live elements, release the buffer and mark the container
    /// `Destroyed`.
    ///
    /// Destroying a container that is not `Active` is rejected:
    /// [`VesselError::AlreadyDestroyed`] for a second destroy,
    /// [`VesselError::NotActive`] for a container that was never
    /// initialized.
    #[track_caller]
    pub fn destroy(&mut self) -> Result<(), VesselError> {
        match self.state {
            Lifecycle::Active => {
                self.release_elements();
                self.buf.release();
                self.state = Lifecycle::Destroyed;
                Ok(())
            }
            Lifecycle::Destroyed => {
                let err = VesselError::AlreadyDestroyed;
                diag::error("destroy", &err);
                Err(err)
            }
            Lifecycle::Uninitialized => {
                let err = VesselError::NotActive { state: self.state };
                diag::error("destroy", &err);
                Err(err)
            }
        }
    }

    /// Append `value`, growing the buffer by the doubling policy when
    /// full.
    ///
    /// ```
    /// use vessel::Vessel;
    ///
    /// let mut v = Vessel::new();
    /// v.init();
    /// v.push_back(7)?;
    /// assert_eq!((v.len(), v.capacity()), (1, 4));
    /// # Ok::<(), vessel::VesselError>(())
    /// ```
    #[track_caller]
    pub fn push_back(&mut self, value: T) -> Result<(), VesselError> {
        self.require_active("push_back")?;
        self.ensure_spare_slot("push_back")?;
        // SAFETY: the growth check left capacity > len, so the slot at
        // `len` is allocated and uninitialized.
        unsafe { ptr::write(self.buf.as_ptr().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Append an element produced by `make`, constructing it directly in
    /// the new slot, and return a mutable reference to it.
    ///
    /// Growth (and its possible failure) happens before `make` runs, so a
    /// failed call never invokes the constructor.
    #[track_caller]
    pub fn push_with<F>(&mut self, make: F) -> Result<&mut T, VesselError>
    where
        F: FnOnce() -> T,
    {
        self.require_active("push_with")?;
        self.ensure_spare_slot("push_with")?;
        // SAFETY: the slot at `len` is allocated and uninitialized; the
        // value is written before `len` counts it, so a panicking `make`
        // leaves the container unchanged.
        unsafe {
            let slot = self.buf.as_ptr().add(self.len);
            ptr::write(slot, make());
            self.len += 1;
            Ok(&mut *slot)
        }
    }

    /// Remove the last element and return it.
    ///
    /// Popping an empty container reports [`VesselError::Empty`] and
    /// leaves it unchanged.
    #[track_caller]
    pub fn pop_back(&mut self) -> Result<T, VesselError> {
        self.require_active("pop_back")?;
        if self.len == 0 {
            let err = VesselError::Empty;
            diag::error("pop_back", &err);
            return Err(err);
        }
        self.len -= 1;
        // SAFETY: the slot at the decremented `len` holds an initialized
        // element that the container no longer counts, so ownership moves
        // out exactly once.
        Ok(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Drop all live elements while keeping the buffer for reuse.
    #[track_caller]
    pub fn clear(&mut self) -> Result<(), VesselError> {
        self.require_active("clear")?;
        self.release_elements();
        Ok(())
    }

    /// Insert `value` at `position`, shifting the elements at and after it
    /// one slot toward the back. `position == len` appends.
    #[track_caller]
    pub fn insert(&mut self, position: usize, value: T) -> Result<(), VesselError> {
        self.require_active("insert")?;
        self.check_position("insert", position)?;
        self.ensure_spare_slot("insert")?;
        // SAFETY: capacity > len and position <= len. The copy shifts the
        // suffix [position, len) one slot right within the allocation
        // (the regions may overlap), then the vacated slot receives the
        // value.
        unsafe {
            let base = self.buf.as_ptr();
            ptr::copy(
                base.add(position),
                base.add(position + 1),
                self.len - position,
            );
            ptr::write(base.add(position), value);
        }
        self.len += 1;
        Ok(())
    }

    /// Guarantee room for at least `capacity` elements in total.
    ///
    /// A request above the current capacity is granted exactly, clamped up
    /// to the minimum of four slots; a request at or below it is a silent
    /// no-op. Elements are never touched.
    #[track_caller]
    pub fn reserve(&mut self, capacity: usize) -> Result<(), VesselError> {
        self.require_active("reserve")?;
        if capacity <= self.buf.capacity() {
            return Ok(());
        }
        let target = capacity.max(growth::MIN_CAPACITY);
        self.grow_buffer("reserve", target)
    }

    /// Reduce the capacity to exactly the live element count, releasing
    /// the buffer entirely when the container is empty.
    ///
    /// On allocation failure the old, larger buffer is kept and the
    /// container is unchanged.
    #[track_caller]
    pub fn shrink_to_fit(&mut self) -> Result<(), VesselError> {
        self.require_active("shrink_to_fit")?;
        if self.len == self.buf.capacity() {
            return Ok(());
        }
        if self.len == 0 {
            self.buf.release();
            return Ok(());
        }
        match self.buf.shrink_to(self.len) {
            Ok(()) => Ok(()),
            Err(err) => {
                diag::error("shrink_to_fit", &err);
                Err(err)
            }
        }
    }

    /// Checked access to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics (after a stderr diagnostic) when the container is not
    /// `Active` or `index` is out of bounds. A successful return is
    /// therefore always valid data; use [`get`](Self::get) for the
    /// recoverable form.
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        self.checked_index("at", index);
        &self.live()[index]
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// # Panics
    ///
    /// As for [`at`](Self::at).
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.checked_index("at_mut", index);
        &mut self.live_mut()[index]
    }

    /// The element at `index`, or `None` when out of bounds or the
    /// container is not `Active`. Never reports a diagnostic.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.live().get(index)
    }

    /// Mutable form of [`get`](Self::get).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.live_mut().get_mut(index)
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics when the container holds no elements.
    #[track_caller]
    pub fn front(&self) -> &T {
        self.live().first().expect("front() on an empty container")
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics when the container holds no elements.
    #[track_caller]
    pub fn back(&self) -> &T {
        self.live().last().expect("back() on an empty container")
    }

    /// Exchange the entire contents (buffer, length and capacity) of two
    /// containers in constant time. Both must be `Active`; on rejection
    /// neither container is changed.
    #[track_caller]
    pub fn swap(&mut self, other: &mut Self) -> Result<(), VesselError> {
        self.require_active("swap")?;
        if other.state != Lifecycle::Active {
            let err = VesselError::NotActive { state: other.state };
            diag::error("swap", &err);
            return Err(err);
        }
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
        Ok(())
    }

    /// The initialized prefix of the buffer. Empty outside `Active`.
    pub(crate) fn live(&self) -> &[T] {
        // SAFETY: buf[0..len) holds initialized elements and len is zero
        // whenever no buffer exists; a dangling base pointer is valid for
        // an empty slice.
        unsafe { std::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Mutable form of [`live`](Self::live).
    pub(crate) fn live_mut(&mut self) -> &mut [T] {
        // SAFETY: as in `live`, with exclusive access through `&mut self`.
        unsafe { std::slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Drop all live elements, leaving `len == 0`. The buffer is kept.
    fn release_elements(&mut self) {
        let live: *mut [T] = self.live_mut();
        // Zero the count first so a panicking element drop cannot lead to
        // a second drop of the same slots.
        self.len = 0;
        // SAFETY: `live` covers exactly the previously initialized prefix,
        // which the container no longer counts.
        unsafe { ptr::drop_in_place(live) };
    }

    #[track_caller]
    fn require_active(&self, op: &str) -> Result<(), VesselError> {
        if self.state == Lifecycle::Active {
            return Ok(());
        }
        let err = VesselError::NotActive { state: self.state };
        diag::error(op, &err);
        Err(err)
    }

    #[track_caller]
    fn check_position(&self, op: &str, position: usize) -> Result<(), VesselError> {
        if position <= self.len {
            return Ok(());
        }
        let err = VesselError::OutOfBounds {
            position,
            len: self.len,
        };
        diag::error(op, &err);
        Err(err)
    }

    /// Validate lifecycle and bounds for checked access, panicking on
    /// violation.
    #[track_caller]
    fn checked_index(&self, op: &str, index: usize) {
        if self.state != Lifecycle::Active {
            let err = VesselError::NotActive { state: self.state };
            diag::error(op, &err);
            panic!("checked access on {} container", self.state);
        }
        if index >= self.len {
            let err = VesselError::OutOfBounds {
                position: index,
                len: self.len,
            };
            diag::error(op, &err);
            let len = self.len;
            panic!("checked access out of bounds: index {index}, len {len}");
        }
    }

    /// Make sure one more element fits, growing by the doubling policy.
    #[track_caller]
    fn ensure_spare_slot(&mut self, op: &str) -> Result<(), VesselError> {
        if self.len < self.buf.capacity() {
            return Ok(());
        }
        match growth::next_capacity(self.buf.capacity()) {
            Some(target) => self.grow_buffer(op, target),
            None => Err(capacity_overflow(op)),
        }
    }

    /// Make sure `extra` more elements fit using `target` to pick the new
    /// capacity from (current capacity, total requirement), so a whole
    /// batch costs at most one reallocation.
    #[track_caller]
    fn ensure_bulk_room(
        &mut self,
        op: &str,
        extra: usize,
        target: fn(usize, usize) -> Option<usize>,
    ) -> Result<(), VesselError> {
        let required = match self.len.checked_add(extra) {
            Some(required) => required,
            None => return Err(capacity_overflow(op)),
        };
        if required <= self.buf.capacity() {
            return Ok(());
        }
        match target(self.buf.capacity(), required) {
            Some(new_cap) => self.grow_buffer(op, new_cap),
            None => Err(capacity_overflow(op)),
        }
    }

    #[track_caller]
    fn grow_buffer(&mut self, op: &str, target: usize) -> Result<(), VesselError> {
        match self.buf.grow_to(target) {
            Ok(()) => Ok(()),
            Err(err) => {
                diag::error(op, &err);
                Err(err)
            }
        }
    }
}

impl<T: Copy> Vessel<T> {
    /// Append every element of `values` with at most one reallocation.
    ///
    /// From zero capacity the buffer is sized to exactly the requirement
    /// (or the minimum of four slots); otherwise the capacity doubles
    /// until the batch fits. An empty `values` is a silent no-op.
    ///
    /// ```
    /// use vessel::Vessel;
    ///
    /// let mut v = Vessel::new();
    /// v.init();
    /// v.extend_from_slice(&[1, 2, 3])?;
    /// assert_eq!(v.as_slice(), [1, 2, 3]);
    /// # Ok::<(), vessel::VesselError>(())
    /// ```
    #[track_caller]
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), VesselError> {
        self.require_active("extend_from_slice")?;
        self.ensure_bulk_room("extend_from_slice", values.len(), growth::append_target)?;
        // SAFETY: capacity now covers len + values.len(). The source is a
        // shared borrow and the buffer is held exclusively, so the two
        // regions cannot overlap.
        unsafe {
            ptr::copy_nonoverlapping(
                values.as_ptr(),
                self.buf.as_ptr().add(self.len),
                values.len(),
            );
        }
        self.len += values.len();
        Ok(())
    }

    /// Insert every element of `values` at `position` with at most one
    /// reallocation, shifting the suffix toward the back by the batch
    /// size. `position == len` appends.
    ///
    /// The position is validated before the empty-batch early out, so an
    /// out-of-range position is rejected even when there is nothing to
    /// insert.
    #[track_caller]
    pub fn insert_from_slice(&mut self, position: usize, values: &[T]) -> Result<(), VesselError> {
        self.require_active("insert_from_slice")?;
        self.check_position("insert_from_slice", position)?;
        if values.is_empty() {
            return Ok(());
        }
        self.ensure_bulk_room("insert_from_slice", values.len(), growth::insert_target)?;
        // SAFETY: capacity covers len + values.len(). The first copy
        // shifts the suffix [position, len) right by the batch size within
        // the allocation (overlap allowed); the second fills the gap from
        // the disjoint source slice.
        unsafe {
            let base = self.buf.as_ptr();
            ptr::copy(
                base.add(position),
                base.add(position + values.len()),
                self.len - position,
            );
            ptr::copy_nonoverlapping(values.as_ptr(), base.add(position), values.len());
        }
        self.len += values.len();
        Ok(())
    }
}

impl<T: Clone> Vessel<T> {
    /// Grow or shrink the live region to exactly `new_len` elements.
    ///
    /// New slots are filled with clones of `value`; surplus elements are
    /// dropped in place. Growth reserves exactly the requirement (clamped
    /// up to the four-slot minimum), and a failed reservation leaves the
    /// container unchanged.
    #[track_caller]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), VesselError> {
        self.require_active("resize")?;
        if new_len > self.buf.capacity() {
            let target = new_len.max(growth::MIN_CAPACITY);
            self.grow_buffer("resize", target)?;
        }
        if new_len > self.len {
            // Count each clone as soon as it is written so a panicking
            // Clone cannot orphan live elements.
            while self.len < new_len {
                // SAFETY: len < new_len <= capacity, so the slot at `len`
                // is allocated and uninitialized.
                unsafe { ptr::write(self.buf.as_ptr().add(self.len), value.clone()) };
                self.len += 1;
            }
        } else if new_len < self.len {
            let tail: *mut [T] = &mut self.live_mut()[new_len..];
            self.len = new_len;
            // SAFETY: the tail covers initialized elements the container
            // no longer counts; the count was updated first so a panicking
            // drop cannot cause a double drop.
            unsafe { ptr::drop_in_place(tail) };
        }
        Ok(())
    }
}

/// Shared out-of-address-space arm for the growth paths.
#[track_caller]
fn capacity_overflow(op: &str) -> VesselError {
    let err = VesselError::AllocationFailed {
        capacity: usize::MAX,
    };
    diag::error(op, &err);
    err
}

impl<T> Default for Vessel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vessel<T> {
    /// Scope-exit backstop layered over the explicit lifecycle: an
    /// `Active` container that was never destroyed still drops its
    /// elements, and `RawBuf` frees the buffer itself.
    fn drop(&mut self) {
        if self.state == Lifecycle::Active {
            self.release_elements();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vessel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vessel")
            .field("state", &self.state)
            .field("len", &self.len)
            .field("capacity", &self.buf.capacity())
            .field("elements", &self.live())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Element type that counts its drops.
    struct Tracked<'a>(&'a AtomicUsize);

    impl Clone for Tracked<'_> {
        fn clone(&self) -> Self {
            Tracked(self.0)
        }
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn active<T>() -> Vessel<T> {
        let mut v = Vessel::new();
        v.init();
        v
    }

    fn filled(values: &[i32]) -> Vessel<i32> {
        let mut v = active();
        v.extend_from_slice(values).unwrap();
        v
    }

    // ── lifecycle ────────────────────────────────────────────────────

    #[test]
    fn new_container_is_uninitialized_and_unallocated() {
        let v: Vessel<i32> = Vessel::new();
        assert_eq!(v.state(), Lifecycle::Uninitialized);
        assert!(!v.is_active());
        assert_eq!((v.len(), v.capacity()), (0, 0));
    }

    #[test]
    fn default_is_equivalent_to_new() {
        let v: Vessel<i32> = Vessel::default();
        assert_eq!(v.state(), Lifecycle::Uninitialized);
        assert_eq!((v.len(), v.capacity()), (0, 0));
    }

    #[test]
    fn init_activates_an_empty_container() {
        let v: Vessel<i32> = active();
        assert_eq!(v.state(), Lifecycle::Active);
        assert!(v.is_active());
        assert!(v.is_empty());
    }

    #[test]
    fn reinit_of_active_container_preserves_contents() {
        let mut v = filled(&[1, 2, 3]);
        v.init();
        assert_eq!(v.as_slice(), [1, 2, 3]);
        assert_eq!(v.state(), Lifecycle::Active);
    }

    #[test]
    fn destroy_releases_everything() {
        let mut v = filled(&[1, 2, 3]);
        v.destroy().unwrap();
        assert_eq!(v.state(), Lifecycle::Destroyed);
        assert_eq!((v.len(), v.capacity()), (0, 0));
    }

    #[test]
    fn second_destroy_is_rejected() {
        let mut v: Vessel<i32> = active();
        v.destroy().unwrap();
        assert_eq!(v.destroy(), Err(VesselError::AlreadyDestroyed));
        assert_eq!(v.state(), Lifecycle::Destroyed);
    }

    #[test]
    fn destroy_before_init_is_rejected() {
        let mut v: Vessel<i32> = Vessel::new();
        assert_eq!(
            v.destroy(),
            Err(VesselError::NotActive {
                state: Lifecycle::Uninitialized
            })
        );
        assert_eq!(v.state(), Lifecycle::Uninitialized);
    }

    #[test]
    fn reinit_after_destroy_starts_a_fresh_lifecycle() {
        let mut v = filled(&[1, 2, 3]);
        v.destroy().unwrap();
        v.init();
        assert!(v.is_active());
        assert!(v.is_empty());
        v.push_back(9).unwrap();
        assert_eq!(v.as_slice(), [9]);
    }

    #[test]
    fn element_operations_before_init_are_rejected_without_effect() {
        let mut v: Vessel<i32> = Vessel::new();
        let inactive = VesselError::NotActive {
            state: Lifecycle::Uninitialized,
        };
        assert_eq!(v.push_back(1), Err(inactive.clone()));
        assert_eq!(v.pop_back(), Err(inactive.clone()));
        assert_eq!(v.insert(0, 1), Err(inactive.clone()));
        assert_eq!(v.extend_from_slice(&[1, 2]), Err(inactive.clone()));
        assert_eq!(v.insert_from_slice(0, &[1]), Err(inactive.clone()));
        assert_eq!(v.reserve(16), Err(inactive.clone()));
        assert_eq!(v.shrink_to_fit(), Err(inactive.clone()));
        assert_eq!(v.resize(3, 0), Err(inactive.clone()));
        assert_eq!(v.clear(), Err(inactive));
        assert_eq!((v.len(), v.capacity()), (0, 0));
        assert_eq!(v.state(), Lifecycle::Uninitialized);
    }

    #[test]
    fn element_operations_after_destroy_are_rejected() {
        let mut v = filled(&[1]);
        v.destroy().unwrap();
        assert_eq!(
            v.push_back(2),
            Err(VesselError::NotActive {
                state: Lifecycle::Destroyed
            })
        );
    }

    // ── append and remove ────────────────────────────────────────────

    #[test]
    fn push_follows_the_doubling_capacity_sequence() {
        let mut v = active();
        let mut seen = Vec::new();
        for i in 0..9 {
            v.push_back(i).unwrap();
            seen.push(v.capacity());
        }
        assert_eq!(seen, [4, 4, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(v.len(), 9);
    }

    #[test]
    fn pop_returns_values_in_reverse_order() {
        let mut v = filled(&[1, 2, 3]);
        assert_eq!(v.pop_back(), Ok(3));
        assert_eq!(v.pop_back(), Ok(2));
        assert_eq!(v.pop_back(), Ok(1));
        assert!(v.is_empty());
    }

    #[test]
    fn pop_from_empty_container_reports_empty() {
        let mut v: Vessel<i32> = active();
        assert_eq!(v.pop_back(), Err(VesselError::Empty));
        assert!(v.is_empty());
    }

    #[test]
    fn pop_keeps_capacity() {
        let mut v = filled(&[1, 2, 3]);
        v.pop_back().unwrap();
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn push_with_constructs_in_place_and_hands_back_the_slot() {
        let mut v: Vessel<String> = active();
        let slot = v.push_with(|| String::from("ab")).unwrap();
        slot.push('c');
        assert_eq!(v.at(0), "abc");
    }

    #[test]
    fn clear_drops_elements_but_keeps_the_buffer() {
        let drops = AtomicUsize::new(0);
        let mut v = active();
        for _ in 0..5 {
            v.push_back(Tracked(&drops)).unwrap();
        }
        v.clear().unwrap();
        assert_eq!(drops.load(Ordering::Relaxed), 5);
        assert_eq!((v.len(), v.capacity()), (0, 8));
        assert!(v.is_active());
    }

    // ── insert ───────────────────────────────────────────────────────

    #[test]
    fn insert_shifts_the_suffix_toward_the_back() {
        let mut v = filled(&[1, 2, 4, 5]);
        v.insert(2, 3).unwrap();
        assert_eq!(v.as_slice(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_at_front_and_at_len() {
        let mut v = filled(&[2]);
        v.insert(0, 1).unwrap();
        v.insert(2, 3).unwrap();
        assert_eq!(v.as_slice(), [1, 2, 3]);
    }

    #[test]
    fn insert_past_len_is_rejected() {
        let mut v = filled(&[1, 2]);
        assert_eq!(
            v.insert(3, 9),
            Err(VesselError::OutOfBounds {
                position: 3,
                len: 2
            })
        );
        assert_eq!(v.as_slice(), [1, 2]);
    }

    #[test]
    fn insert_into_a_full_container_grows_by_doubling() {
        let mut v = filled(&[1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);
        v.insert(1, 9).unwrap();
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.as_slice(), [1, 9, 2, 3, 4]);
    }

    // ── reserve and shrink ───────────────────────────────────────────

    #[test]
    fn reserve_grants_exactly_the_requested_capacity() {
        let mut v: Vessel<i32> = active();
        v.reserve(9).unwrap();
        assert_eq!(v.capacity(), 9);
    }

    #[test]
    fn reserve_clamps_small_requests_to_the_minimum() {
        let mut v: Vessel<i32> = active();
        v.reserve(2).unwrap();
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn reserve_at_or_below_capacity_is_a_silent_no_op() {
        let mut v = filled(&[1, 2, 3, 4, 5]);
        let before = v.capacity();
        v.reserve(3).unwrap();
        v.reserve(before).unwrap();
        assert_eq!(v.capacity(), before);
        assert_eq!(v.as_slice(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn reserve_preserves_elements_across_the_move() {
        let mut v = filled(&[10, 20, 30]);
        v.reserve(64).unwrap();
        assert_eq!(v.capacity(), 64);
        assert_eq!(v.as_slice(), [10, 20, 30]);
    }

    #[test]
    fn shrink_to_fit_matches_capacity_to_len() {
        let mut v = active();
        for i in 1..=6 {
            v.push_back(i).unwrap();
        }
        assert_eq!(v.capacity(), 8);
        v.shrink_to_fit().unwrap();
        assert_eq!(v.capacity(), 6);
        assert_eq!(v.as_slice(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn shrink_to_fit_on_empty_container_releases_the_buffer() {
        let mut v = filled(&[1, 2, 3]);
        v.clear().unwrap();
        v.shrink_to_fit().unwrap();
        assert_eq!(v.capacity(), 0);
        assert!(v.is_active());
    }

    #[test]
    fn shrink_to_fit_when_already_tight_is_a_no_op() {
        let mut v: Vessel<i32> = active();
        v.extend_from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(v.capacity(), 4);
        v.shrink_to_fit().unwrap();
        assert_eq!(v.capacity(), 4);
    }

    // ── resize ───────────────────────────────────────────────────────

    #[test]
    fn resize_grows_with_the_fill_value() {
        let mut v = filled(&[1, 2]);
        v.resize(5, 7).unwrap();
        assert_eq!(v.as_slice(), [1, 2, 7, 7, 7]);
    }

    #[test]
    fn resize_reserves_exactly_the_requirement() {
        let mut v = filled(&[1]);
        v.resize(10, 0).unwrap();
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn resize_shrinks_and_drops_the_tail() {
        let drops = AtomicUsize::new(0);
        let mut v = active();
        for _ in 0..6 {
            v.push_back(Tracked(&drops)).unwrap();
        }
        v.resize(2, Tracked(&drops)).unwrap();
        // Four truncated elements plus the unused fill value.
        assert_eq!(drops.load(Ordering::Relaxed), 5);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn resize_to_current_len_changes_nothing() {
        let mut v = filled(&[1, 2, 3]);
        v.resize(3, 9).unwrap();
        assert_eq!(v.as_slice(), [1, 2, 3]);
        assert_eq!(v.capacity(), 4);
    }

    // ── bulk append and insert ───────────────────────────────────────

    #[test]
    fn extend_into_empty_container_sizes_exactly_or_to_minimum() {
        let mut v: Vessel<i32> = active();
        v.extend_from_slice(&[1, 2]).unwrap();
        assert_eq!(v.capacity(), 4);

        let mut w: Vessel<i32> = active();
        w.extend_from_slice(&[0; 9]).unwrap();
        assert_eq!(w.capacity(), 9);
    }

    #[test]
    fn extend_doubles_until_the_batch_fits() {
        let mut v = filled(&[1, 2, 3]);
        assert_eq!(v.capacity(), 4);
        v.extend_from_slice(&[4, 5, 6]).unwrap();
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.as_slice(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn extend_with_empty_slice_is_a_silent_no_op() {
        let mut v = filled(&[1]);
        v.extend_from_slice(&[]).unwrap();
        assert_eq!(v.as_slice(), [1]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn insert_from_slice_splices_into_the_middle() {
        let mut v = filled(&[1, 2, 6, 7]);
        v.insert_from_slice(2, &[3, 4, 5]).unwrap();
        assert_eq!(v.as_slice(), [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn insert_from_slice_validates_position_before_the_empty_early_out() {
        let mut v = filled(&[1, 2]);
        assert_eq!(
            v.insert_from_slice(5, &[]),
            Err(VesselError::OutOfBounds {
                position: 5,
                len: 2
            })
        );
        v.insert_from_slice(1, &[]).unwrap();
        assert_eq!(v.as_slice(), [1, 2]);
    }

    #[test]
    fn insert_from_slice_takes_the_larger_of_requirement_and_step() {
        // Requirement 5 within one doubling step: capacity 8.
        let mut v = filled(&[1, 2, 3, 4]);
        v.insert_from_slice(2, &[9]).unwrap();
        assert_eq!(v.capacity(), 8);

        // Requirement 24 far past the step: granted exactly.
        let mut w = filled(&[1, 2, 3, 4]);
        w.insert_from_slice(2, &[0; 20]).unwrap();
        assert_eq!(w.capacity(), 24);
        assert_eq!(w.len(), 24);
        assert_eq!(w.as_slice()[..2], [1, 2]);
        assert_eq!(w.as_slice()[22..], [3, 4]);
    }

    #[test]
    fn insert_from_slice_at_len_appends() {
        let mut v = filled(&[1, 2]);
        v.insert_from_slice(2, &[3, 4]).unwrap();
        assert_eq!(v.as_slice(), [1, 2, 3, 4]);
    }

    // ── access ───────────────────────────────────────────────────────

    #[test]
    fn at_reads_and_at_mut_writes_through() {
        let mut v = filled(&[1, 2, 3]);
        assert_eq!(*v.at(1), 2);
        *v.at_mut(1) = 20;
        assert_eq!(v.as_slice(), [1, 20, 3]);
    }

    #[test]
    #[should_panic(expected = "checked access out of bounds")]
    fn at_out_of_bounds_panics() {
        let v = filled(&[1, 2]);
        let _ = v.at(2);
    }

    #[test]
    #[should_panic(expected = "checked access on uninitialized container")]
    fn at_before_init_panics() {
        let v: Vessel<i32> = Vessel::new();
        let _ = v.at(0);
    }

    #[test]
    fn get_is_the_recoverable_form_of_at() {
        let mut v = filled(&[1, 2]);
        assert_eq!(v.get(1), Some(&2));
        assert_eq!(v.get(2), None);
        if let Some(slot) = v.get_mut(0) {
            *slot = 10;
        }
        assert_eq!(v.as_slice(), [10, 2]);
    }

    #[test]
    fn get_on_inactive_container_is_none() {
        let v: Vessel<i32> = Vessel::new();
        assert_eq!(v.get(0), None);
    }

    #[test]
    fn front_and_back_view_the_ends() {
        let v = filled(&[1, 2, 3]);
        assert_eq!(*v.front(), 1);
        assert_eq!(*v.back(), 3);
    }

    #[test]
    #[should_panic(expected = "front() on an empty container")]
    fn front_on_empty_container_panics() {
        let v: Vessel<i32> = active();
        let _ = v.front();
    }

    // ── swap ─────────────────────────────────────────────────────────

    #[test]
    fn swap_exchanges_buffers_lengths_and_capacities() {
        let mut a = filled(&[1, 2, 3, 4, 5]);
        let mut b = filled(&[9]);
        let (cap_a, cap_b) = (a.capacity(), b.capacity());
        a.swap(&mut b).unwrap();
        assert_eq!(a.as_slice(), [9]);
        assert_eq!(b.as_slice(), [1, 2, 3, 4, 5]);
        assert_eq!(a.capacity(), cap_b);
        assert_eq!(b.capacity(), cap_a);
    }

    #[test]
    fn swap_with_inactive_container_is_rejected() {
        let mut a = filled(&[1]);
        let mut b: Vessel<i32> = Vessel::new();
        assert_eq!(
            a.swap(&mut b),
            Err(VesselError::NotActive {
                state: Lifecycle::Uninitialized
            })
        );
        assert_eq!(a.as_slice(), [1]);
        assert!(!b.is_active());
    }

    // ── ownership on teardown ────────────────────────────────────────

    #[test]
    fn destroy_drops_every_live_element() {
        let drops = AtomicUsize::new(0);
        let mut v = active();
        for _ in 0..3 {
            v.push_back(Tracked(&drops)).unwrap();
        }
        v.destroy().unwrap();
        assert_eq!(drops.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn scope_exit_without_destroy_still_drops_elements() {
        let drops = AtomicUsize::new(0);
        {
            let mut v = active();
            for _ in 0..4 {
                v.push_back(Tracked(&drops)).unwrap();
            }
        }
        assert_eq!(drops.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn pop_transfers_ownership_instead_of_dropping() {
        let drops = AtomicUsize::new(0);
        let mut v = active();
        v.push_back(Tracked(&drops)).unwrap();
        let taken = v.pop_back().unwrap();
        assert_eq!(drops.load(Ordering::Relaxed), 0);
        drop(taken);
        assert_eq!(drops.load(Ordering::Relaxed), 1);
    }

    // ── zero-sized and misc ──────────────────────────────────────────

    #[test]
    fn zero_sized_elements_follow_the_same_capacity_sequence() {
        let mut v: Vessel<()> = active();
        for _ in 0..5 {
            v.push_back(()).unwrap();
        }
        assert_eq!((v.len(), v.capacity()), (5, 8));
        assert_eq!(v.pop_back(), Ok(()));
        assert_eq!(v.byte_len(), 0);
        v.destroy().unwrap();
    }

    #[test]
    fn byte_len_scales_with_element_size() {
        let mut v: Vessel<u64> = active();
        v.extend_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v.byte_len(), 24);
    }

    #[test]
    fn unrepresentable_reserve_fails_without_side_effects() {
        let mut v = filled(&[1, 2]);
        let huge = usize::MAX / 2;
        assert_eq!(
            v.reserve(huge),
            Err(VesselError::AllocationFailed { capacity: huge })
        );
        assert_eq!(v.as_slice(), [1, 2]);
        assert_eq!(v.capacity(), 4);
        assert!(v.is_active());
    }

    #[test]
    fn debug_output_names_state_len_and_elements() {
        let v = filled(&[1, 2]);
        let rendered = format!("{v:?}");
        assert!(rendered.contains("Active"));
        assert!(rendered.contains("len: 2"));
        assert!(rendered.contains("[1, 2]"));
    }
}
