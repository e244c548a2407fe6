//! Linear search over the live region.
//!
//! The scan advances four elements per iteration with a scalar remainder
//! loop; observable behavior is a plain first-match scan.

use crate::diag;
use crate::error::VesselError;
use crate::Vessel;

impl<T: PartialEq> Vessel<T> {
    /// Index of the first element equal to `value`, or `None` when absent.
    ///
    /// Searching a container that is not `Active` reports a stderr
    /// diagnostic and returns `None`.
    ///
    /// ```
    /// use vessel::Vessel;
    ///
    /// let mut v = Vessel::new();
    /// v.init();
    /// v.extend_from_slice(&[5, 12, 13, 14, 48, 50])?;
    /// assert_eq!(v.find(&48), Some(4));
    /// assert_eq!(v.find(&7), None);
    /// # Ok::<(), vessel::VesselError>(())
    /// ```
    #[track_caller]
    pub fn find(&self, value: &T) -> Option<usize> {
        if !self.is_active() {
            let err = VesselError::NotActive { state: self.state() };
            diag::error("find", &err);
            return None;
        }
        scan(self.live(), value, |element, probe| element == probe)
    }
}

impl<T> Vessel<T> {
    /// Index of the first element for which `eq(element, value)` holds, or
    /// `None` when no element matches.
    ///
    /// The predicate form covers element types without a usable equality
    /// operator, or with a domain-specific notion of equivalence. As for
    /// [`find`](Self::find), an inactive container reports a diagnostic
    /// and yields `None`.
    #[track_caller]
    pub fn find_with<F>(&self, value: &T, eq: F) -> Option<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        if !self.is_active() {
            let err = VesselError::NotActive { state: self.state() };
            diag::error("find_with", &err);
            return None;
        }
        scan(self.live(), value, eq)
    }
}

/// First-match scan, unrolled four wide.
fn scan<T, F>(live: &[T], value: &T, eq: F) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let len = live.len();
    let mut i = 0;
    while i + 4 <= len {
        if eq(&live[i], value) {
            return Some(i);
        }
        if eq(&live[i + 1], value) {
            return Some(i + 1);
        }
        if eq(&live[i + 2], value) {
            return Some(i + 2);
        }
        if eq(&live[i + 3], value) {
            return Some(i + 3);
        }
        i += 4;
    }
    while i < len {
        if eq(&live[i], value) {
            return Some(i);
        }
        i += 1;
    }
    None
}
