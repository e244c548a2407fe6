//! Capacity growth policy.
//!
//! All capacity arithmetic lives here as pure functions so the policy can
//! be tested without touching the allocator. Three rules cover every
//! growth site:
//!
//! - single-element growth doubles from a floor of four slots,
//! - bulk append doubles repeatedly until the requirement fits,
//! - bulk insert takes the larger of the exact requirement and one
//!   doubling step.
//!
//! Every function is overflow-checked. `None` means the requested capacity
//! cannot be represented; callers surface it as an allocation failure.

/// Smallest non-zero capacity the container ever requests.
pub(crate) const MIN_CAPACITY: usize = 4;

/// Next capacity after `cap` for single-element growth: `max(4, cap * 2)`.
pub(crate) fn next_capacity(cap: usize) -> Option<usize> {
    if cap < MIN_CAPACITY {
        Some(MIN_CAPACITY)
    } else {
        cap.checked_mul(2)
    }
}

/// Capacity for a bulk append that must hold `required` slots in total.
///
/// From zero capacity this is `max(required, 4)`. Otherwise the current
/// capacity doubles until it covers `required`, so a whole batch costs at
/// most one reallocation and stays on the doubling sequence.
pub(crate) fn append_target(cap: usize, required: usize) -> Option<usize> {
    if cap == 0 {
        return Some(required.max(MIN_CAPACITY));
    }
    let mut target = cap;
    while target < required {
        target = target.checked_mul(2)?;
    }
    Some(target)
}

/// Capacity for a bulk insert that must hold `required` slots in total:
/// the larger of the exact requirement and one standard doubling step.
pub(crate) fn insert_target(cap: usize, required: usize) -> Option<usize> {
    let step = next_capacity(cap)?;
    Some(required.max(step))
}
