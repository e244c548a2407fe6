//! Container error types.

use std::error::Error;
use std::fmt;

use crate::state::Lifecycle;

/// Errors reported by fallible container operations.
///
/// Every variant belongs to one of two families. Usage errors
/// ([`NotActive`](Self::NotActive), [`AlreadyDestroyed`](Self::AlreadyDestroyed),
/// [`OutOfBounds`](Self::OutOfBounds), [`Empty`](Self::Empty)) mean the call
/// itself was wrong; exhaustion ([`AllocationFailed`](Self::AllocationFailed))
/// means the allocator could not satisfy a legitimate request. Both leave the
/// container exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VesselError {
    /// The operation requires an `Active` container.
    NotActive {
        /// The state the container was actually in.
        state: Lifecycle,
    },
    /// `destroy` was called on an already-destroyed container.
    AlreadyDestroyed,
    /// An insert position or access index lies beyond the live region.
    OutOfBounds {
        /// The offending position.
        position: usize,
        /// Live element count at the time of the call.
        len: usize,
    },
    /// A removal was attempted on a container holding no elements.
    Empty,
    /// The allocator could not provide the requested buffer, or the
    /// requested capacity is not representable.
    AllocationFailed {
        /// The capacity that was requested, in element slots.
        capacity: usize,
    },
}

impl fmt::Display for VesselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotActive { state } => {
                write!(f, "container is {state}, not active")
            }
            Self::AlreadyDestroyed => write!(f, "container already destroyed"),
            Self::OutOfBounds { position, len } => {
                write!(f, "position {position} out of bounds (len {len})")
            }
            Self::Empty => write!(f, "container is empty"),
            Self::AllocationFailed { capacity } => {
                write!(f, "allocation of {capacity} element slots failed")
            }
        }
    }
}

impl Error for VesselError {}
