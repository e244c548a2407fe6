//! Container lifecycle states.

use std::fmt;

/// Lifecycle state of a [`Vessel`](crate::Vessel).
///
/// Containers are created `Uninitialized`, become `Active` through
/// [`init`](crate::Vessel::init), and end up `Destroyed` through
/// [`destroy`](crate::Vessel::destroy). Element operations are legal only
/// while `Active`. A `Destroyed` container may be re-initialized, which
/// begins a fresh lifecycle; an `Uninitialized` container can never move
/// straight to `Destroyed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Declared but never initialized. No buffer exists.
    Uninitialized,
    /// Initialized and usable. The buffer may still be empty.
    Active,
    /// Explicitly destroyed. The buffer has been released.
    Destroyed,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Active => write!(f, "active"),
            Self::Destroyed => write!(f, "destroyed"),
        }
    }
}
