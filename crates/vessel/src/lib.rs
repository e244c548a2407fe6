//! Growable contiguous-buffer containers with an explicit init/destroy
//! lifecycle.
//!
//! [`Vessel<T>`] owns a single heap buffer, a live-element count and a
//! lifecycle tag. Storage management is caller-visible: containers are
//! created inert, switched on with [`Vessel::init`] and released with
//! [`Vessel::destroy`]; element operations outside the `Active` state are
//! rejected without touching the container. A `Drop` impl backstops the
//! explicit lifecycle so scope exit never leaks, but it is a convenience
//! layer, not the contract.
//!
//! # Quick start
//!
//! ```
//! use vessel::Vessel;
//!
//! let mut v = Vessel::new();
//! v.init();
//!
//! v.push_back(5)?;
//! v.push_back(12)?;
//! v.push_back(13)?;
//! v.extend_from_slice(&[14, 48, 50])?;
//!
//! assert_eq!(v.as_slice(), [5, 12, 13, 14, 48, 50]);
//! assert_eq!(v.find(&48), Some(4));
//!
//! v.shrink_to_fit()?;
//! assert_eq!(v.capacity(), 6);
//!
//! v.destroy()?;
//! # Ok::<(), vessel::VesselError>(())
//! ```
//!
//! # Capacity policy
//!
//! Appending into a full container doubles the capacity from a floor of
//! four slots (0, 4, 8, 16, ...), which keeps appends amortized O(1).
//! [`Vessel::reserve`] grants exactly the requested floor; the bulk
//! operations compute one covering capacity so a whole batch costs at most
//! one reallocation; [`Vessel::shrink_to_fit`] drops the capacity to the
//! live count.
//!
//! # Failure model
//!
//! Usage errors (wrong lifecycle state, out-of-range positions, popping an
//! empty container) and allocation failures return [`VesselError`] and
//! leave the container exactly as it was. Each rejection also writes one
//! advisory `[!]`/`[x]` line to stderr naming the operation and the call
//! site. Checked access ([`Vessel::at`] / [`Vessel::at_mut`]) is the
//! deliberate exception: a violated bound or lifecycle there panics after
//! reporting, so a successful return is always valid data.
//!
//! # Unsafe policy
//!
//! Two modules may contain `unsafe` code: `raw` (allocation) and
//! `container` (element moves). Every `unsafe` block carries a
//! `// SAFETY:` comment; the rest of the crate compiles under
//! `deny(unsafe_code)`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod container;
mod diag;
pub mod error;
mod growth;
mod iter;
mod raw;
mod search;
pub mod state;

// Public re-exports for the primary API surface.
pub use container::Vessel;
pub use error::VesselError;
pub use state::Lifecycle;
