//! Spatial and name indexes for map locations.
//!
//! - [`KdTree`]: nearest-neighbor search over 2D points
//! - [`Trie`]: exact, prefix and longest-prefix string lookups
//! - [`PlaceIndex`]: both of the above wired over [`Location`] records
//!
//! All structures are built once and then queried read-only; rebuilding
//! means constructing a new value.
//!
//! [`Location`]: wayfind_core::Location

mod kdtree;
mod places;
mod trie;

pub use kdtree::{IndexError, KdTree};
pub use places::{PlaceIndex, clean_name};
pub use trie::Trie;
