//! Core value types shared by the wayfind query engines.
//!
//! - [`Point`]: a 2D real coordinate with value equality and a stable hash
//! - [`Location`]: a map record (identifier, coordinates, optional name)
//!   handed over by the map-loading layer

pub mod geom;
pub mod location;

pub use geom::{Point, distance};
pub use location::Location;
