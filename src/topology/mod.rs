//! Map topology module.
//!
//! This module places access points on the map, either on the centre of a
//! fixed grid or at random positions respecting a minimum AP-AP distance.

pub mod types;
pub mod grid;
pub mod distribution;

// Re-export key types and functions for easier access
pub use types::Point3;
pub use grid::grid_centers;
pub use distribution::place_access_points;
