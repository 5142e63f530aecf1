//! Corridor geometry for the evacuation map.
//!
//! Pure functions over map templates: wall collision, snapping drawn points
//! into corridors, and validating that a route stays inside them.

pub mod collision;
pub mod corridor;
pub mod snap;

pub use collision::{route_crosses_wall, segment_crosses_wall, segments_intersect};
pub use corridor::{validate_route, validate_route_with_step, RouteCheck};
pub use snap::snap;
