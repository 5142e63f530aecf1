//! Segment intersection against wall segments.
//!
//! Uses the orientation (cross-product sign) test. Touching endpoints and
//! collinear overlap both count as intersecting.

use glam::DVec2;

use evac_core::layout::Wall;
use evac_core::types::Position;

/// Cross products smaller than this are treated as collinear.
const COLLINEAR_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

fn orientation(a: DVec2, b: DVec2, c: DVec2) -> Orientation {
    let cross = (b - a).perp_dot(c - a);
    if cross.abs() < COLLINEAR_EPSILON {
        Orientation::Collinear
    } else if cross > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Whether collinear point `q` lies within the bounding box of segment `p`–`r`.
fn on_segment(p: DVec2, q: DVec2, r: DVec2) -> bool {
    q.x <= p.x.max(r.x) + COLLINEAR_EPSILON
        && q.x >= p.x.min(r.x) - COLLINEAR_EPSILON
        && q.y <= p.y.max(r.y) + COLLINEAR_EPSILON
        && q.y >= p.y.min(r.y) - COLLINEAR_EPSILON
}

/// True if segment `p1`–`p2` and segment `p3`–`p4` cross, touch, or overlap.
pub fn segments_intersect(p1: &Position, p2: &Position, p3: &Position, p4: &Position) -> bool {
    let (a, b, c, d) = (p1.as_vec(), p2.as_vec(), p3.as_vec(), p4.as_vec());

    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 != o2 && o3 != o4 && o1 != Orientation::Collinear && o2 != Orientation::Collinear
        && o3 != Orientation::Collinear && o4 != Orientation::Collinear
    {
        return true;
    }

    // Degenerate cases: an endpoint lies on the other segment.
    (o1 == Orientation::Collinear && on_segment(a, c, b))
        || (o2 == Orientation::Collinear && on_segment(a, d, b))
        || (o3 == Orientation::Collinear && on_segment(c, a, d))
        || (o4 == Orientation::Collinear && on_segment(c, b, d))
}

/// True if the segment `from`–`to` intersects any wall.
pub fn segment_crosses_wall(from: &Position, to: &Position, walls: &[Wall]) -> bool {
    walls
        .iter()
        .any(|wall| segments_intersect(from, to, &wall.start, &wall.end))
}

/// True if any leg of the polyline intersects a wall.
pub fn route_crosses_wall(route: &[Position], walls: &[Wall]) -> bool {
    route
        .windows(2)
        .any(|leg| segment_crosses_wall(&leg[0], &leg[1], walls))
}
