//! Line segment between two points.

use crate::data::point::Point;
use serde::{Deserialize, Serialize};

/// A straight line from `p1` to `p2`
///
/// The spline engines use it to report the pair of inner control points of
/// every cubic segment (the tangent handles).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
}
