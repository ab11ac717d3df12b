//! Output sinks of the spline traversals
//!
//! A traversal computes the cubic segments of a spline one after the other and
//! hands them to a [`SplineStore`]. The same traversal either builds a path or
//! only collects the control points, depending on the store it is given.

use crate::data::{BezierCurve, BezierSegment, Line, Point};

pub trait SplineStore: Default {
    /// Called once with the number of segments that will follow
    fn init(&mut self, num_segments: usize);

    /// Start point of the first segment
    fn start(&mut self, p0: Point);

    /// Next segment, starting at the end of the previous one
    fn add_cubic(&mut self, cp1: Point, cp2: Point, p2: Point);
}

/// Builds a [`BezierCurve`]
#[derive(Debug, Default)]
pub struct PathStore {
    pub path: BezierCurve,
    current: Point,
}

impl SplineStore for PathStore {
    fn init(&mut self, num_segments: usize) {
        self.path.segments.reserve(num_segments);
    }

    fn start(&mut self, p0: Point) {
        self.current = p0;
    }

    fn add_cubic(&mut self, cp1: Point, cp2: Point, p2: Point) {
        self.path
            .segments
            .push(BezierSegment::cubic(self.current, cp1, cp2, p2));
        self.current = p2;
    }
}

/// Collects the pair of inner control points of every segment
#[derive(Debug, Default)]
pub struct ControlPointsStore {
    pub control_points: Vec<Line>,
}

impl SplineStore for ControlPointsStore {
    fn init(&mut self, num_segments: usize) {
        self.control_points.reserve(num_segments);
    }

    fn start(&mut self, _p0: Point) {}

    fn add_cubic(&mut self, cp1: Point, cp2: Point, _p2: Point) {
        self.control_points.push(Line::new(cp1, cp2));
    }
}
