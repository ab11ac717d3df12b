//! A Bezier curve: a path of connected cubic Bezier segments.

use crate::data::point::Point;
use crate::data::segment::BezierSegment;
use serde::{Deserialize, Serialize};

/// A Bezier curve consisting of zero or more connected cubic segments
///
/// Every segment starts where the previous one ends. A closed curve is
/// flagged explicitly and its last end point equals its first start point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BezierCurve {
    pub segments: Vec<BezierSegment>,
    closed: bool,
}

impl BezierCurve {
    /// Create a new open bezier curve from a list of segments
    pub fn new(segments: Vec<BezierSegment>) -> Self {
        Self {
            segments,
            closed: false,
        }
    }

    /// Create a closed bezier curve
    ///
    /// Returns `None` when there are no segments or when the last end point
    /// does not meet the first start point.
    pub fn new_closed(segments: Vec<BezierSegment>) -> Option<Self> {
        let mut curve = Self::new(segments);
        if curve.close_subpath() {
            Some(curve)
        } else {
            None
        }
    }

    /// Create a bezier curve from a single segment
    pub fn from_segment(segment: &BezierSegment) -> Self {
        Self::new(vec![*segment])
    }

    /// Flag the curve as closed if its ends meet, returns whether it is closed
    pub fn close_subpath(&mut self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) if start == end => self.closed = true,
            _ => {}
        }
        self.closed
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn start_point(&self) -> Option<Point> {
        self.segments.first().map(BezierSegment::start)
    }

    pub fn end_point(&self) -> Option<Point> {
        self.segments.last().map(BezierSegment::end)
    }

    /// Whether every segment starts exactly where the previous one ends
    pub fn is_connected(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end() == pair[1].start())
    }
}
