//! Flattening of cubic Bezier curves into polylines
//!
//! A segment is split at t = 0.5 (de Casteljau) until every piece is flat
//! enough, the end points of the pieces form the polyline. Flatness is
//! measured with Roger Willcocks' estimator (see
//! [`BezierSegment::flatness`]), which bounds the distance between a piece
//! and its chord without square roots or trigonometry.
//!
//! The subdivision runs on an explicit stack, so pathological input cannot
//! exhaust the call stack.
//!
//! # Example
//!
//! ```rust
//! use bezier_spline::{cubic, BezierFlattener};
//!
//! let arch = cubic!([(0, 0), (0, 10), (10, 10), (10, 0)]);
//! let polygon = BezierFlattener::new(0.25).to_polygon(&arch);
//!
//! assert_eq!(polygon.first(), Some(&arch.start()));
//! assert_eq!(polygon.last(), Some(&arch.end()));
//!
//! // a tolerance of zero cannot be reached
//! assert!(BezierFlattener::new(0.0).to_polygon(&arch).is_empty());
//! ```

use crate::constants::{DEFAULT_TOLERANCE, FLATNESS_SCALE, MAX_SUBDIVISION_DEPTH};
use crate::data::{BezierCurve, BezierSegment, Point};
use log::{debug, trace};

/// Converts cubic segments into polylines within a tolerance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierFlattener {
    tolerance: f64,
    flatness: f64,
}

impl Default for BezierFlattener {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl BezierFlattener {
    /// Create a flattener, negative tolerances are clamped to 0
    pub fn new(tolerance: f64) -> Self {
        let tolerance = tolerance.max(0.0);
        Self {
            tolerance,
            flatness: min_flatness(tolerance),
        }
    }

    pub fn set_tolerance(&mut self, tolerance: f64) {
        *self = Self::new(tolerance);
    }

    /// Maximum distance between the curve and the polyline
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Polyline from the start to the end point of the segment
    ///
    /// Empty when the tolerance is 0.
    pub fn to_polygon(&self, segment: &BezierSegment) -> Vec<Point> {
        if self.flatness <= 0.0 {
            debug!("a flatness of 0 is not achievable");
            return Vec::new();
        }

        let mut polygon = Vec::new();
        self.append_to_polygon(segment, &mut polygon);
        push_distinct(&mut polygon, segment.end());

        polygon
    }

    /// Append the start point and the inner points of the polyline, but not
    /// the end point
    ///
    /// The end point of one segment is the start point of the next one in a
    /// path, so appending all segments of a path and then its last end point
    /// yields the polyline without duplicates. A point equal to the last one
    /// of `polygon` is never appended. Does nothing when the tolerance is 0.
    pub fn append_to_polygon(&self, segment: &BezierSegment, polygon: &mut Vec<Point>) {
        if self.flatness <= 0.0 {
            debug!("a flatness of 0 is not achievable");
            return;
        }

        push_distinct(polygon, segment.start());

        // the estimate also grows with unevenly spaced control points on the chord
        if segment.is_chord() {
            return;
        }

        // depth first, the first half is always on top of the stack
        let mut stack = vec![(*segment, 0u32)];

        while let Some((piece, depth)) = stack.pop() {
            let flatness = piece.flatness();
            // subdividing cannot make a non-finite estimate finite
            let done = flatness < self.flatness || !flatness.is_finite();
            if done || depth >= MAX_SUBDIVISION_DEPTH {
                if !done {
                    trace!("subdivision depth limit reached");
                }

                // the last remaining piece ends at the end point of the segment
                if stack.is_empty() {
                    return;
                }
                push_distinct(polygon, piece.end());
            } else {
                let (first, second) = piece.subdivided();
                stack.push((second, depth + 1));
                stack.push((first, depth + 1));
            }
        }
    }

    /// Polyline of a whole path, closed paths end with their start point
    ///
    /// Empty for an empty path or when the tolerance is 0.
    pub fn flatten_curve(&self, curve: &BezierCurve) -> Vec<Point> {
        let Some(end) = curve.end_point() else {
            return Vec::new();
        };
        if self.flatness <= 0.0 {
            debug!("a flatness of 0 is not achievable");
            return Vec::new();
        }

        let mut polygon = Vec::new();
        for segment in &curve.segments {
            self.append_to_polygon(segment, &mut polygon);
        }
        push_distinct(&mut polygon, end);

        polygon
    }
}

fn push_distinct(polygon: &mut Vec<Point>, point: Point) {
    if polygon.last() != Some(&point) {
        polygon.push(point);
    }
}

/// Flatness threshold of a tolerance, `16 * tolerance^2`
fn min_flatness(tolerance: f64) -> f64 {
    FLATNESS_SCALE * (tolerance * tolerance)
}
