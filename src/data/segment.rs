//! Bezier segment: cubic bezier curve segment

use crate::data::point::Point;
use serde::{Deserialize, Serialize};

/// A cubic bezier segment, the output unit of every spline engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    /// Control points: start point, control1, control2, end point
    pub points: [Point; 4],
}

impl BezierSegment {
    /// Create a cubic segment with 4 control points
    pub fn cubic(p1: Point, cp1: Point, cp2: Point, p2: Point) -> Self {
        Self {
            points: [p1, cp1, cp2, p2],
        }
    }

    /// Convert the cubic Hermite piece of a function `y(x)` between `p1` and
    /// `p2` with the given slopes into a Bezier segment
    ///
    /// x is linear in the curve parameter, so the segment is exact.
    pub fn from_hermite(p1: Point, slope1: f64, p2: Point, slope2: f64) -> Self {
        let dx3 = (p2.x - p1.x) / 3.0;
        Self::cubic(
            p1,
            Point::new(p1.x + dx3, p1.y + slope1 * dx3),
            Point::new(p2.x - dx3, p2.y - slope2 * dx3),
            p2,
        )
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[3]
    }

    /// The two inner control points
    pub fn control_points(&self) -> (Point, Point) {
        (self.points[1], self.points[2])
    }

    /// Get a point on the bezier curve at parameter t (0 <= t <= 1)
    pub fn point_at(&self, t: f64) -> Point {
        let [p1, p2, p3, p4] = self.points;
        let t1 = 1.0 - t;

        // B(t) = (1-t)^3 * p1 + 3(1-t)^2 * t * p2 + 3(1-t) * t^2 * p3 + t^3 * p4
        let x = t1.powi(3) * p1.x
            + 3.0 * t1.powi(2) * t * p2.x
            + 3.0 * t1 * t.powi(2) * p3.x
            + t.powi(3) * p4.x;

        let y = t1.powi(3) * p1.y
            + 3.0 * t1.powi(2) * t * p2.y
            + 3.0 * t1 * t.powi(2) * p3.y
            + t.powi(3) * p4.y;

        Point::new(x, y)
    }

    /// Generate a series of points along the bezier curve
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => vec![],
            1 => vec![self.start()],
            _ => (0..num_points)
                .map(|i| {
                    let t = i as f64 / (num_points - 1) as f64;
                    self.point_at(t)
                })
                .collect(),
        }
    }

    /// Estimate how far the segment is from being a straight line
    ///
    /// Roger Willcocks' estimator: the value is 16 times an upper bound of the
    /// squared distance between the curve and its chord, so comparing it with
    /// `16 * tolerance^2` needs no square root.
    pub fn flatness(&self) -> f64 {
        let [p1, cp1, cp2, p2] = self.points;

        let u = 3.0 * cp1 - 2.0 * p1 - p2;
        let v = 3.0 * cp2 - 2.0 * p2 - p1;

        (u.x * u.x).max(v.x * v.x) + (u.y * u.y).max(v.y * v.y)
    }

    /// Split the segment at t = 0.5 (de Casteljau)
    pub fn subdivided(&self) -> (BezierSegment, BezierSegment) {
        let [p1, cp1, cp2, p2] = self.points;

        let p12 = p1.midpoint(&cp1);
        let p23 = cp1.midpoint(&cp2);
        let p34 = cp2.midpoint(&p2);
        let p123 = p12.midpoint(&p23);
        let p234 = p23.midpoint(&p34);
        let mid = p123.midpoint(&p234);

        (
            BezierSegment::cubic(p1, p12, p123, mid),
            BezierSegment::cubic(mid, p234, p34, p2),
        )
    }

    /// Whether all four control points coincide or lie on one line
    pub fn is_line(&self) -> bool {
        let [p1, cp1, cp2, p2] = self.points;
        let cross = |a: Point, b: Point| a.x * b.y - a.y * b.x;

        let chord = p2 - p1;
        cross(chord, cp1 - p1) == 0.0 && cross(chord, cp2 - p1) == 0.0
    }

    /// Whether the curve never leaves its chord: the control points are on the
    /// line through the end points and project between them
    ///
    /// Such a segment is drawn exactly by its two end points, whatever the
    /// spacing of the control points.
    pub fn is_chord(&self) -> bool {
        if !self.is_line() {
            return false;
        }

        let [p1, cp1, cp2, p2] = self.points;
        let chord = p2 - p1;
        let length_squared = chord.x * chord.x + chord.y * chord.y;
        if length_squared == 0.0 {
            return cp1 == p1 && cp2 == p1;
        }

        let between = |p: Point| {
            let d = p - p1;
            let t = (d.x * chord.x + d.y * chord.y) / length_squared;
            (0.0..=1.0).contains(&t)
        };
        between(cp1) && between(cp2)
    }
}
