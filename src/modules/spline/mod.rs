//! Spline interpolation with piecewise cubic Bezier curves
//!
//! # Available splines
//!
//! - [`CardinalSpline`]: G1 continuous cardinal spline with tensions derived
//!   from the local geometry, open or closed
//! - [`PleasingSpline`]: cardinal variant recomputing the tangents segment
//!   by segment for a smoother look on unevenly spaced points
//! - [`NaturalSpline`]: C2 continuous natural cubic spline, function style
//! - [`AkimaSpline`]: C1 continuous Akima spline, function style
//! - [`SmoothingSpline`]: natural cubic spline trading closeness to the points
//!   for smoothness, function style
//!
//! # Example
//!
//! ```rust
//! use bezier_spline::{points, CardinalSpline, Parametrization, SplineInterpolator};
//!
//! let points = points![(0, 0), (1, 2), (2, 0), (3, 2)];
//! let spline = CardinalSpline::new().with_parametrization(Parametrization::Uniform);
//!
//! let path = spline.path(&points);
//! assert_eq!(path.len(), 3);
//!
//! // flattened for rendering
//! let polygon = spline.polygon(&points, 0.01);
//! assert_eq!(polygon.first(), points.first());
//! assert_eq!(polygon.last(), points.last());
//! ```

pub mod akima;
pub mod cardinal;
pub mod natural;
pub mod pleasing;
pub mod smoothing;
pub mod store;

pub use akima::AkimaSpline;
pub use cardinal::CardinalSpline;
pub use natural::NaturalSpline;
pub use pleasing::PleasingSpline;
pub use smoothing::SmoothingSpline;

use crate::data::{BezierCurve, Line, Point};
use crate::modules::flatten::BezierFlattener;

/// Interpolation of an ordered point sequence by a path of cubic segments
pub trait SplineInterpolator {
    /// Interpolating path, empty when the points are too few for the spline
    fn path(&self, points: &[Point]) -> BezierCurve;

    /// Inner control points of every segment of [`path`](Self::path)
    fn bezier_control_lines(&self, points: &[Point]) -> Vec<Line> {
        self.path(points)
            .segments
            .iter()
            .map(|segment| {
                let (cp1, cp2) = segment.control_points();
                Line::new(cp1, cp2)
            })
            .collect()
    }

    /// Number of segments on each side of a point that change when it moves,
    /// 0 when every point influences the whole curve
    fn locality(&self) -> usize;

    /// Interpolating path flattened into a polyline
    fn polygon(&self, points: &[Point], tolerance: f64) -> Vec<Point> {
        BezierFlattener::new(tolerance).flatten_curve(&self.path(points))
    }
}
