//! Akima spline
//!
//! A function style spline (strictly increasing x) with a continuous first
//! derivative. The slope at a point is a weighted mean of the secants on both
//! sides, the weights being the differences of the next secants further out.
//! An outlier therefore only bends the curve next to it.
//!
//! The two missing secants at each end come from a parabolic end
//! extrapolation: `m[-1] = 2 m[0] - m[1]`, `m[-2] = 3 m[0] - 2 m[1]` and
//! symmetrically at the other end.

use crate::constants::AKIMA_WEIGHT_EPSILON;
use crate::data::{BezierCurve, BezierSegment, Point};
use crate::modules::spline::SplineInterpolator;

/// Slope of the Akima spline at every point
///
/// Empty for fewer than 2 points, the secant twice for 2.
pub fn slopes(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let secants: Vec<f64> = points
        .windows(2)
        .map(|pair| (pair[1].y - pair[0].y) / (pair[1].x - pair[0].x))
        .collect();

    if n == 2 {
        return vec![secants[0]; 2];
    }

    // extended[k] is the secant m[k - 2]
    let last = n - 2;
    let mut extended = Vec::with_capacity(n + 3);
    extended.push(3.0 * secants[0] - 2.0 * secants[1]);
    extended.push(2.0 * secants[0] - secants[1]);
    extended.extend_from_slice(&secants);
    extended.push(2.0 * secants[last] - secants[last - 1]);
    extended.push(3.0 * secants[last] - 2.0 * secants[last - 1]);

    extended
        .windows(4)
        .map(|m| {
            let w1 = (m[3] - m[2]).abs();
            let w2 = (m[1] - m[0]).abs();

            if w1 + w2 < AKIMA_WEIGHT_EPSILON {
                0.5 * (m[1] + m[2])
            } else {
                (w1 * m[1] + w2 * m[2]) / (w1 + w2)
            }
        })
        .collect()
}

/// Akima spline through points with strictly increasing x
#[derive(Debug, Clone, Copy, Default)]
pub struct AkimaSpline;

impl AkimaSpline {
    pub fn new() -> Self {
        Self
    }
}

impl SplineInterpolator for AkimaSpline {
    fn path(&self, points: &[Point]) -> BezierCurve {
        if points.len() < 2 {
            return BezierCurve::default();
        }

        let slopes = slopes(points);
        let segments = points
            .windows(2)
            .zip(slopes.windows(2))
            .map(|(p, s)| BezierSegment::from_hermite(p[0], s[0], p[1], s[1]))
            .collect();

        BezierCurve::new(segments)
    }

    fn locality(&self) -> usize {
        2
    }
}
