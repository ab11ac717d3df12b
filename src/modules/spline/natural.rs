//! Natural cubic spline
//!
//! A function style spline: the points are samples `(x, y)` of a function
//! with strictly increasing x. The curve is C2 continuous and its second
//! derivative ("curvature" below) vanishes at both ends.
//!
//! The curvatures at the inner points solve the tridiagonal system
//!
//! ```text
//! h[i-1] * M[i-1] + 2 * (h[i-1] + h[i]) * M[i] + h[i] * M[i+1]
//!     = 6 * (s[i] - s[i-1])
//! ```
//!
//! with `h[i] = x[i+1] - x[i]` and the secant slopes `s[i]`. The system is
//! diagonally dominant for increasing x, so the Thomas algorithm needs no
//! pivoting.
//!
//! Strictly increasing x is a precondition, not checked: equal x values divide
//! by zero.

use crate::data::{BezierCurve, BezierSegment, Point};
use crate::modules::spline::SplineInterpolator;
use log::debug;
use nalgebra::DVector;

/// Polynomial `a * dx^3 + b * dx^2 + c * dx + d` of one spline interval,
/// where `dx` is measured from the first point of the interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicCoefficients {
    pub fn value_at(&self, dx: f64) -> f64 {
        ((self.a * dx + self.b) * dx + self.c) * dx + self.d
    }

    pub fn slope_at(&self, dx: f64) -> f64 {
        (3.0 * self.a * dx + 2.0 * self.b) * dx + self.c
    }
}

/// Coefficients of the interval `p1`-`p2` from the curvatures at its ends
///
/// `d` is `p1.y`. Undefined when `p1.x == p2.x`.
pub fn coefficients(p1: &Point, curvature1: f64, p2: &Point, curvature2: f64) -> CubicCoefficients {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    CubicCoefficients {
        a: (curvature2 - curvature1) / (6.0 * dx),
        b: 0.5 * curvature1,
        c: dy / dx - (curvature2 + 2.0 * curvature1) * dx / 6.0,
        d: p1.y,
    }
}

/// Second derivative of the natural spline at every point
///
/// Empty for fewer than 2 points, zero everywhere for 2.
pub fn curvatures(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    if n == 2 {
        return vec![0.0; 2];
    }
    if points.windows(2).any(|pair| pair[1].x <= pair[0].x) {
        debug!("natural spline points are not strictly increasing in x");
    }

    let h = DVector::from_iterator(n - 1, points.windows(2).map(|pair| pair[1].x - pair[0].x));
    let slopes = DVector::from_iterator(
        n - 1,
        points
            .windows(2)
            .zip(h.iter())
            .map(|(pair, h)| (pair[1].y - pair[0].y) / h),
    );

    // unknowns are the n - 2 inner curvatures, row k belongs to point k + 1
    let m = n - 2;
    let lower = DVector::from_fn(m, |k, _| h[k]);
    let diag = DVector::from_fn(m, |k, _| 2.0 * (h[k] + h[k + 1]));
    let upper = DVector::from_fn(m, |k, _| h[k + 1]);
    let rhs = DVector::from_fn(m, |k, _| 6.0 * (slopes[k + 1] - slopes[k]));

    let inner = solve_tridiagonal(&lower, &diag, &upper, &rhs);

    let mut result = Vec::with_capacity(n);
    result.push(0.0);
    result.extend(inner.iter());
    result.push(0.0);
    result
}

/// Thomas algorithm, `lower[0]` and `upper[m - 1]` are ignored
fn solve_tridiagonal(
    lower: &DVector<f64>,
    diag: &DVector<f64>,
    upper: &DVector<f64>,
    rhs: &DVector<f64>,
) -> DVector<f64> {
    let m = diag.len();
    let mut c_prime = DVector::<f64>::zeros(m);
    let mut d_prime = DVector::<f64>::zeros(m);

    // Forward sweep
    c_prime[0] = upper[0] / diag[0];
    d_prime[0] = rhs[0] / diag[0];

    for k in 1..m {
        let denom = diag[k] - lower[k] * c_prime[k - 1];
        c_prime[k] = upper[k] / denom;
        d_prime[k] = (rhs[k] - lower[k] * d_prime[k - 1]) / denom;
    }

    // Back substitution
    let mut x = DVector::<f64>::zeros(m);
    x[m - 1] = d_prime[m - 1];
    for k in (0..m - 1).rev() {
        x[k] = d_prime[k] - c_prime[k] * x[k + 1];
    }

    x
}

/// Natural cubic spline through points with strictly increasing x
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalSpline;

impl NaturalSpline {
    pub fn new() -> Self {
        Self
    }

    /// Sample the spline at `num_points` equidistant x values from the first
    /// to the last point
    pub fn sample_polygon(&self, points: &[Point], num_points: usize) -> Vec<Point> {
        if points.len() < 2 {
            return Vec::new();
        }
        sample_curve(points, &curvatures(points), num_points)
    }
}

/// Sample the piecewise cubic given by `points` and the curvatures at them
pub(crate) fn sample_curve(points: &[Point], m: &[f64], num_points: usize) -> Vec<Point> {
    let n = points.len();
    if n < 2 || num_points < 2 || m.len() != n {
        return Vec::new();
    }

    let first = points[0];
    let last = points[n - 1];
    let step = (last.x - first.x) / (num_points - 1) as f64;

    let mut polygon = Vec::with_capacity(num_points);
    let mut interval = 0;
    let mut coeffs = coefficients(&points[0], m[0], &points[1], m[1]);

    for k in 0..num_points - 1 {
        let x = first.x + k as f64 * step;
        if interval < n - 2 && x >= points[interval + 1].x {
            while interval < n - 2 && x >= points[interval + 1].x {
                interval += 1;
            }
            coeffs = coefficients(
                &points[interval],
                m[interval],
                &points[interval + 1],
                m[interval + 1],
            );
        }

        let y = coeffs.value_at(x - points[interval].x);
        polygon.push(Point::new(x, y));
    }
    polygon.push(last);

    polygon
}

/// One exact Bezier segment per interval of the piecewise cubic
pub(crate) fn hermite_path(points: &[Point], m: &[f64]) -> BezierCurve {
    if points.len() < 2 || m.len() != points.len() {
        return BezierCurve::default();
    }

    let segments = points
        .windows(2)
        .zip(m.windows(2))
        .map(|(p, m)| {
            let coeffs = coefficients(&p[0], m[0], &p[1], m[1]);
            let dx = p[1].x - p[0].x;
            BezierSegment::from_hermite(p[0], coeffs.c, p[1], coeffs.slope_at(dx))
        })
        .collect();

    BezierCurve::new(segments)
}

impl SplineInterpolator for NaturalSpline {
    fn path(&self, points: &[Point]) -> BezierCurve {
        if points.len() < 2 {
            return BezierCurve::default();
        }
        hermite_path(points, &curvatures(points))
    }

    fn locality(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points;
    use approx::assert_relative_eq;

    #[test]
    fn test_curvatures() {
        // single inner point: 4 * M1 = 6 * (-1 - 1)
        assert_eq!(curvatures(&points![(0, 0), (1, 1), (2, 0)]), vec![0.0, -3.0, 0.0]);

        // collinear points have no curvature
        for m in curvatures(&points![(0, 1), (1, 3), (3, 7), (4, 9), (7, 15)]) {
            assert_relative_eq!(m, 0.0, epsilon = 1e-12);
        }

        assert!(curvatures(&points![(0, 0)]).is_empty());
        assert_eq!(curvatures(&points![(0, 0), (1, 5)]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_curvatures_solve_the_system() {
        let points = points![(0, 0), (1, 2), (2.5, -1), (3, 0.5), (5, 3), (6, 0)];
        let m = curvatures(&points);
        assert_eq!(m.len(), points.len());
        assert_eq!(m[0], 0.0);
        assert_eq!(m[5], 0.0);

        for i in 1..points.len() - 1 {
            let h0 = points[i].x - points[i - 1].x;
            let h1 = points[i + 1].x - points[i].x;
            let s0 = (points[i].y - points[i - 1].y) / h0;
            let s1 = (points[i + 1].y - points[i].y) / h1;

            let lhs = h0 * m[i - 1] + 2.0 * (h0 + h1) * m[i] + h1 * m[i + 1];
            assert_relative_eq!(lhs, 6.0 * (s1 - s0), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_coefficients() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, -1.0);
        let coeffs = coefficients(&p1, 0.5, &p2, -1.5);

        assert_relative_eq!(coeffs.a, -2.0 / 12.0);
        assert_relative_eq!(coeffs.b, 0.25);
        assert_relative_eq!(coeffs.c, -1.5 - (-1.5 + 1.0) * 2.0 / 6.0);
        assert_eq!(coeffs.d, 2.0);

        // the polynomial meets both points and has the given curvatures
        assert_relative_eq!(coeffs.value_at(0.0), p1.y);
        assert_relative_eq!(coeffs.value_at(2.0), p2.y, epsilon = 1e-12);
        assert_relative_eq!(2.0 * coeffs.b, 0.5);
        assert_relative_eq!(6.0 * coeffs.a * 2.0 + 2.0 * coeffs.b, -1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_path_is_c1() {
        let points = points![(0, 0), (1, 2), (2.5, -1), (3, 0.5), (5, 3), (6, 0)];
        let spline = NaturalSpline::new();
        let path = spline.path(&points);

        assert_eq!(path.len(), points.len() - 1);
        assert!(path.is_connected());
        for (segment, pair) in path.segments.iter().zip(points.windows(2)) {
            assert_eq!(segment.start(), pair[0]);
            assert_eq!(segment.end(), pair[1]);
        }

        // incoming and outgoing slopes agree at inner points
        for pair in path.segments.windows(2) {
            let incoming = pair[0].points[3] - pair[0].points[2];
            let outgoing = pair[1].points[1] - pair[1].points[0];
            assert_relative_eq!(incoming.y / incoming.x, outgoing.y / outgoing.x, epsilon = 1e-9);
        }

        assert!(spline.path(&points![(0, 0)]).is_empty());
        assert_eq!(spline.locality(), 0);
    }

    #[test]
    fn test_sample_polygon() {
        let points = points![(0, 0), (1, 2), (2, 0), (4, 4)];
        let spline = NaturalSpline::new();

        let polygon = spline.sample_polygon(&points, 9);
        assert_eq!(polygon.len(), 9);
        assert_eq!(polygon[0], points[0]);
        assert_eq!(polygon[8], points[3]);

        // samples falling on knots reproduce the points
        assert_relative_eq!(polygon[2].x, 1.0);
        assert_relative_eq!(polygon[2].y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(polygon[4].x, 2.0);
        assert_relative_eq!(polygon[4].y, 0.0, epsilon = 1e-12);

        // and agree with the bezier path
        let path = spline.path(&points);
        let halfway = path.segments[0].point_at(0.5);
        assert_relative_eq!(polygon[1].x, halfway.x, epsilon = 1e-12);
        assert_relative_eq!(polygon[1].y, halfway.y, epsilon = 1e-12);

        assert!(spline.sample_polygon(&points, 1).is_empty());
        assert!(spline.sample_polygon(&points![(0, 0)], 10).is_empty());
    }
}
