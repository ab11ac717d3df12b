//! Smoothing cubic spline
//!
//! Following D. S. G. Pollock, "Smoothing with Cubic Splines": the curve is the
//! cubic spline `S` with natural ends minimizing
//!
//! ```text
//! sum (y[i] - S(x[i]))^2 + lambda * integral S''(x)^2 dx
//! ```
//!
//! `lambda = 0` interpolates the points (the natural spline), a growing
//! `lambda` pulls the curve towards the least squares line.
//!
//! With the second differences `Q` and the integrated curvature matrix `R`
//! the curvatures `g` at the inner points solve the symmetric pentadiagonal
//! system `(R + lambda * Q'Q) g = Q'y`, and the smoothed values are
//! `y - lambda * Q g`. As for the natural spline, x must be strictly
//! increasing.

use crate::data::{BezierCurve, Point};
use crate::modules::spline::natural::{curvatures, hermite_path, sample_curve};
use crate::modules::spline::SplineInterpolator;
use log::debug;
use nalgebra::DVector;

/// Smoothed points and the curvatures of the spline at them
///
/// Fewer than 3 points are returned unchanged, as is any input for
/// `lambda = 0`.
pub fn smooth(points: &[Point], lambda: f64) -> (Vec<Point>, Vec<f64>) {
    let n = points.len();
    if n < 3 || lambda == 0.0 {
        return (points.to_vec(), curvatures(points));
    }
    if points.windows(2).any(|pair| pair[1].x <= pair[0].x) {
        debug!("smoothing spline points are not strictly increasing in x");
    }

    let h = DVector::from_iterator(n - 1, points.windows(2).map(|pair| pair[1].x - pair[0].x));

    // column k of Q holds qa, qb, qc in the rows k, k + 1, k + 2
    let m = n - 2;
    let qa = DVector::from_fn(m, |k, _| 1.0 / h[k]);
    let qc = DVector::from_fn(m, |k, _| 1.0 / h[k + 1]);
    let qb = -(&qa + &qc);

    let diag = DVector::from_fn(m, |k, _| {
        (h[k] + h[k + 1]) / 3.0 + lambda * (qa[k] * qa[k] + qb[k] * qb[k] + qc[k] * qc[k])
    });
    let first = DVector::from_fn(m, |k, _| {
        if k + 1 < m {
            h[k + 1] / 6.0 + lambda * (qb[k] * qa[k + 1] + qc[k] * qb[k + 1])
        } else {
            0.0
        }
    });
    let second = DVector::from_fn(m, |k, _| {
        if k + 2 < m {
            lambda * qc[k] * qa[k + 2]
        } else {
            0.0
        }
    });
    let rhs = DVector::from_fn(m, |k, _| {
        qa[k] * points[k].y + qb[k] * points[k + 1].y + qc[k] * points[k + 2].y
    });

    let inner = solve_pentadiagonal(&diag, &first, &second, &rhs);

    let mut smoothed = points.to_vec();
    for k in 0..m {
        let scaled = lambda * inner[k];
        smoothed[k].y -= scaled * qa[k];
        smoothed[k + 1].y -= scaled * qb[k];
        smoothed[k + 2].y -= scaled * qc[k];
    }

    let mut result = Vec::with_capacity(n);
    result.push(0.0);
    result.extend(inner.iter());
    result.push(0.0);

    (smoothed, result)
}

/// LDL' solve of a symmetric positive definite matrix with two off
/// diagonals, `first[k]` is the entry (k, k + 1) and `second[k]` the entry
/// (k, k + 2); entries past the matrix are ignored
fn solve_pentadiagonal(
    diag: &DVector<f64>,
    first: &DVector<f64>,
    second: &DVector<f64>,
    rhs: &DVector<f64>,
) -> DVector<f64> {
    let m = diag.len();
    let mut d = DVector::<f64>::zeros(m);
    // sub diagonals of L: l1[k] is (k, k - 1), l2[k] is (k, k - 2)
    let mut l1 = DVector::<f64>::zeros(m);
    let mut l2 = DVector::<f64>::zeros(m);

    // Factorization
    for k in 0..m {
        d[k] = diag[k];
        if k >= 2 {
            l2[k] = second[k - 2] / d[k - 2];
            d[k] -= l2[k] * l2[k] * d[k - 2];
        }
        if k >= 1 {
            let mut entry = first[k - 1];
            if k >= 2 {
                entry -= l2[k] * l1[k - 1] * d[k - 2];
            }
            l1[k] = entry / d[k - 1];
            d[k] -= l1[k] * l1[k] * d[k - 1];
        }
    }

    // Forward substitution
    let mut x = rhs.clone();
    for k in 1..m {
        x[k] -= l1[k] * x[k - 1];
        if k >= 2 {
            x[k] -= l2[k] * x[k - 2];
        }
    }
    for k in 0..m {
        x[k] /= d[k];
    }

    // Back substitution
    for k in (0..m).rev() {
        if k + 1 < m {
            x[k] -= l1[k + 1] * x[k + 1];
        }
        if k + 2 < m {
            x[k] -= l2[k + 2] * x[k + 2];
        }
    }

    x
}

/// Smoothing spline through points with strictly increasing x
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothingSpline {
    lambda: f64,
}

impl SmoothingSpline {
    /// Create a spline with the given smoothing factor, negative or NaN
    /// factors are clamped to 0
    pub fn new(lambda: f64) -> Self {
        Self {
            lambda: lambda.max(0.0),
        }
    }

    pub fn set_lambda(&mut self, lambda: f64) {
        *self = Self::new(lambda);
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Sample the spline at `num_points` equidistant x values from the first
    /// to the last point
    pub fn sample_polygon(&self, points: &[Point], num_points: usize) -> Vec<Point> {
        let (smoothed, m) = smooth(points, self.lambda);
        sample_curve(&smoothed, &m, num_points)
    }
}

impl SplineInterpolator for SmoothingSpline {
    fn path(&self, points: &[Point]) -> BezierCurve {
        let (smoothed, m) = smooth(points, self.lambda);
        hermite_path(&smoothed, &m)
    }

    fn locality(&self) -> usize {
        0
    }
}
