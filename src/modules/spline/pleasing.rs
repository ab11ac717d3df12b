//! "Pleasing" spline: a cardinal spline computed in a single forward pass
//!
//! The tension and the tangent half chords of every segment are evaluated on
//! the fly while walking the points, instead of being taken from a
//! precomputed tension array. The geometry rules are those of the
//! [cardinal spline](super::cardinal).

use crate::constants::MIN_CARDINAL_POINTS;
use crate::data::{BezierCurve, Line, Point, Tension};
use crate::modules::parametrization::Parametrization;
use crate::modules::spline::cardinal::{tension, CardinalSpline};
use crate::modules::spline::store::{ControlPointsStore, PathStore, SplineStore};
use crate::modules::spline::SplineInterpolator;
use crate::with_value_increment;

/// Pleasing spline interpolating a point sequence, open or closed
#[derive(Debug, Clone, Default)]
pub struct PleasingSpline {
    cardinal: CardinalSpline,
}

impl PleasingSpline {
    /// Open spline with chordal parametrization
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parametrization(mut self, parametrization: Parametrization) -> Self {
        self.cardinal.set_parametrization(parametrization);
        self
    }

    pub fn closing(mut self, closed: bool) -> Self {
        self.cardinal.set_closing(closed);
        self
    }

    pub fn set_parametrization(&mut self, parametrization: Parametrization) {
        self.cardinal.set_parametrization(parametrization);
    }

    pub fn set_closing(&mut self, closed: bool) {
        self.cardinal.set_closing(closed);
    }

    pub fn parametrization(&self) -> &Parametrization {
        self.cardinal.parametrization()
    }

    pub fn is_closing(&self) -> bool {
        self.cardinal.is_closing()
    }

    /// Same tensions as the cardinal spline with identical settings
    pub fn tensions(&self, points: &[Point]) -> Vec<Tension> {
        self.cardinal.tensions(points)
    }

    fn spline_store<S: SplineStore>(&self, points: &[Point]) -> S {
        let closed = self.is_closing();
        with_value_increment!(self.parametrization(), |increment| {
            pleasing_store(points, closed, increment)
        })
    }
}

impl SplineInterpolator for PleasingSpline {
    fn path(&self, points: &[Point]) -> BezierCurve {
        if points.len() < MIN_CARDINAL_POINTS {
            return self.cardinal.path(points);
        }

        let mut store: PathStore = self.spline_store(points);
        if self.is_closing() {
            store.path.close_subpath();
        }

        store.path
    }

    fn bezier_control_lines(&self, points: &[Point]) -> Vec<Line> {
        if points.len() < MIN_CARDINAL_POINTS {
            return self.cardinal.bezier_control_lines(points);
        }

        let store: ControlPointsStore = self.spline_store(points);
        store.control_points
    }

    fn locality(&self) -> usize {
        2
    }
}

/// Single pass traversal, `points` must hold at least 3 points
fn pleasing_store<S, F>(points: &[Point], closed: bool, increment: F) -> S
where
    S: SplineStore,
    F: Fn(&Point, &Point) -> f64,
{
    let p = points;
    let size = p.len();

    let mut store = S::default();
    store.init(if closed { size } else { size - 1 });
    store.start(p[0]);

    let p0 = if closed { p[size - 1] } else { p[0] };
    let mut d13 = increment(&p[0], &p[2]);

    let t0 = tension(
        increment(&p0, &p[1]),
        increment(&p[0], &p[1]),
        d13,
        &p0,
        &p[0],
        &p[1],
        &p[2],
    );

    let vec0 = (p[1] - p0) * 0.5;
    let mut vec1 = (p[2] - p[0]) * 0.5;

    store.add_cubic(p[0] + vec0 * t0.t1, p[1] - vec1 * t0.t2, p[1]);

    for i in 1..size - 2 {
        let d23 = increment(&p[i], &p[i + 1]);
        let d24 = increment(&p[i], &p[i + 2]);
        let vec2 = (p[i + 2] - p[i]) * 0.5;

        let t = tension(d13, d23, d24, &p[i - 1], &p[i], &p[i + 1], &p[i + 2]);
        store.add_cubic(p[i] + vec1 * t.t1, p[i + 1] - vec2 * t.t2, p[i + 1]);

        d13 = d24;
        vec1 = vec2;
    }

    let pn = if closed { p[0] } else { p[size - 1] };
    let d24 = increment(&p[size - 2], &pn);

    let tn = tension(
        d13,
        increment(&p[size - 2], &p[size - 1]),
        d24,
        &p[size - 3],
        &p[size - 2],
        &p[size - 1],
        &pn,
    );

    let vec2 = (pn - p[size - 2]) * 0.5;
    store.add_cubic(
        p[size - 2] + vec1 * tn.t1,
        p[size - 1] - vec2 * tn.t2,
        p[size - 1],
    );

    if closed {
        let d34 = increment(&p[size - 1], &p[0]);
        let d35 = increment(&p[size - 1], &p[1]);
        let vec3 = (p[1] - p[size - 1]) * 0.5;

        let tw = tension(d24, d34, d35, &p[size - 2], &p[size - 1], &p[0], &p[1]);
        store.add_cubic(p[size - 1] + vec2 * tw.t1, p[0] - vec3 * tw.t2, p[0]);
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rand_distr::{Distribution, Normal};

    fn noisy_points(seed: u64, count: usize) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = Normal::new(0.0, 2.0).unwrap();
        let mut x = 0.0;

        (0..count)
            .map(|i| {
                x += rng.gen_range(0.1..8.0);
                Point::new(x, (i as f64).sin() * 10.0 + noise.sample(&mut rng))
            })
            .collect()
    }

    fn parametrizations() -> Vec<Parametrization> {
        vec![
            Parametrization::X,
            Parametrization::Uniform,
            Parametrization::Centripetal,
            Parametrization::Chordal,
            Parametrization::Manhattan,
            Parametrization::custom(|p1: &Point, p2: &Point| (p2.y - p1.y).abs() + 1.0),
        ]
    }

    #[test]
    fn test_matches_cardinal_geometry() {
        // both engines share the tension and tangent rules, only the
        // evaluation order differs
        for seed in 0..5 {
            let points = noisy_points(seed, 12);
            for parametrization in parametrizations() {
                for closed in [false, true] {
                    let cardinal = CardinalSpline::new()
                        .with_parametrization(parametrization.clone())
                        .closing(closed);
                    let pleasing = PleasingSpline::new()
                        .with_parametrization(parametrization.clone())
                        .closing(closed);

                    let expected = cardinal.path(&points);
                    let actual = pleasing.path(&points);
                    assert_eq!(actual.len(), expected.len());
                    assert_eq!(actual.is_closed(), expected.is_closed());

                    for (a, e) in actual.segments.iter().zip(expected.segments.iter()) {
                        for (pa, pe) in a.points.iter().zip(e.points.iter()) {
                            assert_relative_eq!(pa.x, pe.x, epsilon = 1e-9);
                            assert_relative_eq!(pa.y, pe.y, epsilon = 1e-9);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_segment_counts() {
        let points = noisy_points(3, 9);

        let open = PleasingSpline::new().with_parametrization(Parametrization::Centripetal);
        let path = open.path(&points);
        assert_eq!(path.len(), 8);
        assert!(path.is_connected());
        assert_eq!(open.tensions(&points).len(), 8);

        let closed = open.closing(true);
        let path = closed.path(&points);
        assert_eq!(path.len(), 9);
        assert!(path.is_connected());
        assert!(path.is_closed());
        assert_eq!(path.end_point(), Some(points[0]));
        assert_eq!(closed.tensions(&points).len(), 9);
    }

    #[test]
    fn test_control_lines_match_path() {
        let points = points![(0, 0), (1, 2), (2, 0), (3, 2), (5, 5)];
        for closed in [false, true] {
            let spline = PleasingSpline::new().closing(closed);
            let path = spline.path(&points);
            let lines = spline.bezier_control_lines(&points);

            assert_eq!(lines.len(), path.len());
            for (line, segment) in lines.iter().zip(path.segments.iter()) {
                assert_eq!((line.p1, line.p2), segment.control_points());
            }
        }
    }

    #[test]
    fn test_too_few_points_fall_back_to_cardinal() {
        let spline = PleasingSpline::new().closing(true);
        for points in [vec![], points![(0, 0)], points![(0, 0), (1, 1)]] {
            assert!(spline.path(&points).is_empty());
            assert!(spline.bezier_control_lines(&points).is_empty());
            assert!(spline.tensions(&points).is_empty());
        }
    }
}
