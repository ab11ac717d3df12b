//! Cardinal spline with G1 continuity
//!
//! The curve passes through every control point. The tangent at a point is
//! the half chord between its neighbours, `0.5 * (p[i+1] - p[i-1])`, and each
//! segment scales the tangents at its ends by a pair of tensions derived from
//! the parametric distances of the four surrounding points.
//!
//! With `d13 = dist(p[i-1], p[i+1])`, `d23 = dist(p[i], p[i+1])` and
//! `d24 = dist(p[i], p[i+2])`:
//!
//! - if both `d13 / 3 < d23` and `d24 / 3 < d23` the tensions are `1/3`, or
//!   `2/3` on a side whose outer neighbour coincides with the segment end;
//! - otherwise they are `d23 / d13` and `d23 / d24`, swapped on the side where
//!   the first test held, which keeps them below `1/3`.
//!
//! At the ends of an open curve the end points stand in for the missing
//! neighbours, a closed curve wraps around.

use crate::constants::MIN_CARDINAL_POINTS;
use crate::data::{BezierCurve, Line, Point, Tension};
use crate::modules::parametrization::Parametrization;
use crate::modules::spline::store::{ControlPointsStore, PathStore, SplineStore};
use crate::modules::spline::SplineInterpolator;
use crate::with_value_increment;
use log::{debug, warn};

/// Cardinal spline interpolating a point sequence, open or closed
#[derive(Debug, Clone, Default)]
pub struct CardinalSpline {
    parametrization: Parametrization,
    closed: bool,
}

impl CardinalSpline {
    /// Open spline with chordal parametrization
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parametrization(mut self, parametrization: Parametrization) -> Self {
        self.parametrization = parametrization;
        self
    }

    /// Set whether the spline wraps from the last point back to the first
    pub fn closing(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn set_parametrization(&mut self, parametrization: Parametrization) {
        self.parametrization = parametrization;
    }

    pub fn set_closing(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub fn parametrization(&self) -> &Parametrization {
        &self.parametrization
    }

    pub fn is_closing(&self) -> bool {
        self.closed
    }

    /// One tension per segment: `points.len()` of them for a closed spline,
    /// `points.len() - 1` for an open one, none for fewer than 3 points
    pub fn tensions(&self, points: &[Point]) -> Vec<Tension> {
        if points.len() < MIN_CARDINAL_POINTS {
            debug!("no tensions for {} points", points.len());
            return Vec::new();
        }

        with_value_increment!(&self.parametrization, |increment| {
            tensions_with(points, self.closed, increment)
        })
    }

    fn spline_store<S: SplineStore>(&self, points: &[Point]) -> S {
        if points.len() < MIN_CARDINAL_POINTS {
            debug!("cannot interpolate {} points", points.len());
            return S::default();
        }

        let tensions = self.tensions(points);
        cardinal_store(points, self.closed, &tensions)
    }
}

impl SplineInterpolator for CardinalSpline {
    fn path(&self, points: &[Point]) -> BezierCurve {
        let mut store: PathStore = self.spline_store(points);
        if self.closed {
            store.path.close_subpath();
        }

        store.path
    }

    fn bezier_control_lines(&self, points: &[Point]) -> Vec<Line> {
        let store: ControlPointsStore = self.spline_store(points);
        store.control_points
    }

    fn locality(&self) -> usize {
        2
    }
}

/// `numerator / denominator`, where a zero denominator (zero length chords on
/// both sides) collapses the tangent handle instead of producing NaN
#[inline]
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Tension of the segment `p2`-`p3`, given its outer neighbours `p1` and `p4`
pub(crate) fn tension(
    d13: f64,
    d23: f64,
    d24: f64,
    p1: &Point,
    p2: &Point,
    p3: &Point,
    p4: &Point,
) -> Tension {
    let b1 = (d13 / 3.0) < d23;
    let b2 = (d24 / 3.0) < d23;

    if b1 && b2 {
        let t1 = if p1 != p2 { 1.0 / 3.0 } else { 2.0 / 3.0 };
        let t2 = if p3 != p4 { 1.0 / 3.0 } else { 2.0 / 3.0 };
        Tension::new(t1, t2)
    } else {
        let t1 = ratio(d23, if b1 { d24 } else { d13 });
        let t2 = ratio(d23, if b2 { d13 } else { d24 });
        Tension::new(t1, t2)
    }
}

/// Tensions of all segments, `points` must hold at least 3 points
pub(crate) fn tensions_with<F>(points: &[Point], closed: bool, increment: F) -> Vec<Tension>
where
    F: Fn(&Point, &Point) -> f64,
{
    let p = points;
    let size = p.len();
    let mut tensions = Vec::with_capacity(if closed { size } else { size - 1 });

    let p0 = if closed { p[size - 1] } else { p[0] };
    let mut d13 = increment(&p[0], &p[2]);

    tensions.push(tension(
        increment(&p0, &p[1]),
        increment(&p[0], &p[1]),
        d13,
        &p0,
        &p[0],
        &p[1],
        &p[2],
    ));

    for i in 1..size - 2 {
        let d23 = increment(&p[i], &p[i + 1]);
        let d24 = increment(&p[i], &p[i + 2]);

        tensions.push(tension(d13, d23, d24, &p[i - 1], &p[i], &p[i + 1], &p[i + 2]));

        d13 = d24;
    }

    let pn = if closed { p[0] } else { p[size - 1] };
    let d24 = increment(&p[size - 2], &pn);

    tensions.push(tension(
        d13,
        increment(&p[size - 2], &p[size - 1]),
        d24,
        &p[size - 3],
        &p[size - 2],
        &p[size - 1],
        &pn,
    ));

    if closed {
        let d34 = increment(&p[size - 1], &p[0]);
        let d35 = increment(&p[size - 1], &p[1]);

        tensions.push(tension(
            d24,
            d34,
            d35,
            &p[size - 2],
            &p[size - 1],
            &p[0],
            &p[1],
        ));
    }

    tensions
}

/// Emit the cubic segments for precomputed tensions into a store
///
/// Returns an empty store for fewer than 3 points or when the number of
/// tensions does not match the number of segments.
pub(crate) fn cardinal_store<S: SplineStore>(
    points: &[Point],
    closed: bool,
    tensions: &[Tension],
) -> S {
    let p = points;
    let t = tensions;
    let size = p.len();
    if size < MIN_CARDINAL_POINTS {
        return S::default();
    }

    let num_tensions = if closed { size } else { size - 1 };
    if t.len() != num_tensions {
        warn!(
            "expected {} tensions for {} points, got {}",
            num_tensions,
            size,
            t.len()
        );
        return S::default();
    }

    let mut store = S::default();
    store.init(num_tensions);
    store.start(p[0]);

    let p0 = if closed { p[size - 1] } else { p[0] };
    let mut vec1 = (p[1] - p0) * 0.5;

    for i in 0..size - 2 {
        let vec2 = (p[i + 2] - p[i]) * 0.5;
        store.add_cubic(p[i] + vec1 * t[i].t1, p[i + 1] - vec2 * t[i].t2, p[i + 1]);

        vec1 = vec2;
    }

    let pn = if closed { p[0] } else { p[size - 1] };
    let vec2 = (pn - p[size - 2]) * 0.5;

    store.add_cubic(
        p[size - 2] + vec1 * t[size - 2].t1,
        p[size - 1] - vec2 * t[size - 2].t2,
        p[size - 1],
    );

    if closed {
        let vec3 = (p[1] - p[size - 1]) * 0.5;
        store.add_cubic(
            p[size - 1] + vec2 * t[size - 1].t1,
            p[0] - vec3 * t[size - 1].t2,
            p[0],
        );
    }

    store
}
