use bezier_spline::{
    cubic, points, AkimaSpline, BezierFlattener, CardinalSpline, NaturalSpline, Parametrization,
    PleasingSpline, Point, SmoothingSpline, SplineInterpolator, SplineKind, SplineOptions,
};

#[test]
fn test_complete_workflow() {
    // Sample points along a known curve
    let original = cubic!([(50, 200), (100, 50), (200, 50), (250, 200)]);
    let points = original.sample_points(10);

    // Interpolate them and flatten the result for drawing
    let spline = CardinalSpline::new().with_parametrization(Parametrization::Centripetal);
    let path = spline.path(&points);
    assert_eq!(path.len(), points.len() - 1);
    assert!(path.is_connected());

    let polygon = BezierFlattener::new(0.1).flatten_curve(&path);
    assert_eq!(polygon.first(), points.first());
    assert_eq!(polygon.last(), points.last());

    // every sample is a vertex of the polyline
    for p in &points {
        assert!(polygon.contains(p));
    }

    // the interpolation stays close to the sampled curve
    for segment in &path.segments {
        for p in segment.sample_points(5) {
            let nearest = original
                .sample_points(1001)
                .iter()
                .map(|q| q.distance(&p))
                .fold(f64::INFINITY, f64::min);
            assert!(nearest < 2.0, "{:?} is {} away from the curve", p, nearest);
        }
    }
}

#[test]
fn test_closed_workflow() {
    let square = points![(0, 0), (10, 0), (10, 10), (0, 10)];
    let spline = PleasingSpline::new().closing(true);

    let path = spline.path(&square);
    assert_eq!(path.len(), 4);
    assert!(path.is_closed());

    let polygon = spline.polygon(&square, 0.05);
    assert_eq!(polygon.first(), Some(&square[0]));
    assert_eq!(polygon.last(), Some(&square[0]));

    // symmetric input gives a symmetric loop around the center
    let center = Point::new(5.0, 5.0);
    let radii: Vec<f64> = square.iter().map(|p| p.distance(&center)).collect();
    for p in &polygon {
        let r = p.distance(&center);
        assert!(r > 4.0 && r <= radii[0] + 1e-9, "radius {}", r);
    }
}

#[test]
fn test_configured_workflow() {
    let points = points![(0, 0), (1, 3), (2, 1), (4, 4), (5, 0), (7, 2)];

    for kind in ["cardinal", "pleasing", "natural", "akima", "smoothing"] {
        let json = format!(r#"{{"kind": "{}", "tolerance": 0.01}}"#, kind);
        let options = SplineOptions::from_json_str(&json).unwrap();

        let path = options.interpolator().path(&points);
        assert_eq!(path.len(), points.len() - 1, "{}", kind);

        let polygon = options.flattener().flatten_curve(&path);
        assert!(polygon.len() > points.len(), "{}", kind);
        assert_eq!(polygon.first(), points.first());
        assert_eq!(polygon.last(), points.last());
    }

    let options = SplineOptions::from_json_str(r#"{"kind": "natural"}"#).unwrap();
    assert_eq!(options.kind, SplineKind::Natural);
    assert_eq!(
        options.interpolator().path(&points),
        NaturalSpline::new().path(&points)
    );
    assert!(SplineOptions::from_json_str(r#"{"tolerance": -0.5}"#).is_err());
}

#[test]
fn test_custom_parametrization() {
    let points = points![(0, 0), (1, 2), (2, 0), (3, 2), (4, 0)];

    // a constant metric behaves like the uniform parametrization
    let constant = CardinalSpline::new()
        .with_parametrization(Parametrization::custom(|_: &Point, _: &Point| 2.5));
    let uniform = CardinalSpline::new().with_parametrization(Parametrization::Uniform);

    assert_eq!(constant.tensions(&points), uniform.tensions(&points));
    assert_eq!(constant.path(&points), uniform.path(&points));
}

#[test]
fn test_locality() {
    let mut points = points![(0, 0), (1, 1), (2, 0), (3, 1), (4, 0), (5, 1), (6, 0), (7, 1), (8, 0)];
    let engines: Vec<Box<dyn SplineInterpolator>> = vec![
        Box::new(CardinalSpline::new()),
        Box::new(PleasingSpline::new()),
        Box::new(AkimaSpline::new()),
    ];

    let before: Vec<_> = engines.iter().map(|e| e.path(&points)).collect();
    points[8].y = 5.0;

    for (engine, before) in engines.iter().zip(before) {
        assert_eq!(engine.locality(), 2);
        let after = engine.path(&points);

        // segments further than the locality from the moved point keep their shape
        let unaffected = points.len() - 1 - engine.locality() - 1;
        assert_eq!(before.segments[..unaffected], after.segments[..unaffected]);
        assert_ne!(before.segments.last(), after.segments.last());
    }

    assert_eq!(NaturalSpline::new().locality(), 0);
}

#[test]
fn test_duplicate_points_workflow() {
    let points = points![(0, 0), (0, 0), (1, 1), (2, 0)];

    for closed in [false, true] {
        let spline = CardinalSpline::new().closing(closed);
        let polygon = spline.polygon(&points, 0.1);

        assert_eq!(polygon.first(), Some(&points[0]));
        assert!(polygon.len() > points.len());
        assert!(polygon.windows(2).all(|pair| pair[0] != pair[1]));
    }
}

#[test]
fn test_smoothing_workflow() {
    let mut points = points![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6)];
    points[3].y = 6.0;

    // smoothing flattens the outlier without touching the point count
    let rough = NaturalSpline::new().sample_polygon(&points, 61);
    let smooth = SmoothingSpline::new(10.0).sample_polygon(&points, 61);
    assert_eq!(rough.len(), smooth.len());

    let peak = |polygon: &[Point]| polygon.iter().map(|p| p.y - p.x).fold(f64::MIN, f64::max);
    assert!(peak(&smooth[..]) < peak(&rough[..]));

    let polygon = SmoothingSpline::new(10.0).polygon(&points, 0.01);
    assert!(polygon.windows(2).all(|pair| pair[0] != pair[1]));
}
