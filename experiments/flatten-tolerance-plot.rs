// number of polyline points produced by the flattener against the
// tolerance, for every spline engine on the same samples

use bezier_spline::{Point, SplineKind, SplineOptions};
use log::info;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const OUTPUT: &str = "flatten-tolerance.svg";
const SEED: u64 = 42;
const NUM_POINTS: usize = 20;
const NUM_TOLERANCES: usize = 40;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut x = 0.0;
    let points: Vec<Point> = (0..NUM_POINTS)
        .map(|_| {
            x += rng.gen_range(1.0..10.0);
            Point::new(x, rng.gen_range(-20.0..20.0))
        })
        .collect();

    // log spaced from 1e-3 to 10
    let tolerances: Vec<f64> = (0..NUM_TOLERANCES)
        .map(|i| 10f64.powf(-3.0 + 4.0 * i as f64 / (NUM_TOLERANCES - 1) as f64))
        .collect();

    let kinds = [
        ("cardinal", SplineKind::Cardinal),
        ("pleasing", SplineKind::Pleasing),
        ("natural", SplineKind::Natural),
        ("akima", SplineKind::Akima),
        ("smoothing", SplineKind::Smoothing),
    ];

    let mut series = Vec::new();
    for (name, kind) in kinds {
        let options = SplineOptions {
            kind,
            lambda: 5.0,
            ..SplineOptions::default()
        };
        options.validate()?;

        let path = options.interpolator().path(&points);
        let counts: Vec<(f64, f64)> = tolerances
            .iter()
            .map(|&tolerance| {
                let flattener = SplineOptions {
                    tolerance,
                    ..options
                }
                .flattener();
                (tolerance, flattener.flatten_curve(&path).len() as f64)
            })
            .collect();

        info!(
            "{}: {} segments, {} to {} polyline points",
            name,
            path.len(),
            counts.last().map_or(0.0, |c| c.1),
            counts.first().map_or(0.0, |c| c.1)
        );
        series.push((name, counts));
    }

    let y_max = series
        .iter()
        .flat_map(|(_, counts)| counts.iter().map(|c| c.1))
        .fold(0.0, f64::max);

    let root = SVGBackend::new(OUTPUT, (1000, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Polyline size against flattening tolerance", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((1e-3f64..10.0).log_scale(), 0.0..(y_max * 1.05))?;

    chart
        .configure_mesh()
        .x_desc("tolerance")
        .y_desc("points")
        .draw()?;

    for (i, (name, counts)) in series.into_iter().enumerate() {
        let color = Palette99::pick(i).mix(0.9);
        chart
            .draw_series(LineSeries::new(counts, color.stroke_width(2)))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("plot written to {}", OUTPUT);

    Ok(())
}
