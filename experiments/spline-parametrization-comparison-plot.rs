// draw the pleasing spline of the same noisy samples under every
// parametrization, the differences show on unevenly spaced points

use bezier_spline::{Parametrization, PleasingSpline, Point, SplineInterpolator};
use log::info;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

const OUTPUT: &str = "spline-parametrization-comparison.svg";
const SEED: u64 = 7;
const NUM_POINTS: usize = 14;
const TOLERANCE: f64 = 0.05;

fn noisy_samples(rng: &mut StdRng) -> Result<Vec<Point>, rand_distr::NormalError> {
    let noise = Normal::new(0.0, 1.5)?;
    let mut x = 0.0;

    Ok((0..NUM_POINTS)
        .map(|_| {
            // clusters and gaps make the parametrizations disagree
            x += if rng.gen_bool(0.3) {
                rng.gen_range(6.0..12.0)
            } else {
                rng.gen_range(0.5..2.0)
            };
            Point::new(x, (x / 8.0).sin() * 10.0 + noise.sample(&mut *rng))
        })
        .collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let points = noisy_samples(&mut rng)?;

    let parametrizations = [
        ("x", Parametrization::X),
        ("uniform", Parametrization::Uniform),
        ("centripetal", Parametrization::Centripetal),
        ("chordal", Parametrization::Chordal),
        ("manhattan", Parametrization::Manhattan),
    ];

    let polygons: Vec<(&str, Vec<Point>)> = parametrizations
        .iter()
        .map(|(name, parametrization)| {
            let spline = PleasingSpline::new().with_parametrization(parametrization.clone());
            let polygon = spline.polygon(&points, TOLERANCE);
            info!("{}: {} polyline points", name, polygon.len());
            (*name, polygon)
        })
        .collect();

    let all = polygons.iter().flat_map(|(_, polygon)| polygon.iter());
    let (x_min, x_max, y_min, y_max) = all.fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(x0, x1, y0, y1), p| (x0.min(p.x), x1.max(p.x), y0.min(p.y), y1.max(p.y)),
    );

    let root = SVGBackend::new(OUTPUT, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Pleasing spline by parametrization", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((x_min - 1.0)..(x_max + 1.0), (y_min - 1.0)..(y_max + 1.0))?;

    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    for (i, (name, polygon)) in polygons.iter().enumerate() {
        let color = Palette99::pick(i).mix(0.9);
        chart
            .draw_series(LineSeries::new(
                polygon.iter().map(|p| (p.x, p.y)),
                color.stroke_width(2),
            ))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.x, p.y), 4, BLACK.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("plot written to {}", OUTPUT);

    Ok(())
}
