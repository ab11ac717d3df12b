// Module definitions
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use config::{SplineKind, SplineOptions};
pub use data::curve::BezierCurve;
pub use data::line::Line;
pub use data::point::Point;
pub use data::segment::BezierSegment;
pub use data::tension::Tension;
pub use error::{BezierError, BezierResult};
pub use modules::flatten::BezierFlattener;
pub use modules::parametrization::{Parametrization, ParametrizationType, ValueIncrement};
pub use modules::spline::{
    AkimaSpline, CardinalSpline, NaturalSpline, PleasingSpline, SmoothingSpline,
    SplineInterpolator,
};
