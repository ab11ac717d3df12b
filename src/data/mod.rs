//! Core data structures: points, lines, cubic segments, paths and tensions.

pub mod curve;
pub mod line;
pub mod macros;
pub mod point;
pub mod segment;
pub mod tension;

pub use curve::BezierCurve;
pub use line::Line;
pub use point::Point;
pub use segment::BezierSegment;
pub use tension::Tension;
