//! Numeric constants shared by the spline engines and the flattener.

/// Tolerance used by `BezierFlattener::default()`, in the units of the input points.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Factor turning a squared tolerance into the Willcocks flatness threshold.
pub const FLATNESS_SCALE: f64 = 16.0;

/// Subdivision depth at which a piece is accepted whatever its flatness.
///
/// 32 halvings shrink the parameter interval below 1e-9, the limit is only
/// reached when the tolerance is tiny compared to the curve size.
pub const MAX_SUBDIVISION_DEPTH: u32 = 32;

/// Minimum number of points the cardinal and pleasing engines interpolate.
pub const MIN_CARDINAL_POINTS: usize = 3;

/// Sum of Akima weights below which the slope falls back to the secant mean.
pub const AKIMA_WEIGHT_EPSILON: f64 = 1e-12;
