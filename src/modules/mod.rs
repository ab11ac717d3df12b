pub mod flatten;
pub mod parametrization;
pub mod spline;
