//! Declarative spline configuration
//!
//! [`SplineOptions`] names an engine and its settings as plain data, so a
//! curve setup can be read from JSON and turned into a ready engine.
//!
//! ```rust
//! use bezier_spline::{points, SplineOptions};
//!
//! let options = SplineOptions::from_json_str(
//!     r#"{ "kind": "pleasing", "parametrization": "centripetal", "tolerance": 0.1 }"#,
//! )
//! .unwrap();
//!
//! let points = points![(0, 0), (1, 2), (2, 0), (3, 2)];
//! let polygon = options.interpolator().polygon(&points, options.tolerance);
//! assert_eq!(polygon.first(), points.first());
//! ```

use crate::constants::DEFAULT_TOLERANCE;
use crate::error::{BezierError, BezierResult};
use crate::modules::flatten::BezierFlattener;
use crate::modules::parametrization::{Parametrization, ParametrizationType};
use crate::modules::spline::{
    AkimaSpline, CardinalSpline, NaturalSpline, PleasingSpline, SmoothingSpline,
    SplineInterpolator,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// The spline engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplineKind {
    #[default]
    Cardinal,
    Pleasing,
    Natural,
    Akima,
    Smoothing,
}

/// Engine selection and settings, every field is optional in JSON
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineOptions {
    pub kind: SplineKind,
    /// Only used by the cardinal and pleasing splines
    pub parametrization: ParametrizationType,
    /// Only used by the cardinal and pleasing splines
    pub closed: bool,
    /// Smoothing factor, only used by the smoothing spline
    pub lambda: f64,
    pub tolerance: f64,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            kind: SplineKind::default(),
            parametrization: ParametrizationType::default(),
            closed: false,
            lambda: 0.0,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SplineOptions {
    /// Parse and validate options from JSON
    pub fn from_json_str(json: &str) -> BezierResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        debug!("loaded spline options: {:?}", options);
        Ok(options)
    }

    pub fn to_json_string(&self) -> BezierResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> BezierResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(BezierError::InvalidConfig(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(BezierError::InvalidConfig(format!(
                "lambda must be finite and non-negative, got {}",
                self.lambda
            )));
        }
        if self.parametrization == ParametrizationType::Custom {
            return Err(BezierError::InvalidConfig(
                "a custom parametrization cannot be configured without its metric".to_string(),
            ));
        }
        if self.closed
            && matches!(
                self.kind,
                SplineKind::Natural | SplineKind::Akima | SplineKind::Smoothing
            )
        {
            debug!("{:?} splines are never closed, ignoring `closed`", self.kind);
        }

        Ok(())
    }

    /// The configured engine
    pub fn interpolator(&self) -> Box<dyn SplineInterpolator> {
        let parametrization = Parametrization::from(self.parametrization);

        match self.kind {
            SplineKind::Cardinal => Box::new(
                CardinalSpline::new()
                    .with_parametrization(parametrization)
                    .closing(self.closed),
            ),
            SplineKind::Pleasing => Box::new(
                PleasingSpline::new()
                    .with_parametrization(parametrization)
                    .closing(self.closed),
            ),
            SplineKind::Natural => Box::new(NaturalSpline::new()),
            SplineKind::Akima => Box::new(AkimaSpline::new()),
            SplineKind::Smoothing => Box::new(SmoothingSpline::new(self.lambda)),
        }
    }

    pub fn flattener(&self) -> BezierFlattener {
        BezierFlattener::new(self.tolerance)
    }
}
