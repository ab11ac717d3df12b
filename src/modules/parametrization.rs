//! Parametrization strategies for spline interpolation
//!
//! A parametrization assigns a scalar "distance" to a pair of adjacent points.
//! The spline engines use it as a proxy of the parametric arc length between
//! the points when they derive the tension of a segment.
//!
//! | Type | Value increment |
//! | --- | --- |
//! | `X` | `|x2 - x1|` |
//! | `Uniform` | `1` |
//! | `Centripetal` | `sqrt(|p2 - p1|)` |
//! | `Chordal` | `|p2 - p1|` |
//! | `Manhattan` | `|x2 - x1| + |y2 - y1|` |
//! | `Custom` | delegated to a [`ValueIncrement`] object |
//!
//! # Example
//!
//! ```rust
//! use bezier_spline::{pt, Parametrization};
//!
//! let chordal = Parametrization::Chordal;
//! assert_eq!(chordal.value_increment(&pt!(0, 0), &pt!(3, 4)), 5.0);
//!
//! // a custom metric weighting the vertical distance twice
//! let custom = Parametrization::custom(|p1: &bezier_spline::Point, p2: &bezier_spline::Point| {
//!     (p2.x - p1.x).abs() + 2.0 * (p2.y - p1.y).abs()
//! });
//! assert_eq!(custom.value_increment(&pt!(0, 0), &pt!(3, 4)), 11.0);
//! ```

use crate::data::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Discriminant of the parametrization variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParametrizationType {
    X,
    Uniform,
    Centripetal,
    #[default]
    Chordal,
    Manhattan,
    Custom,
}

/// Capability of a user supplied parametrization
pub trait ValueIncrement: Send + Sync {
    /// Parametric distance between two adjacent points, never negative
    fn value_increment(&self, p1: &Point, p2: &Point) -> f64;
}

impl<F> ValueIncrement for F
where
    F: Fn(&Point, &Point) -> f64 + Send + Sync,
{
    fn value_increment(&self, p1: &Point, p2: &Point) -> f64 {
        self(p1, p2)
    }
}

#[inline]
pub fn value_increment_x(p1: &Point, p2: &Point) -> f64 {
    (p2.x - p1.x).abs()
}

#[inline]
pub fn value_increment_uniform(_p1: &Point, _p2: &Point) -> f64 {
    1.0
}

#[inline]
pub fn value_increment_centripetal(p1: &Point, p2: &Point) -> f64 {
    value_increment_chordal(p1, p2).sqrt()
}

#[inline]
pub fn value_increment_chordal(p1: &Point, p2: &Point) -> f64 {
    p1.distance(p2)
}

#[inline]
pub fn value_increment_manhattan(p1: &Point, p2: &Point) -> f64 {
    (p2.x - p1.x).abs() + (p2.y - p1.y).abs()
}

/// The parametrization used by a spline engine
#[derive(Clone, Default)]
pub enum Parametrization {
    X,
    Uniform,
    Centripetal,
    #[default]
    Chordal,
    Manhattan,
    Custom(Arc<dyn ValueIncrement>),
}

impl Parametrization {
    /// Wrap a user supplied metric
    pub fn custom(increment: impl ValueIncrement + 'static) -> Self {
        Self::Custom(Arc::new(increment))
    }

    pub fn kind(&self) -> ParametrizationType {
        match self {
            Self::X => ParametrizationType::X,
            Self::Uniform => ParametrizationType::Uniform,
            Self::Centripetal => ParametrizationType::Centripetal,
            Self::Chordal => ParametrizationType::Chordal,
            Self::Manhattan => ParametrizationType::Manhattan,
            Self::Custom(_) => ParametrizationType::Custom,
        }
    }

    /// Parametric distance between two points
    ///
    /// Dispatches on every call. The engines resolve the variant once per
    /// curve with [`with_value_increment!`](crate::with_value_increment) instead.
    pub fn value_increment(&self, p1: &Point, p2: &Point) -> f64 {
        match self {
            Self::X => value_increment_x(p1, p2),
            Self::Uniform => value_increment_uniform(p1, p2),
            Self::Centripetal => value_increment_centripetal(p1, p2),
            Self::Chordal => value_increment_chordal(p1, p2),
            Self::Manhattan => value_increment_manhattan(p1, p2),
            Self::Custom(custom) => custom.value_increment(p1, p2),
        }
    }
}

impl fmt::Debug for Parametrization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parametrization::{:?}", self.kind())
    }
}

impl From<ParametrizationType> for Parametrization {
    fn from(kind: ParametrizationType) -> Self {
        match kind {
            ParametrizationType::X => Self::X,
            ParametrizationType::Uniform => Self::Uniform,
            ParametrizationType::Centripetal => Self::Centripetal,
            ParametrizationType::Chordal => Self::Chordal,
            ParametrizationType::Manhattan => Self::Manhattan,
            ParametrizationType::Custom => {
                log::warn!("custom parametrization requested without a metric, using chordal");
                Self::Chordal
            }
        }
    }
}

/// Resolve a [`Parametrization`] once and evaluate an expression with the
/// matching distance function bound to `$f`
///
/// Every arm expands `$body` with a different concrete function type, so a
/// traversal generic over `Fn(&Point, &Point) -> f64` is monomorphized per
/// built-in variant and only the custom one goes through a trait object.
#[macro_export]
macro_rules! with_value_increment {
    ($parametrization:expr, |$f:ident| $body:expr) => {{
        use $crate::modules::parametrization as param;
        match $parametrization {
            param::Parametrization::X => {
                let $f = param::value_increment_x;
                $body
            }
            param::Parametrization::Uniform => {
                let $f = param::value_increment_uniform;
                $body
            }
            param::Parametrization::Centripetal => {
                let $f = param::value_increment_centripetal;
                $body
            }
            param::Parametrization::Chordal => {
                let $f = param::value_increment_chordal;
                $body
            }
            param::Parametrization::Manhattan => {
                let $f = param::value_increment_manhattan;
                $body
            }
            param::Parametrization::Custom(custom) => {
                let $f = |p1: &$crate::data::Point, p2: &$crate::data::Point| {
                    param::ValueIncrement::value_increment(&**custom, p1, p2)
                };
                $body
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pt;
    use approx::assert_relative_eq;

    #[test]
    fn test_value_increments() {
        struct IncrementTestCase<'a> {
            name: &'a str,
            parametrization: Parametrization,
            expected: f64,
        }

        let p1 = pt!(1, 1);
        let p2 = pt!(4, -3);

        let test_cases = [
            IncrementTestCase {
                name: "x",
                parametrization: Parametrization::X,
                expected: 3.0,
            },
            IncrementTestCase {
                name: "uniform",
                parametrization: Parametrization::Uniform,
                expected: 1.0,
            },
            IncrementTestCase {
                name: "centripetal",
                parametrization: Parametrization::Centripetal,
                expected: 5.0_f64.sqrt(),
            },
            IncrementTestCase {
                name: "chordal",
                parametrization: Parametrization::Chordal,
                expected: 5.0,
            },
            IncrementTestCase {
                name: "manhattan",
                parametrization: Parametrization::Manhattan,
                expected: 7.0,
            },
            IncrementTestCase {
                name: "custom",
                parametrization: Parametrization::custom(|a: &Point, b: &Point| {
                    (b.y - a.y).abs()
                }),
                expected: 4.0,
            },
        ];

        for test_case in test_cases {
            let direct = test_case.parametrization.value_increment(&p1, &p2);
            let dispatched = with_value_increment!(&test_case.parametrization, |f| f(&p1, &p2));

            assert_relative_eq!(direct, test_case.expected);
            assert_eq!(direct, dispatched, "Test case: {}", test_case.name);
            // distances are symmetric
            assert_eq!(
                direct,
                test_case.parametrization.value_increment(&p2, &p1),
                "Test case: {}",
                test_case.name
            );
        }
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            ParametrizationType::X,
            ParametrizationType::Uniform,
            ParametrizationType::Centripetal,
            ParametrizationType::Chordal,
            ParametrizationType::Manhattan,
        ] {
            assert_eq!(Parametrization::from(kind).kind(), kind);
        }

        // a bare discriminant carries no metric
        assert_eq!(
            Parametrization::from(ParametrizationType::Custom).kind(),
            ParametrizationType::Chordal
        );
        assert_eq!(Parametrization::default().kind(), ParametrizationType::Chordal);
    }
}
