//! Tangent scale factors of a cardinal spline segment.

use serde::{Deserialize, Serialize};

/// Scale factors of the tangent vectors at the start (`t1`) and the end (`t2`)
/// of one cubic segment
///
/// For well spaced points both factors lie in `(0, 1]`. A spline over `n`
/// points has `n - 1` tensions when open and `n` when closed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tension {
    pub t1: f64,
    pub t2: f64,
}

impl Tension {
    pub const fn new(t1: f64, t2: f64) -> Self {
        Self { t1, t2 }
    }
}
