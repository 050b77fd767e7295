//! Polyline curve.

use nurbs_math::Point3;
use serde::{Deserialize, Serialize};

use super::NurbsCurve;
use crate::nurbs::ToNurbs;

/// Connected line segments through `points`, parameterized by vertex index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point3>,
}

impl Polyline {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }
}

impl ToNurbs for Polyline {
    type Output = NurbsCurve;

    /// Degree 1 with knots `[0, 0, 1, ..., n-2, n-1, n-1]`.
    fn to_nurbs(&self) -> Option<NurbsCurve> {
        let n = self.points.len();
        if n < 2 {
            return None;
        }
        let mut knots = Vec::with_capacity(n + 2);
        knots.push(0.0);
        knots.extend((0..n).map(|i| i as f64));
        knots.push((n - 1) as f64);
        NurbsCurve::from_points(1, knots, &self.points, None).ok()
    }
}
