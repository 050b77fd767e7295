//! Line segment curve.

use nurbs_math::Point3;
use serde::{Deserialize, Serialize};

use super::NurbsCurve;
use crate::nurbs::ToNurbs;

/// A line segment from `start` to `end`, parameterized over `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point3,
    pub end: Point3,
}

impl Line {
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }
}

impl ToNurbs for Line {
    type Output = NurbsCurve;

    /// Degree 1, two control points, knots `[0, 0, 1, 1]`.
    fn to_nurbs(&self) -> Option<NurbsCurve> {
        NurbsCurve::from_points(1, vec![0.0, 0.0, 1.0, 1.0], &[self.start, self.end], None).ok()
    }
}
