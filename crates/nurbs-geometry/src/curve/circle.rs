//! Circle curve.

use std::f64::consts::FRAC_1_SQRT_2;

use nurbs_math::{DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::NurbsCurve;
use crate::nurbs::ToNurbs;

/// Knots of the nine-point quadratic circle.
pub const CIRCLE_KNOTS: [f64; 12] = [
    0.0, 0.0, 0.0, 0.25, 0.25, 0.5, 0.5, 0.75, 0.75, 1.0, 1.0, 1.0,
];

/// A full circle in 3D space.
///
/// The circle lies in the plane defined by `center` and `normal`,
/// with the reference direction computed from the normal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point3,
    pub normal: Vector3,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point3, normal: Vector3, radius: f64) -> Self {
        Self {
            center,
            normal: normal.normalize(),
            radius,
        }
    }

    /// Compute an orthonormal frame (u_axis, v_axis) in the circle plane.
    pub(crate) fn local_frame(&self) -> (DVec3, DVec3) {
        local_frame(self.normal)
    }
}

/// Orthonormal frame perpendicular to `n`.
pub(crate) fn local_frame(n: Vector3) -> (DVec3, DVec3) {
    // Choose a vector not parallel to normal to build the frame
    let ref_vec = if n.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
    let u = n.cross(ref_vec).normalize();
    let v = n.cross(u).normalize();
    (u, v)
}

/// Control points and weights of the nine-point rational circle.
pub(crate) fn circle_net(
    center: Point3,
    u: DVec3,
    v: DVec3,
    radius: f64,
) -> (Vec<Point3>, Vec<f64>) {
    const CORNERS: [(f64, f64); 9] = [
        (1.0, 0.0),
        (1.0, 1.0),
        (0.0, 1.0),
        (-1.0, 1.0),
        (-1.0, 0.0),
        (-1.0, -1.0),
        (0.0, -1.0),
        (1.0, -1.0),
        (1.0, 0.0),
    ];
    let points = CORNERS
        .iter()
        .map(|&(a, b)| center + radius * (a * u + b * v))
        .collect();
    let weights = (0..9)
        .map(|i| if i % 2 == 0 { 1.0 } else { FRAC_1_SQRT_2 })
        .collect();
    (points, weights)
}

impl ToNurbs for Circle {
    type Output = NurbsCurve;

    /// Exact rational quadratic with nine control points.
    fn to_nurbs(&self) -> Option<NurbsCurve> {
        if !(self.radius.is_finite() && self.radius > 0.0) || !self.normal.is_finite() {
            return None;
        }
        let (u, v) = self.local_frame();
        let (points, weights) = circle_net(self.center, u, v, self.radius);
        NurbsCurve::from_points(2, CIRCLE_KNOTS.to_vec(), &points, Some(&weights)).ok()
    }
}
