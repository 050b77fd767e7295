//! Cylindrical surface.

use nurbs_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::NurbsSurface;
use crate::curve::{circle_net, local_frame, CIRCLE_KNOTS};
use crate::nurbs::ToNurbs;

/// A finite cylinder around `axis` through `origin`, between two heights.
///
/// `u` runs around the axis (one full turn), `v` along it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylindricalSurface {
    pub origin: Point3,
    pub axis: Vector3,
    pub radius: f64,
    pub height: (f64, f64),
}

impl CylindricalSurface {
    pub fn new(origin: Point3, axis: Vector3, radius: f64, height: (f64, f64)) -> Self {
        Self {
            origin,
            axis: axis.normalize(),
            radius,
            height,
        }
    }
}

impl ToNurbs for CylindricalSurface {
    type Output = NurbsSurface;

    /// Rational, degree (2, 1): the nine-point circle swept along the axis.
    fn to_nurbs(&self) -> Option<NurbsSurface> {
        let (h0, h1) = self.height;
        if !(self.radius.is_finite() && self.radius > 0.0)
            || !self.axis.is_finite()
            || !(h0.is_finite() && h1.is_finite() && h1 > h0)
        {
            return None;
        }

        let (ref_dir, cross_dir) = local_frame(self.axis);
        let (ring, ring_weights) = circle_net(self.origin, ref_dir, cross_dir, self.radius);
        let points: Vec<Vec<Point3>> = ring
            .iter()
            .map(|&p| vec![p + h0 * self.axis, p + h1 * self.axis])
            .collect();
        let weights: Vec<Vec<f64>> = ring_weights.iter().map(|&w| vec![w, w]).collect();

        NurbsSurface::from_grid(
            2,
            1,
            CIRCLE_KNOTS.to_vec(),
            vec![h0, h0, h1, h1],
            &points,
            Some(&weights),
        )
        .ok()
    }
}
