//! Planar surface.

use nurbs_math::{DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::NurbsSurface;
use crate::nurbs::ToNurbs;

/// A planar surface parameterized by `origin + u * u_axis + v * v_axis`
/// over `domain_u × domain_v`.
///
/// An infinite domain is allowed for construction planes but has no NURBS form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarSurface {
    pub origin: Point3,
    pub u_axis: Vector3,
    pub v_axis: Vector3,
    pub domain_u: (f64, f64),
    pub domain_v: (f64, f64),
}

impl PlanarSurface {
    pub fn new(
        origin: Point3,
        u_axis: Vector3,
        v_axis: Vector3,
        domain_u: (f64, f64),
        domain_v: (f64, f64),
    ) -> Self {
        Self {
            origin,
            u_axis,
            v_axis,
            domain_u,
            domain_v,
        }
    }

    /// Unbounded plane through `origin`.
    pub fn unbounded(origin: Point3, u_axis: Vector3, v_axis: Vector3) -> Self {
        let all = (f64::NEG_INFINITY, f64::INFINITY);
        Self::new(origin, u_axis, v_axis, all, all)
    }

    /// Unit square in the XY plane.
    pub fn xy_unit() -> Self {
        Self::new(DVec3::ZERO, DVec3::X, DVec3::Y, (0.0, 1.0), (0.0, 1.0))
    }

    fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.origin + u * self.u_axis + v * self.v_axis
    }
}

fn is_bounded((a, b): (f64, f64)) -> bool {
    a.is_finite() && b.is_finite() && b > a
}

impl ToNurbs for PlanarSurface {
    type Output = NurbsSurface;

    /// Bilinear patch, degree (1, 1), 2×2 control points.
    fn to_nurbs(&self) -> Option<NurbsSurface> {
        if !is_bounded(self.domain_u) || !is_bounded(self.domain_v) {
            return None;
        }
        let (u0, u1) = self.domain_u;
        let (v0, v1) = self.domain_v;
        let points = [
            vec![self.point_at(u0, v0), self.point_at(u0, v1)],
            vec![self.point_at(u1, v0), self.point_at(u1, v1)],
        ];
        NurbsSurface::from_grid(1, 1, vec![u0, u0, u1, u1], vec![v0, v0, v1, v1], &points, None)
            .ok()
    }
}
