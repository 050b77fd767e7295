//! Native NURBS surface.

use nurbs_core::traits::Validate;
use nurbs_core::{NurbsError, Result, Tolerance};
use nurbs_math::{dehomogenize, homogenize, HomogeneousPoint, Point3};
use serde::{Deserialize, Serialize};

use crate::nurbs::KnotVector;

/// A tensor-product NURBS surface in 2D or 3D.
///
/// The control net is stored flat, row-major with `v` varying fastest:
/// vertex `(u, v)` starts at `(v + u * size_v) * cv_size`. Rational vertices
/// are homogeneous, as in [`crate::NurbsCurve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NurbsSurface {
    dimension: usize,
    rational: bool,
    order_u: usize,
    order_v: usize,
    size_u: usize,
    size_v: usize,
    cv: Vec<f64>,
    knots_u: KnotVector,
    knots_v: KnotVector,
}

impl NurbsSurface {
    /// Allocate a surface with zeroed knots and control vertices.
    pub fn new(
        dimension: usize,
        rational: bool,
        order_u: usize,
        order_v: usize,
        size_u: usize,
        size_v: usize,
    ) -> Result<Self> {
        if !(2..=3).contains(&dimension) {
            return Err(NurbsError::UnsupportedDimension(dimension));
        }
        for (axis, order, size) in [("u", order_u, size_u), ("v", order_v, size_v)] {
            if order < 2 {
                return Err(NurbsError::Geometry(format!(
                    "Surface order in {} must be at least 2, got {}",
                    axis, order
                )));
            }
            if size < order {
                return Err(NurbsError::Geometry(format!(
                    "Surface of order {} in {} needs at least {} control points, got {}",
                    order, axis, order, size
                )));
            }
        }

        let cv_size = dimension + usize::from(rational);
        let mut cv = vec![0.0; cv_size * size_u * size_v];
        if rational {
            for vertex in cv.chunks_mut(cv_size) {
                vertex[dimension] = 1.0;
            }
        }

        Ok(Self {
            dimension,
            rational,
            order_u,
            order_v,
            size_u,
            size_v,
            cv,
            knots_u: KnotVector::zeroed(size_u + order_u),
            knots_v: KnotVector::zeroed(size_v + order_v),
        })
    }

    /// Build a 3D surface from a `[u][v]` grid of Euclidean points and optional weights.
    pub fn from_grid(
        degree_u: usize,
        degree_v: usize,
        knots_u: Vec<f64>,
        knots_v: Vec<f64>,
        points: &[Vec<Point3>],
        weights: Option<&[Vec<f64>]>,
    ) -> Result<Self> {
        let size_u = points.len();
        let size_v = points.first().map_or(0, Vec::len);
        if points.iter().any(|row| row.len() != size_v) {
            return Err(NurbsError::Geometry("Control net rows differ in length".into()));
        }
        if let Some(w) = weights {
            if w.len() != size_u || w.iter().any(|row| row.len() != size_v) {
                return Err(NurbsError::Geometry(
                    "Weight grid must match the control net".into(),
                ));
            }
        }

        let mut surface = Self::new(
            3,
            weights.is_some(),
            degree_u + 1,
            degree_v + 1,
            size_u,
            size_v,
        )?;
        if knots_u.len() != surface.knots_u.len() || knots_v.len() != surface.knots_v.len() {
            return Err(NurbsError::Geometry(format!(
                "Knot vector lengths must be ({}, {}), got ({}, {})",
                surface.knots_u.len(),
                surface.knots_v.len(),
                knots_u.len(),
                knots_v.len()
            )));
        }
        surface.knots_u = KnotVector::new(knots_u);
        surface.knots_v = KnotVector::new(knots_v);
        for (u, row) in points.iter().enumerate() {
            for (v, &p) in row.iter().enumerate() {
                let w = weights.map_or(1.0, |w| w[u][v]);
                surface.set_cv(u, v, homogenize(p, w));
            }
        }
        surface.validate()?;
        Ok(surface)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn is_rational(&self) -> bool {
        self.rational
    }

    pub fn degree_u(&self) -> usize {
        self.order_u - 1
    }

    pub fn degree_v(&self) -> usize {
        self.order_v - 1
    }

    pub fn size_u(&self) -> usize {
        self.size_u
    }

    pub fn size_v(&self) -> usize {
        self.size_v
    }

    pub fn cv_size(&self) -> usize {
        self.dimension + usize::from(self.rational)
    }

    pub fn knots_u(&self) -> &KnotVector {
        &self.knots_u
    }

    pub fn knots_v(&self) -> &KnotVector {
        &self.knots_v
    }

    pub fn knots_u_mut(&mut self) -> &mut KnotVector {
        &mut self.knots_u
    }

    pub fn knots_v_mut(&mut self) -> &mut KnotVector {
        &mut self.knots_v
    }

    /// Flat index of grid cell `(u, v)`.
    pub fn cv_index(&self, u: usize, v: usize) -> usize {
        v + u * self.size_v
    }

    /// Raw components of control vertex `(u, v)`.
    pub fn cv(&self, u: usize, v: usize) -> &[f64] {
        let size = self.cv_size();
        let start = self.cv_index(u, v) * size;
        &self.cv[start..start + size]
    }

    /// Set control vertex `(u, v)` from a homogeneous point.
    pub fn set_cv(&mut self, u: usize, v: usize, point: HomogeneousPoint) {
        let size = self.cv_size();
        let dim = self.dimension;
        let start = self.cv_index(u, v) * size;
        let vertex = &mut self.cv[start..start + size];
        if self.rational {
            vertex[..dim].copy_from_slice(&point.to_array()[..dim]);
            vertex[dim] = point.w;
        } else {
            let p = dehomogenize(point);
            vertex.copy_from_slice(&p.to_array()[..dim]);
        }
    }

    pub fn weight(&self, u: usize, v: usize) -> f64 {
        if self.rational {
            self.cv(u, v)[self.dimension]
        } else {
            1.0
        }
    }

    /// Homogeneous control vertex `(u, v)`; 2D surfaces report `z = 0`.
    pub fn homogeneous_cv(&self, u: usize, v: usize) -> HomogeneousPoint {
        let c = self.cv(u, v);
        let z = if self.dimension == 3 { c[2] } else { 0.0 };
        HomogeneousPoint::new(c[0], c[1], z, self.weight(u, v))
    }

    /// Euclidean position of control vertex `(u, v)`.
    pub fn point(&self, u: usize, v: usize) -> Point3 {
        dehomogenize(self.homogeneous_cv(u, v))
    }

    /// Swap the u and v parameter directions, flipping the orientation.
    pub fn transpose(&self) -> Self {
        let mut out = Self {
            dimension: self.dimension,
            rational: self.rational,
            order_u: self.order_v,
            order_v: self.order_u,
            size_u: self.size_v,
            size_v: self.size_u,
            cv: vec![0.0; self.cv.len()],
            knots_u: self.knots_v.clone(),
            knots_v: self.knots_u.clone(),
        };
        for u in 0..self.size_u {
            for v in 0..self.size_v {
                let src = self.cv(u, v);
                let size = out.cv_size();
                let start = out.cv_index(v, u) * size;
                out.cv[start..start + size].copy_from_slice(src);
            }
        }
        out
    }
}

impl NurbsSurface {
    /// Surface counterpart of [`NurbsCurve::validate_with`](crate::NurbsCurve::validate_with).
    pub fn validate_with(&self, tolerance: &Tolerance) -> Result<()> {
        self.knots_u.validate(self.degree_u(), self.size_u, tolerance)?;
        self.knots_v.validate(self.degree_v(), self.size_v, tolerance)?;

        if let Some(i) = self.cv.iter().position(|c| !c.is_finite()) {
            return Err(NurbsError::Geometry(format!(
                "Control vertex {} has a non-finite component",
                i / self.cv_size()
            )));
        }

        if self.rational {
            for u in 0..self.size_u {
                for v in 0..self.size_v {
                    let w = self.weight(u, v);
                    if !tolerance.is_valid_weight(w) {
                        return Err(NurbsError::Geometry(format!(
                            "Weight {} of control vertex ({}, {}) is below tolerance",
                            w, u, v
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

impl Validate for NurbsSurface {
    fn validate(&self) -> Result<()> {
        self.validate_with(&Tolerance::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nurbs_math::{DVec3, DVec4};

    fn bilinear_surface() -> NurbsSurface {
        NurbsSurface::from_grid(
            1,
            1,
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, 0.0, 1.0, 1.0],
            &[
                vec![DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0)],
                vec![DVec3::new(0.0, 1.0, 0.0), DVec3::new(1.0, 1.0, 0.0)],
            ],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_flat_index_is_v_fastest() {
        let surface = NurbsSurface::new(3, false, 2, 2, 3, 4).unwrap();
        assert_eq!(surface.cv_index(0, 0), 0);
        assert_eq!(surface.cv_index(0, 3), 3);
        assert_eq!(surface.cv_index(1, 0), 4);
        assert_eq!(surface.cv_index(2, 1), 9);
    }

    #[test]
    fn test_knot_lengths_follow_orders() {
        let surface = NurbsSurface::new(3, true, 3, 2, 4, 2).unwrap();
        assert_eq!(surface.knots_u().len(), 7);
        assert_eq!(surface.knots_v().len(), 4);
        assert_eq!(surface.cv_size(), 4);
        assert_eq!(surface.weight(3, 1), 1.0);
    }

    #[test]
    fn test_set_cv_addresses_grid_cell() {
        let mut surface = NurbsSurface::new(3, true, 2, 2, 3, 4).unwrap();
        surface.set_cv(2, 1, DVec4::new(2.0, 4.0, 6.0, 2.0));
        assert_eq!(surface.cv(2, 1), &[2.0, 4.0, 6.0, 2.0]);
        assert_eq!(surface.point(2, 1), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(surface.cv(1, 2), &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_transpose_swaps_axes() {
        let surface = bilinear_surface();
        let t = surface.transpose();
        assert_eq!(t.size_u(), 2);
        assert_eq!(t.point(0, 1), surface.point(1, 0));
        assert_eq!(t.point(1, 0), surface.point(0, 1));
        assert_eq!(t.transpose(), surface);
    }

    #[test]
    fn test_transpose_non_square() {
        let surface = NurbsSurface::from_grid(
            1,
            2,
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
            &[
                vec![DVec3::ZERO, DVec3::X, DVec3::Y],
                vec![DVec3::Z, DVec3::ONE, DVec3::NEG_ONE],
            ],
            None,
        )
        .unwrap();
        let t = surface.transpose();
        assert_eq!((t.size_u(), t.size_v()), (3, 2));
        assert_eq!((t.degree_u(), t.degree_v()), (2, 1));
        assert_eq!(t.point(2, 1), DVec3::NEG_ONE);
        t.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_weight() {
        let mut surface = NurbsSurface::new(3, true, 2, 2, 2, 2).unwrap();
        *surface.knots_u_mut() = KnotVector::new(vec![0.0, 0.0, 1.0, 1.0]);
        *surface.knots_v_mut() = KnotVector::new(vec![0.0, 0.0, 1.0, 1.0]);
        surface.validate().unwrap();
        surface.set_cv(1, 1, DVec4::new(0.0, 0.0, 0.0, 0.0));
        assert!(surface.validate().is_err());
    }
}
