//! Native NURBS curve.

use nurbs_core::traits::Validate;
use nurbs_core::{NurbsError, Result, Tolerance};
use nurbs_math::{dehomogenize, homogenize, HomogeneousPoint, Point3};
use serde::{Deserialize, Serialize};

use crate::nurbs::KnotVector;

/// A NURBS curve in 2D or 3D.
///
/// Control vertices live in one flat array with stride [`NurbsCurve::cv_size`].
/// Rational vertices are stored homogeneously as `(x·w, y·w[, z·w], w)`;
/// non-rational vertices carry only their `dimension` coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NurbsCurve {
    dimension: usize,
    rational: bool,
    order: usize,
    cv_count: usize,
    cv: Vec<f64>,
    knots: KnotVector,
}

impl NurbsCurve {
    /// Allocate a curve with zeroed knots and control vertices.
    ///
    /// Rational curves start with unit weights.
    pub fn new(dimension: usize, rational: bool, order: usize, cv_count: usize) -> Result<Self> {
        if !(2..=3).contains(&dimension) {
            return Err(NurbsError::UnsupportedDimension(dimension));
        }
        if order < 2 {
            return Err(NurbsError::Geometry(format!(
                "Curve order must be at least 2, got {}",
                order
            )));
        }
        if cv_count < order {
            return Err(NurbsError::Geometry(format!(
                "Curve of order {} needs at least {} control points, got {}",
                order, order, cv_count
            )));
        }

        let cv_size = dimension + usize::from(rational);
        let mut cv = vec![0.0; cv_size * cv_count];
        if rational {
            for vertex in cv.chunks_mut(cv_size) {
                vertex[dimension] = 1.0;
            }
        }

        Ok(Self {
            dimension,
            rational,
            order,
            cv_count,
            cv,
            knots: KnotVector::zeroed(cv_count + order),
        })
    }

    /// Build a 3D curve from Euclidean control points and optional weights.
    pub fn from_points(
        degree: usize,
        knots: Vec<f64>,
        points: &[Point3],
        weights: Option<&[f64]>,
    ) -> Result<Self> {
        if let Some(w) = weights {
            if w.len() != points.len() {
                return Err(NurbsError::Geometry(format!(
                    "Must have same number of weights as control points ({} != {})",
                    w.len(),
                    points.len()
                )));
            }
        }

        let mut curve = Self::new(3, weights.is_some(), degree + 1, points.len())?;
        if knots.len() != curve.knots.len() {
            return Err(NurbsError::Geometry(format!(
                "Knot vector length must be n + p + 1 = {}, got {}",
                curve.knots.len(),
                knots.len()
            )));
        }
        curve.knots = KnotVector::new(knots);
        for (i, &p) in points.iter().enumerate() {
            let w = weights.map_or(1.0, |w| w[i]);
            curve.set_cv(i, homogenize(p, w));
        }
        curve.validate()?;
        Ok(curve)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn is_rational(&self) -> bool {
        self.rational
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn degree(&self) -> usize {
        self.order - 1
    }

    pub fn cv_count(&self) -> usize {
        self.cv_count
    }

    /// Number of stored components per control vertex.
    pub fn cv_size(&self) -> usize {
        self.dimension + usize::from(self.rational)
    }

    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    pub fn knots_mut(&mut self) -> &mut KnotVector {
        &mut self.knots
    }

    /// Raw components of control vertex `i`.
    pub fn cv(&self, i: usize) -> &[f64] {
        let size = self.cv_size();
        &self.cv[i * size..(i + 1) * size]
    }

    /// Iterate raw control vertices in order.
    pub fn cvs(&self) -> impl Iterator<Item = &[f64]> {
        self.cv.chunks(self.cv_size())
    }

    /// Set control vertex `i` from a homogeneous point.
    ///
    /// Non-rational curves store the de-weighted position; 2D curves drop `z`.
    pub fn set_cv(&mut self, i: usize, point: HomogeneousPoint) {
        let size = self.cv_size();
        let dim = self.dimension;
        let vertex = &mut self.cv[i * size..(i + 1) * size];
        if self.rational {
            vertex[..dim].copy_from_slice(&point.to_array()[..dim]);
            vertex[dim] = point.w;
        } else {
            let p = dehomogenize(point);
            vertex.copy_from_slice(&p.to_array()[..dim]);
        }
    }

    /// Homogeneous control vertex `i`; 2D curves report `z = 0`.
    pub fn homogeneous_cv(&self, i: usize) -> HomogeneousPoint {
        let v = self.cv(i);
        let z = if self.dimension == 3 { v[2] } else { 0.0 };
        let w = self.weight(i);
        if self.rational {
            HomogeneousPoint::new(v[0], v[1], z, w)
        } else {
            HomogeneousPoint::new(v[0], v[1], z, 1.0)
        }
    }

    /// Weight of control vertex `i` (1 for non-rational curves).
    pub fn weight(&self, i: usize) -> f64 {
        if self.rational {
            self.cv(i)[self.dimension]
        } else {
            1.0
        }
    }

    /// Euclidean position of control vertex `i`.
    pub fn point(&self, i: usize) -> Point3 {
        dehomogenize(self.homogeneous_cv(i))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.knots.domain(self.degree())
    }
}

impl NurbsCurve {
    /// Check knots, finite vertices and, for rational curves, that every
    /// weight is above `tolerance.weight`.
    pub fn validate_with(&self, tolerance: &Tolerance) -> Result<()> {
        self.knots.validate(self.degree(), self.cv_count, tolerance)?;

        if let Some(i) = self.cv.iter().position(|c| !c.is_finite()) {
            return Err(NurbsError::Geometry(format!(
                "Control vertex {} has a non-finite component",
                i / self.cv_size()
            )));
        }

        if self.rational {
            let invalid = (0..self.cv_count).find(|&i| !tolerance.is_valid_weight(self.weight(i)));
            if let Some(i) = invalid {
                return Err(NurbsError::Geometry(format!(
                    "Weight {} of control vertex {} is below tolerance",
                    self.weight(i),
                    i
                )));
            }
        }

        Ok(())
    }
}

impl Validate for NurbsCurve {
    fn validate(&self) -> Result<()> {
        self.validate_with(&Tolerance::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nurbs_math::{DVec3, DVec4};

    #[test]
    fn test_new_allocates_zeroed_curve() {
        let curve = NurbsCurve::new(3, false, 4, 4).unwrap();
        assert_eq!(curve.degree(), 3);
        assert_eq!(curve.cv_size(), 3);
        assert_eq!(curve.knots().len(), 8);
        assert_eq!(curve.knots().knot_count(), 6);
        assert_eq!(curve.cv(3), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_new_rational_starts_with_unit_weights() {
        let curve = NurbsCurve::new(2, true, 3, 3).unwrap();
        assert_eq!(curve.cv_size(), 3);
        assert_eq!(curve.cv(1), &[0.0, 0.0, 1.0]);
        assert_eq!(curve.weight(2), 1.0);
    }

    #[test]
    fn test_new_rejects_bad_dimension() {
        let err = NurbsCurve::new(4, false, 2, 2).unwrap_err();
        assert!(matches!(err, NurbsError::UnsupportedDimension(4)));
    }

    #[test]
    fn test_new_rejects_too_few_control_points() {
        assert!(NurbsCurve::new(3, false, 4, 3).is_err());
        assert!(NurbsCurve::new(3, false, 1, 3).is_err());
    }

    #[test]
    fn test_set_cv_rational_keeps_homogeneous_form() {
        let mut curve = NurbsCurve::new(3, true, 2, 2).unwrap();
        curve.set_cv(0, DVec4::new(0.5, 1.0, 1.5, 0.5));
        assert_eq!(curve.cv(0), &[0.5, 1.0, 1.5, 0.5]);
        assert_eq!(curve.point(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_set_cv_non_rational_dehomogenizes() {
        let mut curve = NurbsCurve::new(3, false, 2, 2).unwrap();
        curve.set_cv(1, DVec4::new(2.0, 4.0, 6.0, 2.0));
        assert_eq!(curve.cv(1), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_set_cv_two_dimensional_drops_z() {
        let mut curve = NurbsCurve::new(2, true, 2, 2).unwrap();
        curve.set_cv(0, DVec4::new(2.0, 4.0, 0.0, 2.0));
        assert_eq!(curve.cv(0), &[2.0, 4.0, 2.0]);
        assert_eq!(curve.homogeneous_cv(0), DVec4::new(2.0, 4.0, 0.0, 2.0));
    }

    #[test]
    fn test_from_points_validates() {
        let curve = NurbsCurve::from_points(
            1,
            vec![0.0, 0.0, 1.0, 1.0],
            &[DVec3::ZERO, DVec3::X],
            None,
        )
        .unwrap();
        assert_eq!(curve.domain(), (0.0, 1.0));

        let bad_weights = NurbsCurve::from_points(
            1,
            vec![0.0, 0.0, 1.0, 1.0],
            &[DVec3::ZERO, DVec3::X],
            Some(&[1.0, 0.0]),
        );
        assert!(bad_weights.is_err());
    }

    #[test]
    fn test_weight_floor_follows_tolerance() {
        let mut curve = NurbsCurve::new(3, true, 2, 2).unwrap();
        *curve.knots_mut() = KnotVector::new(vec![0.0, 0.0, 1.0, 1.0]);
        curve.set_cv(1, DVec4::new(0.25, 0.0, 0.0, 0.25));
        curve.validate().unwrap();
        let strict = Tolerance::new(Tolerance::DEFAULT_LINEAR, 0.5);
        assert!(curve.validate_with(&strict).is_err());
    }
}
