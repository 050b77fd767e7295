//! Knot vectors in full clamped form.
//!
//! A [`KnotVector`] stores all `cv_count + degree + 1` values. The two
//! outermost entries are the "superfluous" boundary echoes; the remaining
//! `len - 2` entries are addressed as interior knots through [`KnotVector::knot`].

use nurbs_core::{NurbsError, Result, Tolerance};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnotVector(Vec<f64>);

impl KnotVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// A vector of `len` zeros, to be filled positionally with [`KnotVector::set`].
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of interior knots (the full length minus both boundary echoes).
    pub fn knot_count(&self) -> usize {
        self.0.len().saturating_sub(2)
    }

    /// Interior knot `i`, `0 <= i < knot_count()`.
    pub fn knot(&self, i: usize) -> f64 {
        self.0[i + 1]
    }

    /// Boundary echo before the first interior knot, or after the last one
    /// when `end` is set.
    pub fn superfluous_knot(&self, end: bool) -> f64 {
        if end {
            self.0[self.0.len() - 1]
        } else {
            self.0[0]
        }
    }

    /// Set position `i` of the full vector.
    pub fn set(&mut self, i: usize, value: f64) {
        self.0[i] = value;
    }

    /// Parameter domain `(knots[p], knots[len - p - 1])`.
    pub fn domain(&self, degree: usize) -> (f64, f64) {
        (self.0[degree], self.0[self.0.len() - degree - 1])
    }

    /// Check length `cv_count + degree + 1`, finiteness, monotonicity and a
    /// domain wider than `tolerance.linear`.
    pub fn validate(&self, degree: usize, cv_count: usize, tolerance: &Tolerance) -> Result<()> {
        let expected = cv_count + degree + 1;
        if self.0.len() != expected {
            return Err(NurbsError::Geometry(format!(
                "Knot vector length must be n + p + 1 = {}, got {}",
                expected,
                self.0.len()
            )));
        }
        if let Some(i) = self.0.iter().position(|k| !k.is_finite()) {
            return Err(NurbsError::Geometry(format!("Knot {} is not finite", i)));
        }
        if let Some(i) = (1..self.0.len()).find(|&i| self.0[i] < self.0[i - 1]) {
            return Err(NurbsError::Geometry(format!(
                "Knot vector decreases at index {}: {} < {}",
                i,
                self.0[i],
                self.0[i - 1]
            )));
        }
        let (t0, t1) = self.domain(degree);
        if t1 <= t0 || tolerance.linear_eq(t0, t1) {
            return Err(NurbsError::Geometry(format!(
                "Knot vector has an empty domain [{}, {}]",
                t0, t1
            )));
        }
        Ok(())
    }
}
