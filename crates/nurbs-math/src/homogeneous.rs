//! Conversions between Euclidean and weighted (homogeneous) coordinates.

use crate::{DVec3, DVec4};

/// Weights closer to zero than this are treated as degenerate.
const MIN_WEIGHT: f64 = 1e-15;

/// Scale a Euclidean point by `w` and append the weight.
pub fn homogenize(point: DVec3, w: f64) -> DVec4 {
    (point * w).extend(w)
}

/// Project a homogeneous point back to Euclidean space.
///
/// A degenerate weight leaves the coordinates untouched.
pub fn dehomogenize(point: DVec4) -> DVec3 {
    let xyz = point.truncate();
    if point.w.abs() < MIN_WEIGHT {
        xyz
    } else {
        xyz / point.w
    }
}

/// De-weight the leading `coords` components of a flat homogeneous vertex
/// whose weight sits at index `coords`.
pub fn dehomogenize_slice(cv: &[f64], coords: usize) -> Vec<f64> {
    let w = cv[coords];
    if w.abs() < MIN_WEIGHT {
        cv[..coords].to_vec()
    } else {
        cv[..coords].iter().map(|c| c / w).collect()
    }
}
