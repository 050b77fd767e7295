//! NURBS core: knot vectors and the canonical-form conversion trait.

pub mod knot;

pub use knot::KnotVector;

/// Conversion of a kernel entity into its NURBS canonical form.
///
/// Returns `None` when the entity has no finite NURBS representation
/// (unbounded extents, degenerate radius, too few points, ...).
pub trait ToNurbs {
    type Output;

    fn to_nurbs(&self) -> Option<Self::Output>;
}
