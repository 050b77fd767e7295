pub mod homogeneous;

pub use glam::{DVec3, DVec4};
pub use homogeneous::{dehomogenize, dehomogenize_slice, homogenize};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
/// A control vertex in homogeneous form `(x·w, y·w, z·w, w)`.
pub type HomogeneousPoint = DVec4;
