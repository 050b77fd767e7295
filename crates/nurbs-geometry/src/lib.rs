//! NURBS bridge geometry: the kernel-side curve and surface entities.

pub mod curve;
pub mod nurbs;
pub mod surface;

pub use curve::{CurveGeometry, NurbsCurve};
pub use nurbs::{KnotVector, ToNurbs};
pub use surface::{NurbsSurface, SurfaceGeometry};
