//! Boundary-representation solids for the NURBS bridge.
//!
//! A [`Brep`] owns its faces, loops, edges and vertices. Only the surface
//! under each face is transcoded; the rest of the topology is carried so it
//! can be canonicalized and then discarded.

pub mod topology;

pub use topology::{Brep, FaceIter};
pub use topology::types::*;
