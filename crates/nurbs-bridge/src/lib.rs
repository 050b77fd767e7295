//! Transcoding between kernel NURBS geometry and interchange documents.
//!
//! Export reads a curve, surface or B-Rep from a [`Model`] and produces a
//! document fragment; import reads a fragment, rebuilds the entity and
//! registers it with the model. Entities that cannot be converted are
//! skipped without aborting the surrounding pass.

pub mod brep;
pub mod bridge;
pub mod control_points;
pub mod curve;
pub mod diagnostics;
pub mod document;
pub mod knots;
pub mod model;
pub mod shape;
pub mod surface;

pub use brep::extract_brep;
pub use bridge::Bridge;
pub use curve::{construct_curve, extract_curve};
pub use diagnostics::{Diagnostics, LogSink, WarningSink};
pub use model::{Component, Geometry, GeometryKind, Model};
pub use shape::{export_shape, import_shape, ImportSummary, ShapeKind};
pub use surface::{construct_surface, extract_surface};
