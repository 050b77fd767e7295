use nurbs_math::Point3;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

// --- SlotMap key types ---

new_key_type! {
    pub struct VertexId;
    pub struct EdgeId;
    pub struct CurveId;
    pub struct SurfaceId;
}

// --- Entity structs ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    pub start: VertexId,
    pub end: VertexId,
    /// 3D curve of the edge, if any.
    pub curve: Option<CurveId>,
}

/// An edge traversed by a loop, possibly against its own direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeUse {
    pub edge: EdgeId,
    pub reversed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopKind {
    Outer,
    Inner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loop {
    pub kind: LoopKind,
    pub edges: Vec<EdgeUse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    /// Underlying surface; `None` for a face whose surface was never set or was removed.
    pub surface: Option<SurfaceId>,
    pub loops: Vec<Loop>,
    /// Face normal opposes the surface normal.
    pub reversed: bool,
    /// Marked for removal by the next compaction.
    pub deleted: bool,
}

impl Face {
    pub fn new(surface: Option<SurfaceId>) -> Self {
        Self {
            surface,
            loops: Vec::new(),
            reversed: false,
            deleted: false,
        }
    }
}
