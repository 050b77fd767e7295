use nurbs_core::error::{NurbsError, Result};
use nurbs_geometry::{CurveGeometry, SurfaceGeometry};
use nurbs_math::Point3;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use super::types::*;

/// A boundary-representation shell or solid.
///
/// Faces are kept in a `Vec` so their order is stable and indices are
/// contiguous; every other entity lives in a slot map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brep {
    pub vertices: SlotMap<VertexId, Vertex>,
    pub edges: SlotMap<EdgeId, Edge>,
    pub curves: SlotMap<CurveId, CurveGeometry>,
    pub surfaces: SlotMap<SurfaceId, SurfaceGeometry>,
    pub faces: Vec<Face>,
}

impl Brep {
    pub fn new() -> Self {
        Self {
            vertices: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            curves: SlotMap::with_key(),
            surfaces: SlotMap::with_key(),
            faces: Vec::new(),
        }
    }

    /// A one-face shell over `surface`, without trims.
    pub fn from_surface(surface: SurfaceGeometry) -> Self {
        let mut brep = Self::new();
        let id = brep.add_surface(surface);
        brep.faces.push(Face::new(Some(id)));
        brep
    }

    pub fn add_vertex(&mut self, position: Point3) -> VertexId {
        self.vertices.insert(Vertex { position })
    }

    pub fn add_curve(&mut self, curve: CurveGeometry) -> CurveId {
        self.curves.insert(curve)
    }

    pub fn add_surface(&mut self, surface: SurfaceGeometry) -> SurfaceId {
        self.surfaces.insert(surface)
    }

    /// Create an edge between two vertices, optionally carrying a 3D curve.
    pub fn make_edge(
        &mut self,
        start: VertexId,
        end: VertexId,
        curve: Option<CurveId>,
    ) -> Result<EdgeId> {
        if !self.vertices.contains_key(start) || !self.vertices.contains_key(end) {
            return Err(NurbsError::NotFound("Vertex not found".into()));
        }
        if let Some(c) = curve {
            if !self.curves.contains_key(c) {
                return Err(NurbsError::NotFound("Edge curve not found".into()));
            }
        }
        Ok(self.edges.insert(Edge { start, end, curve }))
    }

    /// Append a face over an existing surface and return its index.
    pub fn new_face(&mut self, surface: SurfaceId) -> Result<usize> {
        if !self.surfaces.contains_key(surface) {
            return Err(NurbsError::NotFound("Surface not found".into()));
        }
        self.faces.push(Face::new(Some(surface)));
        Ok(self.faces.len() - 1)
    }

    /// Append a face with no surface attached.
    pub fn new_empty_face(&mut self) -> usize {
        self.faces.push(Face::new(None));
        self.faces.len() - 1
    }

    /// Attach a loop of edge uses to face `face_index`.
    pub fn add_loop(
        &mut self,
        face_index: usize,
        kind: LoopKind,
        edges: Vec<EdgeUse>,
    ) -> Result<()> {
        if let Some(missing) = edges.iter().find(|u| !self.edges.contains_key(u.edge)) {
            return Err(NurbsError::NotFound(format!("Edge {:?} not found", missing.edge)));
        }
        let face = self
            .faces
            .get_mut(face_index)
            .ok_or_else(|| NurbsError::NotFound(format!("Face {} not found", face_index)))?;
        face.loops.push(Loop { kind, edges });
        Ok(())
    }

    /// Mark face `face_index` for removal; it disappears on the next [`Brep::compact`].
    pub fn delete_face(&mut self, face_index: usize) -> Result<()> {
        let face = self
            .faces
            .get_mut(face_index)
            .ok_or_else(|| NurbsError::NotFound(format!("Face {} not found", face_index)))?;
        face.deleted = true;
        Ok(())
    }

    /// Face at `index`, or `None` past the last face.
    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    /// Mutable face at `index`.
    pub fn face_mut(&mut self, index: usize) -> Option<&mut Face> {
        self.faces.get_mut(index)
    }

    /// The surface under `face`, if it resolves.
    pub fn surface_of(&self, face: &Face) -> Option<&SurfaceGeometry> {
        face.surface.and_then(|id| self.surfaces.get(id))
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

impl Default for Brep {
    fn default() -> Self {
        Self::new()
    }
}
