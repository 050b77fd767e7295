//! Standardize and compact: the canonical form faces are read from.

use std::collections::HashSet;

use nurbs_geometry::{SurfaceGeometry, ToNurbs};

use super::brep::Brep;
use super::types::{CurveId, EdgeId, SurfaceId, VertexId};

impl Brep {
    /// Normalize face/surface and edge/curve relationships.
    ///
    /// After this call every live face owns its surface, every edge owns
    /// its curve, and reversed faces carry a transposed NURBS surface with
    /// the flag cleared. A reversed face whose surface has no NURBS form
    /// keeps its flag. Running it again changes nothing.
    pub fn standardize(&mut self) {
        let mut seen: HashSet<SurfaceId> = HashSet::new();
        for index in 0..self.faces.len() {
            let face = &self.faces[index];
            if face.deleted {
                continue;
            }
            let Some(mut surface_id) = face.surface else {
                continue;
            };
            if !self.surfaces.contains_key(surface_id) {
                continue;
            }

            if !seen.insert(surface_id) {
                let copy = self.surfaces[surface_id].clone();
                surface_id = self.surfaces.insert(copy);
                seen.insert(surface_id);
                self.faces[index].surface = Some(surface_id);
            }

            if self.faces[index].reversed {
                let surface = &self.surfaces[surface_id];
                match surface.to_nurbs() {
                    Some(nurbs) => {
                        self.surfaces[surface_id] = SurfaceGeometry::Nurbs(nurbs.transpose());
                        self.faces[index].reversed = false;
                    }
                    None => log::debug!(
                        "face {} stays reversed: {} surface has no NURBS form",
                        index,
                        surface.kind_name()
                    ),
                }
            }
        }

        let mut seen_curves: HashSet<CurveId> = HashSet::new();
        let edge_ids: Vec<EdgeId> = self.edges.keys().collect();
        for edge_id in edge_ids {
            let Some(curve_id) = self.edges[edge_id].curve else {
                continue;
            };
            if !self.curves.contains_key(curve_id) || seen_curves.insert(curve_id) {
                continue;
            }
            let copy = self.curves[curve_id].clone();
            let new_id = self.curves.insert(copy);
            seen_curves.insert(new_id);
            self.edges[edge_id].curve = Some(new_id);
        }
    }

    /// Remove deleted faces and every sub-object nothing refers to.
    ///
    /// Face surface references that no longer resolve are cleared, so such
    /// faces read as faces without a surface.
    pub fn compact(&mut self) {
        let before = (self.faces.len(), self.surfaces.len(), self.edges.len());

        self.faces.retain(|f| !f.deleted);

        let surfaces = &self.surfaces;
        let edges = &self.edges;
        for face in &mut self.faces {
            if face.surface.is_some_and(|id| !surfaces.contains_key(id)) {
                face.surface = None;
            }
            for lp in &mut face.loops {
                lp.edges.retain(|u| edges.contains_key(u.edge));
            }
            face.loops.retain(|lp| !lp.edges.is_empty());
        }

        let used_surfaces: HashSet<SurfaceId> =
            self.faces.iter().filter_map(|f| f.surface).collect();
        self.surfaces.retain(|id, _| used_surfaces.contains(&id));

        let used_edges: HashSet<EdgeId> = self
            .faces
            .iter()
            .flat_map(|f| f.loops.iter())
            .flat_map(|lp| lp.edges.iter().map(|u| u.edge))
            .collect();
        self.edges.retain(|id, _| used_edges.contains(&id));

        let curves = &self.curves;
        for edge in self.edges.values_mut() {
            if edge.curve.is_some_and(|id| !curves.contains_key(id)) {
                edge.curve = None;
            }
        }
        let used_curves: HashSet<CurveId> = self.edges.values().filter_map(|e| e.curve).collect();
        self.curves.retain(|id, _| used_curves.contains(&id));

        let used_vertices: HashSet<VertexId> = self
            .edges
            .values()
            .flat_map(|e| [e.start, e.end])
            .collect();
        self.vertices.retain(|id, _| used_vertices.contains(&id));

        log::trace!(
            "compacted brep: faces {} -> {}, surfaces {} -> {}, edges {} -> {}",
            before.0,
            self.faces.len(),
            before.1,
            self.surfaces.len(),
            before.2,
            self.edges.len()
        );
    }

    /// [`Brep::standardize`] followed by [`Brep::compact`].
    pub fn canonicalize(&mut self) {
        self.standardize();
        self.compact();
        log::debug!(
            "canonicalized brep with {} faces and {} surfaces",
            self.faces.len(),
            self.surfaces.len()
        );
    }
}
