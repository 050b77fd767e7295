use nurbs_core::error::{NurbsError, Result};
use nurbs_core::traits::Validate;

use super::brep::Brep;

impl Validate for Brep {
    fn validate(&self) -> Result<()> {
        // 1. Faces reference existing surfaces and edges
        for (index, face) in self.faces.iter().enumerate() {
            if let Some(surface_id) = face.surface {
                if !self.surfaces.contains_key(surface_id) {
                    return Err(NurbsError::Topology(format!(
                        "Face {} references non-existent surface {:?}",
                        index, surface_id
                    )));
                }
            }

            for (loop_index, lp) in face.loops.iter().enumerate() {
                if lp.edges.is_empty() {
                    return Err(NurbsError::Topology(format!(
                        "Face {} loop {} has no edges",
                        index, loop_index
                    )));
                }
                if let Some(edge_use) = lp.edges.iter().find(|u| !self.edges.contains_key(u.edge)) {
                    return Err(NurbsError::Topology(format!(
                        "Face {} loop {} uses non-existent edge {:?}",
                        index, loop_index, edge_use.edge
                    )));
                }
            }
        }

        // 2. Edges reference existing vertices and curves
        for (edge_id, edge) in &self.edges {
            for vertex_id in [edge.start, edge.end] {
                if !self.vertices.contains_key(vertex_id) {
                    return Err(NurbsError::Topology(format!(
                        "Edge {:?} references non-existent vertex {:?}",
                        edge_id, vertex_id
                    )));
                }
            }
            if let Some(curve_id) = edge.curve {
                if !self.curves.contains_key(curve_id) {
                    return Err(NurbsError::Topology(format!(
                        "Edge {:?} references non-existent curve {:?}",
                        edge_id, curve_id
                    )));
                }
            }
        }

        Ok(())
    }
}
