//! B-Rep extraction: one surface document per face.

use nurbs_brep::Brep;
use serde_json::Value;

use crate::surface::extract_surface;

/// Canonicalize `brep` and export the surface of each face in order.
///
/// Faces without a surface, and faces whose surface has no NURBS form, are
/// skipped; the output holds only the faces that produced a document.
pub fn extract_brep(brep: &mut Brep) -> Vec<Value> {
    brep.canonicalize();

    let mut surfaces = Vec::new();
    for (index, face) in brep.face_iter() {
        let Some(surface) = brep.surface_of(face) else {
            log::debug!("face {} has no surface, skipping", index);
            continue;
        };
        match extract_surface(surface) {
            Some(data) => surfaces.push(data),
            None => log::debug!("face {} surface is not representable, skipping", index),
        }
    }
    log::trace!(
        "extracted {} of {} faces",
        surfaces.len(),
        brep.face_count()
    );
    surfaces
}
