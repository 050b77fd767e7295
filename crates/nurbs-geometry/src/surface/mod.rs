//! Surface kinds and their NURBS canonical form.

mod cylindrical;
mod nurbs;
mod planar;

use serde::{Deserialize, Serialize};

pub use cylindrical::CylindricalSurface;
pub use nurbs::NurbsSurface;
pub use planar::PlanarSurface;

use crate::nurbs::ToNurbs;

/// Closed set of surface kinds held by the kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceGeometry {
    Planar(PlanarSurface),
    Cylindrical(CylindricalSurface),
    Nurbs(NurbsSurface),
}

impl SurfaceGeometry {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Planar(_) => "planar",
            Self::Cylindrical(_) => "cylindrical",
            Self::Nurbs(_) => "nurbs",
        }
    }
}

impl ToNurbs for SurfaceGeometry {
    type Output = NurbsSurface;

    fn to_nurbs(&self) -> Option<NurbsSurface> {
        match self {
            Self::Planar(s) => s.to_nurbs(),
            Self::Cylindrical(s) => s.to_nurbs(),
            Self::Nurbs(s) => Some(s.clone()),
        }
    }
}

impl From<NurbsSurface> for SurfaceGeometry {
    fn from(surface: NurbsSurface) -> Self {
        Self::Nurbs(surface)
    }
}

impl From<PlanarSurface> for SurfaceGeometry {
    fn from(surface: PlanarSurface) -> Self {
        Self::Planar(surface)
    }
}

impl From<CylindricalSurface> for SurfaceGeometry {
    fn from(surface: CylindricalSurface) -> Self {
        Self::Cylindrical(surface)
    }
}
