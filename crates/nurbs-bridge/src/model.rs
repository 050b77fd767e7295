//! Host model container: the append-only list of geometry components.

use nurbs_brep::Brep;
use nurbs_core::{ComponentId, NurbsError, Result};
use nurbs_geometry::{CurveGeometry, SurfaceGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Curve,
    Surface,
    Brep,
}

/// Geometry held by a model component, tagged with its kind.
#[derive(Debug, Clone)]
pub enum Geometry {
    Curve(CurveGeometry),
    Surface(SurfaceGeometry),
    Brep(Brep),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Curve(_) => GeometryKind::Curve,
            Self::Surface(_) => GeometryKind::Surface,
            Self::Brep(_) => GeometryKind::Brep,
        }
    }

    pub fn as_curve(&self) -> Option<&CurveGeometry> {
        match self {
            Self::Curve(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_surface(&self) -> Option<&SurfaceGeometry> {
        match self {
            Self::Surface(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_brep(&self) -> Option<&Brep> {
        match self {
            Self::Brep(b) => Some(b),
            _ => None,
        }
    }
}

impl From<CurveGeometry> for Geometry {
    fn from(curve: CurveGeometry) -> Self {
        Self::Curve(curve)
    }
}

impl From<SurfaceGeometry> for Geometry {
    fn from(surface: SurfaceGeometry) -> Self {
        Self::Surface(surface)
    }
}

impl From<Brep> for Geometry {
    fn from(brep: Brep) -> Self {
        Self::Brep(brep)
    }
}

#[derive(Debug, Clone)]
pub struct Component {
    pub id: ComponentId,
    pub geometry: Geometry,
}

/// Geometry components in registration order.
#[derive(Debug, Clone, Default)]
pub struct Model {
    components: Vec<Component>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `geometry` and return its handle.
    pub fn add_geometry_component(&mut self, geometry: impl Into<Geometry>) -> ComponentId {
        let id = ComponentId::new();
        self.components.push(Component {
            id,
            geometry: geometry.into(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub(crate) fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    pub fn get(&self, id: ComponentId) -> Result<&Geometry> {
        self.components
            .iter()
            .find(|c| c.id == id)
            .map(|c| &c.geometry)
            .ok_or_else(|| NurbsError::NotFound(format!("Component {} not found", id)))
    }

    /// Components of one kind, in registration order.
    pub fn of_kind(&self, kind: GeometryKind) -> impl Iterator<Item = &Component> {
        self.components
            .iter()
            .filter(move |c| c.geometry.kind() == kind)
    }
}
