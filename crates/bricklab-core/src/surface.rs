//! Per-face surface descriptors

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::decal::Decal;
use crate::face::Face;

/// Physical behavior of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// No overlay, no coupling
    #[default]
    Smooth,
    /// Rigidly couples to the adjacent part
    Weld,
    /// Sticks to the adjacent part
    Glue,
    /// Raised studs
    Studs,
    /// Stud sockets
    Inlet,
}

impl SurfaceKind {
    /// Texture drawn as this surface's overlay, if it has one
    pub fn overlay_texture(&self) -> Option<&'static str> {
        match self {
            SurfaceKind::Smooth => None,
            SurfaceKind::Weld => Some("textures/weld.png"),
            SurfaceKind::Glue => Some("textures/glue.png"),
            SurfaceKind::Studs => Some("textures/studs.png"),
            SurfaceKind::Inlet => Some("textures/inlet.png"),
        }
    }
}

/// The default 0..1 texture mapping applied when a surface has no custom
/// coordinate source
pub const DEFAULT_TEX_COORDS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// How a surface generates texture coordinates for its face quad
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TexCoordSource {
    /// Stretch the texture 0..1 across the face
    Unit,
    /// Repeat the texture every `spacing` world units (studs, inlets)
    Tiled { spacing: f32 },
}

/// Per-face behavior descriptor: surface type plus optional overlay decal.
///
/// A `Surface` is owned by exactly one `(Part, Face)` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub kind: SurfaceKind,
    /// Overlay decal, rendered only for non-Smooth kinds
    pub decal: Option<Decal>,
    /// Texture coordinate generator; `None` falls back to the unit mapping
    pub tex_source: Option<TexCoordSource>,
}

impl Surface {
    /// Create a surface of the given kind with its default overlay decal
    pub fn new(kind: SurfaceKind) -> Self {
        Self {
            kind,
            decal: kind.overlay_texture().map(Decal::new),
            tex_source: None,
        }
    }

    pub fn with_decal(mut self, decal: Decal) -> Self {
        self.decal = Some(decal);
        self
    }

    pub fn with_tex_source(mut self, source: TexCoordSource) -> Self {
        self.tex_source = Some(source);
        self
    }

    /// Texture coordinates for this face's quad, one per template corner.
    ///
    /// Decal overlay passes always stretch 0..1. Otherwise the configured
    /// source decides; a surface with no source falls back to the unit
    /// mapping.
    pub fn tex_coords(&self, face: Face, half: Vec3, for_decal: bool) -> [Vec2; 4] {
        if for_decal {
            return DEFAULT_TEX_COORDS;
        }
        match self.tex_source {
            Some(TexCoordSource::Unit) => DEFAULT_TEX_COORDS,
            Some(TexCoordSource::Tiled { spacing }) => {
                let (width, height) = face_extents(face, half);
                let repeats = Vec2::new(width, height) / spacing.max(f32::EPSILON);
                DEFAULT_TEX_COORDS.map(|uv| uv * repeats)
            }
            None => {
                tracing::debug!(
                    "no texture coordinate source for {} face, using unit mapping",
                    face.name()
                );
                DEFAULT_TEX_COORDS
            }
        }
    }
}

/// Full extents of a face quad, (width, height)
fn face_extents(face: Face, half: Vec3) -> (f32, f32) {
    match face {
        Face::Top | Face::Bottom => (half.x * 2.0, half.z * 2.0),
        Face::Front | Face::Back => (half.x * 2.0, half.y * 2.0),
        Face::Left | Face::Right => (half.z * 2.0, half.y * 2.0),
    }
}

/// Per-part storage of the six face surface slots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceSurfaces {
    slots: [Option<Surface>; 6],
}

impl FaceSurfaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, face: Face) -> Option<&Surface> {
        self.slots[face.index()].as_ref()
    }

    pub fn get_mut(&mut self, face: Face) -> Option<&mut Surface> {
        self.slots[face.index()].as_mut()
    }

    /// Assign a surface to a face, replacing any previous one
    pub fn set(&mut self, face: Face, surface: Surface) -> Option<Surface> {
        self.slots[face.index()].replace(surface)
    }

    pub fn clear(&mut self, face: Face) -> Option<Surface> {
        self.slots[face.index()].take()
    }

    /// Configured faces and their surfaces
    pub fn iter(&self) -> impl Iterator<Item = (Face, &Surface)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|s| (Face::from_index(i), s)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_smooth_surface_has_no_overlay() {
        let surface = Surface::new(SurfaceKind::Smooth);
        assert!(surface.decal.is_none());
    }

    #[test]
    fn test_non_smooth_surfaces_get_default_overlay() {
        for kind in [
            SurfaceKind::Weld,
            SurfaceKind::Glue,
            SurfaceKind::Studs,
            SurfaceKind::Inlet,
        ] {
            let surface = Surface::new(kind);
            assert!(surface.decal.is_some(), "{:?} should carry an overlay", kind);
        }
    }

    #[test]
    fn test_tex_coords_fall_back_to_unit_mapping() {
        let surface = Surface::new(SurfaceKind::Studs);
        let coords = surface.tex_coords(Face::Top, Vec3::new(2.0, 0.6, 1.0), false);
        assert_eq!(coords, DEFAULT_TEX_COORDS);
    }

    #[test]
    fn test_decal_pass_always_stretches() {
        let surface =
            Surface::new(SurfaceKind::Studs).with_tex_source(TexCoordSource::Tiled { spacing: 1.0 });
        let coords = surface.tex_coords(Face::Top, Vec3::new(2.0, 0.6, 1.0), true);
        assert_eq!(coords, DEFAULT_TEX_COORDS);
    }

    #[test]
    fn test_tiled_coords_repeat_by_face_extent() {
        let surface =
            Surface::new(SurfaceKind::Studs).with_tex_source(TexCoordSource::Tiled { spacing: 1.0 });
        // Top face of a 4 x 1.2 x 2 part: 4 repeats across, 2 repeats deep
        let coords = surface.tex_coords(Face::Top, Vec3::new(2.0, 0.6, 1.0), false);
        assert_relative_eq!(coords[2].x, 4.0);
        assert_relative_eq!(coords[2].y, 2.0);
    }

    #[test]
    fn test_slots_store_and_clear() {
        let mut surfaces = FaceSurfaces::new();
        assert!(surfaces.is_empty());

        surfaces.set(Face::Top, Surface::new(SurfaceKind::Studs));
        surfaces.set(Face::Bottom, Surface::new(SurfaceKind::Inlet));

        assert_eq!(surfaces.get(Face::Top).unwrap().kind, SurfaceKind::Studs);
        assert!(surfaces.get(Face::Front).is_none());
        assert_eq!(surfaces.iter().count(), 2);

        let removed = surfaces.clear(Face::Top).unwrap();
        assert_eq!(removed.kind, SurfaceKind::Studs);
        assert!(surfaces.get(Face::Top).is_none());
    }
}
