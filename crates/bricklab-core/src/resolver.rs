//! Face adjacency resolution and surface coupling
//!
//! Discovers the part adjacent to a face by casting a ray along the face's
//! outward world direction, then applies the coupling the face's surface
//! implies (currently: Weld).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::face::Face;
use crate::ray::Ray;
use crate::surface::SurfaceKind;
use crate::world::World;

/// Overshoot applied to the face ray so it exits the source part's volume
const RAY_OVERSHOOT: f32 = 1.1;

/// Per-part adjacency sweep configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Run the six-face sweep; off by default
    pub enabled: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { enabled: false }
    }
}

/// Find the part adjacent to the given face, if any.
///
/// The ray starts at the part's world position and reaches just past the
/// face itself. The source part is excluded from the candidates; an
/// unknown part id resolves to no neighbor.
pub fn connected_part(world: &World, part_id: Uuid, face: Face) -> Option<Uuid> {
    let part = world.part(part_id)?;
    let half = part.half_extents();
    let reach = match face {
        Face::Top | Face::Bottom => half.y,
        Face::Front | Face::Back => half.z,
        Face::Left | Face::Right => half.x,
    };
    let direction = face.world_direction(&part.pose) * (reach * RAY_OVERSHOOT);
    let ray = Ray::new(part.pose.position, direction);

    let hit = world.cast_ray(&ray, &[part_id])?;
    tracing::trace!(
        "{} face of '{}' touches '{}' at {:.3}",
        face.name(),
        part.name,
        world.part(hit.part).map(|p| p.name.as_str()).unwrap_or("?"),
        hit.distance
    );
    Some(hit.part)
}

/// Apply the coupling implied by `a`'s surface on `face` to a resolved
/// neighbor.
///
/// Only Weld surfaces couple; any other kind, a missing surface, a missing
/// part or an absent neighbor is a no-op. Returns the created weld's id.
pub fn apply_surface(world: &mut World, a: Uuid, b: Option<Uuid>, face: Face) -> Option<Uuid> {
    let b = b?;
    let kind = world.part(a)?.surfaces.get(face)?.kind;

    match kind {
        SurfaceKind::Weld => match world.weld(a, b) {
            Ok(id) => {
                tracing::debug!("welded '{}' to '{}' across the {} face", a, b, face.name());
                Some(id)
            }
            Err(e) => {
                tracing::debug!("weld rejected: {}", e);
                None
            }
        },
        _ => None,
    }
}

/// Resolve and couple the neighbors of all six faces of a part.
///
/// Gated by [`SweepConfig`]; the sweep is off by default and a disabled
/// sweep leaves the world untouched. Returns the welds created.
pub fn sweep(world: &mut World, part_id: Uuid, config: &SweepConfig) -> Vec<Uuid> {
    if !config.enabled {
        tracing::trace!("adjacency sweep disabled, skipping part {}", part_id);
        return Vec::new();
    }

    let mut welds = Vec::new();
    for face in Face::ALL {
        let neighbor = connected_part(world, part_id, face);
        if let Some(weld) = apply_surface(world, part_id, neighbor, face) {
            welds.push(weld);
        }
    }
    welds
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    use crate::part::Part;
    use crate::surface::Surface;

    /// Two 4 x 1.2 x 2 boxes side by side along X, touching at x = 2
    fn adjacent_pair(world: &mut World) -> (Uuid, Uuid) {
        let size = Vec3::new(4.0, 1.2, 2.0);
        let a = world.insert(Part::new("a").with_size(size));
        let b = world.insert(
            Part::new("b")
                .with_size(size)
                .with_position(Vec3::new(4.0, 0.0, 0.0)),
        );
        (a, b)
    }

    #[test]
    fn test_connected_part_finds_adjacent_box() {
        let mut world = World::new();
        let (a, b) = adjacent_pair(&mut world);
        assert_eq!(connected_part(&world, a, Face::Right), Some(b));
        assert_eq!(connected_part(&world, b, Face::Left), Some(a));
    }

    #[test]
    fn test_connected_part_excludes_self() {
        let mut world = World::new();
        let (a, _) = adjacent_pair(&mut world);
        // Left of `a` there is nothing; without the self-exclusion the
        // ray would report `a` itself (the origin sits inside it).
        assert_eq!(connected_part(&world, a, Face::Left), None);
    }

    #[test]
    fn test_connected_part_none_for_empty_direction() {
        let mut world = World::new();
        let (a, _) = adjacent_pair(&mut world);
        assert_eq!(connected_part(&world, a, Face::Top), None);
    }

    #[test]
    fn test_connected_part_unknown_id_is_none() {
        let world = World::new();
        assert_eq!(connected_part(&world, Uuid::new_v4(), Face::Front), None);
    }

    #[test]
    fn test_apply_surface_welds_only_weld_kind() {
        let mut world = World::new();
        let (a, b) = adjacent_pair(&mut world);
        world
            .part_mut(a)
            .unwrap()
            .surfaces
            .set(Face::Right, Surface::new(SurfaceKind::Studs));

        assert_eq!(apply_surface(&mut world, a, Some(b), Face::Right), None);
        assert_eq!(world.part(a).unwrap().welds().count(), 0);
    }

    #[test]
    fn test_apply_surface_absent_neighbor_is_noop() {
        let mut world = World::new();
        let (a, _) = adjacent_pair(&mut world);
        world
            .part_mut(a)
            .unwrap()
            .surfaces
            .set(Face::Right, Surface::new(SurfaceKind::Weld));

        assert_eq!(apply_surface(&mut world, a, None, Face::Right), None);
        assert_eq!(world.part(a).unwrap().welds().count(), 0);
    }

    #[test]
    fn test_apply_surface_missing_surface_is_noop() {
        let mut world = World::new();
        let (a, b) = adjacent_pair(&mut world);
        assert_eq!(apply_surface(&mut world, a, Some(b), Face::Right), None);
    }

    #[test]
    fn test_sweep_disabled_by_default() {
        assert!(!SweepConfig::default().enabled);

        let mut world = World::new();
        let (a, b) = adjacent_pair(&mut world);
        for id in [a, b] {
            world
                .part_mut(id)
                .unwrap()
                .surfaces
                .set(Face::Right, Surface::new(SurfaceKind::Weld));
        }

        let welds = sweep(&mut world, a, &SweepConfig::default());
        assert!(welds.is_empty());
        assert_eq!(world.part(a).unwrap().welds().count(), 0);
    }

    #[test]
    fn test_sweep_welds_adjacent_parts_once() {
        let mut world = World::new();
        let (a, b) = adjacent_pair(&mut world);
        world
            .part_mut(a)
            .unwrap()
            .surfaces
            .set(Face::Right, Surface::new(SurfaceKind::Weld));
        world
            .part_mut(b)
            .unwrap()
            .surfaces
            .set(Face::Left, Surface::new(SurfaceKind::Weld));

        let welds = sweep(&mut world, a, &SweepConfig { enabled: true });
        assert_eq!(welds.len(), 1);

        let part_a = world.part(a).unwrap();
        let weld = part_a.welds().next().unwrap();
        assert!(weld.involves(a));
        assert!(weld.involves(b));
        assert_eq!(world.part(b).unwrap().welds().count(), 0);
    }
}
