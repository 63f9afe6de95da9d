//! Part definition

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bounds::Aabb;
use crate::decal::Decal;
use crate::pose::Pose;
use crate::surface::FaceSurfaces;
use crate::weld::Weld;

/// Solid shape of a part.
///
/// Exactly one shape value governs which draw path runs; the shape's
/// dimensions come from the part's `size` extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Box,
    Ball,
    Cylinder,
}

/// A child entity attached to a part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Attachment {
    Decal(Decal),
    Weld(Weld),
}

/// A renderable, potentially welded 3D solid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: Uuid,
    pub name: String,
    pub pose: Pose,
    /// Extents along each local axis; components are never negative
    pub size: Vec3,
    pub shape: Shape,
    /// Base color (RGB)
    pub color: [f32; 3],
    /// 0 = opaque, 1 = invisible; values above 1 skip blending entirely
    pub transparency: f32,
    /// Six optional per-face surface slots
    pub surfaces: FaceSurfaces,
    /// Attached child entities (decals, welds)
    pub attachments: Vec<Attachment>,
}

impl Part {
    /// Create a new part: a unit box at the origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            pose: Pose::default(),
            size: Vec3::ONE,
            shape: Shape::Box,
            color: [0.7, 0.7, 0.7],
            transparency: 0.0,
            surfaces: FaceSurfaces::new(),
            attachments: Vec::new(),
        }
    }

    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.pose.position = position;
        self
    }

    /// Set the extents, clamping negative components to zero
    pub fn with_size(mut self, size: Vec3) -> Self {
        self.size = size.max(Vec3::ZERO);
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_transparency(mut self, transparency: f32) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size / 2.0
    }

    /// Bounding box in the part's local space
    pub fn local_aabb(&self) -> Aabb {
        let half = self.half_extents();
        Aabb::new(-half, half)
    }

    /// Bounding box in world space
    pub fn world_aabb(&self) -> Aabb {
        self.local_aabb().transform(&self.pose.to_mat4())
    }

    /// Attach a child entity
    pub fn attach(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Attached decal children
    pub fn decals(&self) -> impl Iterator<Item = &Decal> {
        self.attachments.iter().filter_map(|a| match a {
            Attachment::Decal(decal) => Some(decal),
            _ => None,
        })
    }

    /// Attached weld children
    pub fn welds(&self) -> impl Iterator<Item = &Weld> {
        self.attachments.iter().filter_map(|a| match a {
            Attachment::Weld(weld) => Some(weld),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    #[test]
    fn test_new_part_is_opaque_unit_box() {
        let part = Part::new("brick");
        assert_eq!(part.shape, Shape::Box);
        assert_eq!(part.size, Vec3::ONE);
        assert_eq!(part.transparency, 0.0);
        assert!(part.surfaces.is_empty());
        assert!(part.attachments.is_empty());
    }

    #[test]
    fn test_negative_size_components_clamp_to_zero() {
        let part = Part::new("brick").with_size(Vec3::new(-1.0, 2.0, 3.0));
        assert_eq!(part.size, Vec3::new(0.0, 2.0, 3.0));
    }

    #[test]
    fn test_world_aabb_follows_pose() {
        let part = Part::new("brick")
            .with_size(Vec3::new(4.0, 2.0, 2.0))
            .with_position(Vec3::new(10.0, 0.0, 0.0));
        let aabb = part.world_aabb();
        assert_eq!(aabb.min, Vec3::new(8.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vec3::new(12.0, 1.0, 1.0));
    }

    #[test]
    fn test_world_aabb_covers_rotated_box() {
        // Quarter turn about Y swaps the X and Z extents
        let part = Part::new("brick")
            .with_size(Vec3::new(4.0, 2.0, 2.0))
            .with_pose(Pose::new(
                Vec3::ZERO,
                Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            ));
        let aabb = part.world_aabb();
        assert!((aabb.size().x - 2.0).abs() < 1e-5);
        assert!((aabb.size().z - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_attachment_filters() {
        let mut part = Part::new("brick");
        part.attach(Attachment::Decal(Decal::new("textures/logo.png")));
        part.attach(Attachment::Weld(Weld::new(Uuid::new_v4(), Uuid::new_v4())));
        part.attach(Attachment::Decal(Decal::new("textures/face.png")));

        assert_eq!(part.decals().count(), 2);
        assert_eq!(part.welds().count(), 1);
    }
}
