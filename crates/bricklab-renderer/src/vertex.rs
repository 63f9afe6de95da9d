//! Vertex format for CPU mesh batches

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Vertex layout produced by [`MeshDevice`](crate::mesh::MeshDevice)
/// batches, ready for upload by a retained-mode backend
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
    pub color: [f32; 4],
}

impl MeshVertex {
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            tex_coord: tex_coord.to_array(),
            color,
        }
    }
}
