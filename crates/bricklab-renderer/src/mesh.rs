//! CPU mesh batching device
//!
//! [`MeshDevice`] tessellates immediate-mode emission into indexed
//! vertex batches ready for upload by a retained-mode backend, while
//! tracking the device state the renderer is required to restore.

use glam::{Mat4, Vec2, Vec3};

use bricklab_core::Aabb;

use crate::device::{BlendMode, RenderDevice};
use crate::vertex::MeshVertex;

/// One batch of indexed triangles sharing blend state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    /// Blend state active while the batch was emitted
    pub blend: Option<BlendMode>,
}

impl MeshData {
    /// Bounding box of the batch
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| Vec3::from(v.position)))
    }

    /// Vertex data as bytes, for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes, for buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// A sphere draw recorded for context-side rasterization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereDraw {
    /// Center in world space
    pub center: Vec3,
    pub radius: f32,
    pub color: [f32; 4],
}

/// A `RenderDevice` that tessellates emission on the CPU.
///
/// Emitted quads become two indexed triangles carrying the current color
/// and the active object-to-world transform; batches split whenever the
/// blend state changes.
#[derive(Debug)]
pub struct MeshDevice {
    batches: Vec<MeshData>,
    spheres: Vec<SphereDraw>,
    depth_test: bool,
    blend: Option<BlendMode>,
    color: [f32; 4],
    transform: Mat4,
    light_depth: u32,
}

impl MeshDevice {
    pub fn new() -> Self {
        Self {
            batches: Vec::new(),
            spheres: Vec::new(),
            depth_test: false,
            blend: None,
            color: [1.0, 1.0, 1.0, 1.0],
            transform: Mat4::IDENTITY,
            light_depth: 0,
        }
    }

    /// Emitted triangle batches, in emission order
    pub fn batches(&self) -> &[MeshData] {
        &self.batches
    }

    /// Emitted sphere draws
    pub fn spheres(&self) -> &[SphereDraw] {
        &self.spheres
    }

    /// Current depth-test state
    pub fn depth_test(&self) -> bool {
        self.depth_test
    }

    /// Current blend state
    pub fn blend(&self) -> Option<BlendMode> {
        self.blend
    }

    /// Current draw color
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Open lighting scope count
    pub fn light_depth(&self) -> u32 {
        self.light_depth
    }

    /// Drop the recorded geometry, keeping device state
    pub fn clear(&mut self) {
        self.batches.clear();
        self.spheres.clear();
    }

    /// Batch compatible with the current blend state, starting a new one
    /// when the state changed since the last emission
    fn batch_mut(&mut self) -> &mut MeshData {
        let blend = self.blend;
        if self.batches.last().is_none_or(|b| b.blend != blend) {
            self.batches.push(MeshData {
                blend,
                ..MeshData::default()
            });
        }
        self.batches.last_mut().expect("batch just ensured")
    }

    fn emit_vertex(&self, position: Vec3, normal: Vec3, tex_coord: Vec2) -> MeshVertex {
        MeshVertex::new(
            self.transform.transform_point3(position),
            self.transform.transform_vector3(normal).normalize_or_zero(),
            tex_coord,
            self.color,
        )
    }
}

impl Default for MeshDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderDevice for MeshDevice {
    fn set_depth_test(&mut self, enabled: bool) {
        self.depth_test = enabled;
    }

    fn set_blend(&mut self, mode: Option<BlendMode>) {
        self.blend = mode;
    }

    fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    fn set_object_to_world(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    fn quad(&mut self, corners: [Vec3; 4], tex_coords: [Vec2; 4], normal: Vec3) {
        let vertices: Vec<MeshVertex> = corners
            .iter()
            .zip(tex_coords.iter())
            .map(|(&corner, &uv)| self.emit_vertex(corner, normal, uv))
            .collect();

        let batch = self.batch_mut();
        let base = batch.vertices.len() as u32;
        batch.vertices.extend(vertices);
        batch
            .indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    fn triangle(&mut self, corners: [Vec3; 3], normal: Vec3) {
        let vertices: Vec<MeshVertex> = corners
            .iter()
            .map(|&corner| self.emit_vertex(corner, normal, Vec2::ZERO))
            .collect();

        let batch = self.batch_mut();
        let base = batch.vertices.len() as u32;
        batch.vertices.extend(vertices);
        batch
            .indices
            .extend_from_slice(&[base, base + 1, base + 2]);
    }

    fn sphere(&mut self, center: Vec3, radius: f32, color: [f32; 4]) {
        self.spheres.push(SphereDraw {
            center: self.transform.transform_point3(center),
            radius,
            color,
        });
    }

    fn light_begin(&mut self, _position: Vec3, _falloff: f32) {
        self.light_depth += 1;
    }

    fn light_end(&mut self) {
        self.light_depth = self.light_depth.saturating_sub(1);
    }
}
