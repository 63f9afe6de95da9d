//! Rendering context contract

use glam::{Mat4, Vec2, Vec3};

/// Blend state accepted by a rendering context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// srcAlpha over 1 - srcAlpha
    #[default]
    AlphaOver,
}

/// Immediate-mode rendering context consumed by the part renderer.
///
/// Implementations own the low-level rasterization (GPU submission, CPU
/// tessellation, test recording); the renderer only emits primitives and
/// state changes through this interface. Callers are required to leave
/// blend, depth and lighting state the way they found it — see the scope
/// guards in [`crate::scope`].
pub trait RenderDevice {
    /// Toggle depth testing
    fn set_depth_test(&mut self, enabled: bool);

    /// Set or clear the active blend mode
    fn set_blend(&mut self, mode: Option<BlendMode>);

    /// Set the current draw color (RGBA)
    fn set_color(&mut self, color: [f32; 4]);

    /// Set the object-to-world transform applied to subsequent emission
    fn set_object_to_world(&mut self, transform: Mat4);

    /// Emit one textured quad with a shared face normal.
    ///
    /// Texture coordinates map 1:1 onto the corners in winding order.
    fn quad(&mut self, corners: [Vec3; 4], tex_coords: [Vec2; 4], normal: Vec3);

    /// Emit one triangle with a shared normal
    fn triangle(&mut self, corners: [Vec3; 3], normal: Vec3);

    /// Emit a sphere, rasterized by the context
    fn sphere(&mut self, center: Vec3, radius: f32, color: [f32; 4]);

    /// Open a lighting scope bounded around `position`
    fn light_begin(&mut self, position: Vec3, falloff: f32);

    /// Close the innermost lighting scope
    fn light_end(&mut self);
}
