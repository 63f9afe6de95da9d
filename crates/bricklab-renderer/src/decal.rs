//! Decal rendering service contract

use bricklab_core::{Decal, Face, Part};

use crate::device::RenderDevice;

/// External rasterizer for decal overlays.
///
/// The part renderer resolves which decal to draw, the face it covers and
/// the tint it takes from the owning part; the service owns texture
/// binding and quad emission.
pub trait DecalRenderer {
    fn render(
        &mut self,
        device: &mut dyn RenderDevice,
        decal: &Decal,
        tint: [f32; 4],
        part: &Part,
        face: Face,
    );
}

/// Decal service that draws nothing, for contexts without decal support
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDecalRenderer;

impl DecalRenderer for NullDecalRenderer {
    fn render(
        &mut self,
        _device: &mut dyn RenderDevice,
        _decal: &Decal,
        _tint: [f32; 4],
        _part: &Part,
        _face: Face,
    ) {
    }
}
