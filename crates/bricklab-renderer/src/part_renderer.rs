//! Shape-dispatching part renderer
//!
//! Selects the box/ball/cylinder draw path for a part, manages depth,
//! blend and lighting state through scope guards, and renders box faces
//! with their per-face texture coordinates and surface overlays.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use bricklab_core::{Attachment, DEFAULT_TEX_COORDS, Face, Part, Shape, SurfaceKind};

use crate::constants::{lighting, proportion, tessellation};
use crate::decal::DecalRenderer;
use crate::device::{BlendMode, RenderDevice};
use crate::geometry;
use crate::scope::{BlendScope, DepthScope, LightScope};

/// Part renderer tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartRendererConfig {
    /// Angular tessellation of cylinder parts
    pub cylinder_segments: u32,
    /// Falloff radius of the per-part lighting scope
    pub light_falloff: f32,
}

impl Default for PartRendererConfig {
    fn default() -> Self {
        Self {
            cylinder_segments: tessellation::CYLINDER_SEGMENTS,
            light_falloff: lighting::FALLOFF_RADIUS,
        }
    }
}

/// Which pass a face is being drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FacePass {
    /// Part of an alpha overlay pass: blend state is left alone
    pub is_alpha: bool,
    /// Drawing a decal overlay: the current color is left alone
    pub is_decal: bool,
}

/// Shape dispatch data; each arm carries only what its draw path needs
#[derive(Debug, Clone, Copy, PartialEq)]
enum DrawShape {
    Box,
    Ball { radius: f32 },
    Cylinder { radius: f32, length: f32 },
}

impl DrawShape {
    fn for_part(part: &Part) -> Self {
        match part.shape {
            Shape::Box => DrawShape::Box,
            Shape::Ball => DrawShape::Ball {
                radius: part.size.y / 2.0,
            },
            Shape::Cylinder => DrawShape::Cylinder {
                radius: part.size.z / 2.0,
                length: part.size.y / proportion::CYLINDER_CAP_EPSILON,
            },
        }
    }
}

/// Renders parts against a [`RenderDevice`] and a [`DecalRenderer`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PartRenderer {
    config: PartRendererConfig,
}

impl PartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PartRendererConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PartRendererConfig {
        &self.config
    }

    /// Render one part.
    ///
    /// Depth testing and a lighting scope bounded by the part's region are
    /// held for the whole call and released on every exit path.
    pub fn render(
        &self,
        part: &Part,
        device: &mut dyn RenderDevice,
        decals: &mut dyn DecalRenderer,
    ) {
        let mut depth = DepthScope::begin(device);
        let center = part.pose.position + part.half_extents();
        let mut light = LightScope::begin(&mut *depth, center, self.config.light_falloff);
        let device = &mut *light;

        device.set_object_to_world(part.pose.to_mat4());

        match DrawShape::for_part(part) {
            DrawShape::Box => {
                for face in Face::ALL {
                    self.render_face(part, face, FacePass::default(), device, decals);
                }
                for attachment in &part.attachments {
                    if let Attachment::Decal(decal) = attachment {
                        decals.render(device, decal, part_tint(part), part, decal.face);
                    }
                }
            }
            DrawShape::Ball { radius } => {
                device.sphere(Vec3::ZERO, radius, part_tint(part));
            }
            DrawShape::Cylinder { radius, length } => {
                geometry::emit_cylinder(
                    device,
                    part_tint(part),
                    radius,
                    length,
                    self.config.cylinder_segments,
                );
            }
        }
    }

    /// Render one face of a box part.
    ///
    /// Each face emits exactly one quad. Outside alpha passes this manages
    /// blend state for part transparency and finishes with the face's
    /// surface overlay.
    pub fn render_face(
        &self,
        part: &Part,
        face: Face,
        pass: FacePass,
        device: &mut dyn RenderDevice,
        decals: &mut dyn DecalRenderer,
    ) {
        let mut half = part.half_extents();
        half.y /= proportion::HEIGHT_CORRECTION;

        let blending = !pass.is_alpha && part.transparency <= 1.0;
        let alpha = if blending {
            1.0 - part.transparency
        } else {
            1.0
        };

        if blending {
            let mut blend = BlendScope::begin(device, BlendMode::AlphaOver);
            self.emit_face_quad(part, face, half, alpha, pass, &mut *blend);
        } else {
            self.emit_face_quad(part, face, half, alpha, pass, device);
        }

        if !pass.is_alpha {
            self.render_overlay(part, face, device, decals);
        }
    }

    fn emit_face_quad(
        &self,
        part: &Part,
        face: Face,
        half: Vec3,
        alpha: f32,
        pass: FacePass,
        device: &mut dyn RenderDevice,
    ) {
        if !pass.is_decal {
            device.set_color([part.color[0], part.color[1], part.color[2], alpha]);
        }

        let corners = geometry::face_corners(face, half);
        let tex_coords = match part.surfaces.get(face) {
            Some(surface) => surface.tex_coords(face, half, pass.is_decal),
            None => DEFAULT_TEX_COORDS,
        };
        device.quad(corners, tex_coords, geometry::quad_normal(&corners));
    }

    /// Draw the decal overlay for a face's surface.
    ///
    /// No surface, a Smooth surface or a surface without a decal draws
    /// nothing.
    fn render_overlay(
        &self,
        part: &Part,
        face: Face,
        device: &mut dyn RenderDevice,
        decals: &mut dyn DecalRenderer,
    ) {
        let Some(surface) = part.surfaces.get(face) else {
            return;
        };
        if surface.kind == SurfaceKind::Smooth {
            return;
        }
        let Some(decal) = &surface.decal else {
            tracing::debug!(
                "{:?} surface on {} face of '{}' has no overlay decal",
                surface.kind,
                face.name(),
                part.name
            );
            return;
        };

        decals.render(device, decal, part_tint(part), part, face);
    }
}

/// Part color as an opaque RGBA tint
fn part_tint(part: &Part) -> [f32; 4] {
    [part.color[0], part.color[1], part.color[2], 1.0]
}
