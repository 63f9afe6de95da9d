//! Procedural geometry emission
//!
//! Stateless generators for the primitive shapes: per-face box quads and
//! capped cylinders. All output goes straight to the active render device.

use glam::{Vec2, Vec3};

use bricklab_core::Face;

use crate::device::RenderDevice;

/// Corner positions for a box face, scaled by half-extents.
///
/// The templates wind counter-clockwise seen from outside the box, so
/// [`quad_normal`] always points outward. This corner order and the
/// matching per-vertex texture coordinate order are a fixed contract.
pub fn face_corners(face: Face, half: Vec3) -> [Vec3; 4] {
    let (x, y, z) = (half.x, half.y, half.z);
    match face {
        Face::Top => [
            Vec3::new(x, y, -z),
            Vec3::new(-x, y, -z),
            Vec3::new(-x, y, z),
            Vec3::new(x, y, z),
        ],
        Face::Bottom => [
            Vec3::new(x, -y, z),
            Vec3::new(-x, -y, z),
            Vec3::new(-x, -y, -z),
            Vec3::new(x, -y, -z),
        ],
        Face::Front => [
            Vec3::new(x, y, z),
            Vec3::new(-x, y, z),
            Vec3::new(-x, -y, z),
            Vec3::new(x, -y, z),
        ],
        Face::Back => [
            Vec3::new(x, -y, -z),
            Vec3::new(-x, -y, -z),
            Vec3::new(-x, y, -z),
            Vec3::new(x, y, -z),
        ],
        Face::Left => [
            Vec3::new(-x, y, z),
            Vec3::new(-x, y, -z),
            Vec3::new(-x, -y, -z),
            Vec3::new(-x, -y, z),
        ],
        Face::Right => [
            Vec3::new(x, y, -z),
            Vec3::new(x, y, z),
            Vec3::new(x, -y, z),
            Vec3::new(x, -y, -z),
        ],
    }
}

/// Face normal implied by a quad's winding: the normalized cross product
/// of the first two edges
pub fn quad_normal(corners: &[Vec3; 4]) -> Vec3 {
    (corners[1] - corners[0])
        .cross(corners[2] - corners[0])
        .normalize_or_zero()
}

/// Emit a capped cylinder centered at the local origin, axis along X.
///
/// The lateral surface is built from `segments` angular steps of quads;
/// each cap is a triangle fan. Pure emission, no retained state.
pub fn emit_cylinder(
    device: &mut dyn RenderDevice,
    color: [f32; 4],
    radius: f32,
    length: f32,
    segments: u32,
) {
    let segments = segments.max(3);
    device.set_color(color);

    let half = length / 2.0;
    let step = std::f32::consts::TAU / segments as f32;
    let ring_point = |theta: f32| Vec3::new(0.0, radius * theta.cos(), radius * theta.sin());

    for i in 0..segments {
        let theta0 = i as f32 * step;
        let theta1 = (i + 1) as f32 * step;
        let p0 = ring_point(theta0);
        let p1 = ring_point(theta1);

        // Lateral quad, outward normal at the segment midpoint
        let mid = (theta0 + theta1) / 2.0;
        let normal = Vec3::new(0.0, mid.cos(), mid.sin());
        let u0 = i as f32 / segments as f32;
        let u1 = (i + 1) as f32 / segments as f32;
        device.quad(
            [
                Vec3::new(-half, p0.y, p0.z),
                Vec3::new(-half, p1.y, p1.z),
                Vec3::new(half, p1.y, p1.z),
                Vec3::new(half, p0.y, p0.z),
            ],
            [
                Vec2::new(u0, 0.0),
                Vec2::new(u1, 0.0),
                Vec2::new(u1, 1.0),
                Vec2::new(u0, 1.0),
            ],
            normal,
        );

        // Caps: fans around each end center
        device.triangle(
            [
                Vec3::new(half, 0.0, 0.0),
                Vec3::new(half, p0.y, p0.z),
                Vec3::new(half, p1.y, p1.z),
            ],
            Vec3::X,
        );
        device.triangle(
            [
                Vec3::new(-half, 0.0, 0.0),
                Vec3::new(-half, p1.y, p1.z),
                Vec3::new(-half, p0.y, p0.z),
            ],
            Vec3::NEG_X,
        );
    }
}
