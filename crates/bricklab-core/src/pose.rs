//! Rigid transform type

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of a part in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Object-to-world matrix for this pose
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Forward axis in world space (local +Z, the Front face direction)
    pub fn look_vector(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Right axis in world space (local +X)
    pub fn right_vector(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Up axis in world space (local +Y)
    pub fn up_vector(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Transform a local point into world space
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_axes() {
        let pose = Pose::default();
        assert_eq!(pose.look_vector(), Vec3::Z);
        assert_eq!(pose.right_vector(), Vec3::X);
        assert_eq!(pose.up_vector(), Vec3::Y);
    }

    #[test]
    fn test_rotated_axes() {
        // Quarter turn about Y maps +Z onto +X
        let pose = Pose::new(
            Vec3::ZERO,
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        let look = pose.look_vector();
        assert_relative_eq!(look.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(look.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_transform_point_translates() {
        let pose = Pose::from_position(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(pose.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_to_mat4_matches_transform_point() {
        let pose = Pose::new(
            Vec3::new(5.0, -1.0, 2.0),
            Quat::from_rotation_z(0.7),
        );
        let p = Vec3::new(1.0, 2.0, 3.0);
        let via_mat = pose.to_mat4().transform_point3(p);
        let via_pose = pose.transform_point(p);
        assert_relative_eq!(via_mat.x, via_pose.x, epsilon = 1e-5);
        assert_relative_eq!(via_mat.y, via_pose.y, epsilon = 1e-5);
        assert_relative_eq!(via_mat.z, via_pose.z, epsilon = 1e-5);
    }
}
