//! Bounded rays for world queries

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bounded ray: the direction's length limits the query distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Maximum distance this ray reaches
    pub fn length(&self) -> f32 {
        self.direction.length()
    }

    /// Point at the given distance along the ray
    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction.normalize_or_zero() * distance
    }
}

/// Result of a world ray query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Part struck by the ray
    pub part: Uuid,
    /// Distance from the ray origin, world units
    pub distance: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_is_direction_magnitude() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
        assert_relative_eq!(ray.length(), 5.0);
    }

    #[test]
    fn test_point_at_walks_normalized_direction() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(ray.point_at(2.0), Vec3::new(3.0, 0.0, 0.0));
    }
}
