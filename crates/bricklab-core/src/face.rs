//! Face identifiers for box-shaped parts

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::pose::Pose;

/// One of the six fixed directions of a box-shaped part.
///
/// Each face carries a fixed outward normal in the part's local space and,
/// renderer-side, a fixed quad-corner template relative to half-extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    /// All six faces, in render order
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Outward normal in the part's local space
    pub fn normal(&self) -> Vec3 {
        match self {
            Face::Top => Vec3::Y,
            Face::Bottom => Vec3::NEG_Y,
            Face::Front => Vec3::Z,
            Face::Back => Vec3::NEG_Z,
            Face::Right => Vec3::X,
            Face::Left => Vec3::NEG_X,
        }
    }

    /// Outward direction in world space for a part at the given pose
    pub fn world_direction(&self, pose: &Pose) -> Vec3 {
        match self {
            Face::Front => pose.look_vector(),
            Face::Back => -pose.look_vector(),
            Face::Right => pose.right_vector(),
            Face::Left => -pose.right_vector(),
            Face::Top => pose.up_vector(),
            Face::Bottom => -pose.up_vector(),
        }
    }

    /// Slot index used by per-face storage
    pub(crate) fn index(&self) -> usize {
        match self {
            Face::Top => 0,
            Face::Bottom => 1,
            Face::Front => 2,
            Face::Back => 3,
            Face::Left => 4,
            Face::Right => 5,
        }
    }

    pub(crate) fn from_index(index: usize) -> Face {
        Face::ALL[index.min(5)]
    }

    /// Face name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Face::Top => "Top",
            Face::Bottom => "Bottom",
            Face::Front => "Front",
            Face::Back => "Back",
            Face::Left => "Left",
            Face::Right => "Right",
        }
    }
}
