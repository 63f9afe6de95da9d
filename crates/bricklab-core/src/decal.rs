//! Textured face overlays

use serde::{Deserialize, Serialize};

use crate::face::Face;

/// A textured overlay bound to a face.
///
/// Decals live in two places: owned by a non-Smooth [`Surface`] slot as its
/// overlay, or attached directly to a part as a child entity. The tint is
/// derived from the owning part's color at render time.
///
/// [`Surface`]: crate::surface::Surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decal {
    /// Texture asset reference
    pub texture: String,
    /// Color tint, refreshed from the owning part's color when rendered
    pub color: [f32; 4],
    /// Face the decal covers when attached directly to a part
    pub face: Face,
}

impl Decal {
    pub fn new(texture: impl Into<String>) -> Self {
        Self {
            texture: texture.into(),
            color: [1.0, 1.0, 1.0, 1.0],
            face: Face::Front,
        }
    }

    /// Set the face covered when attached directly to a part
    pub fn with_face(mut self, face: Face) -> Self {
        self.face = face;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_white_front() {
        let decal = Decal::new("textures/logo.png");
        assert_eq!(decal.color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(decal.face, Face::Front);
    }

    #[test]
    fn test_with_face() {
        let decal = Decal::new("textures/logo.png").with_face(Face::Top);
        assert_eq!(decal.face, Face::Top);
    }
}
