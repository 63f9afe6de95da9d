//! Renderer tuning constants

/// Geometry tessellation
pub mod tessellation {
    /// Angular segments for cylinder lateral surfaces and caps
    pub const CYLINDER_SEGMENTS: u32 = 12;
}

/// Lighting scope defaults
pub mod lighting {
    /// Falloff radius of the per-part light scope, world units
    pub const FALLOFF_RADIUS: f32 = 200.0;
}

/// Shape proportion adjustments
pub mod proportion {
    /// Divisor applied to the vertical half-extent of box faces.
    ///
    /// A visual proportion adjustment, not a geometric half-size.
    pub const HEIGHT_CORRECTION: f32 = 1.2;

    /// Near-one divisor applied to cylinder length so the caps sit a hair
    /// inside the lateral surface instead of z-fighting with it.
    pub const CYLINDER_CAP_EPSILON: f32 = 1.0001;
}
