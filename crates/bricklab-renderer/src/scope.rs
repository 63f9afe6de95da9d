//! Drop-restored render-state guards
//!
//! The rendering context is a process-wide resource borrowed for the
//! duration of each render call; these guards give every piece of borrowed
//! state a scope so it is restored on all exit paths, early returns
//! included.

use std::ops::{Deref, DerefMut};

use glam::Vec3;

use crate::device::{BlendMode, RenderDevice};

/// Enables depth testing for the lifetime of the guard
pub struct DepthScope<'a> {
    device: &'a mut dyn RenderDevice,
}

impl<'a> DepthScope<'a> {
    pub fn begin(device: &'a mut dyn RenderDevice) -> Self {
        device.set_depth_test(true);
        Self { device }
    }
}

impl Drop for DepthScope<'_> {
    fn drop(&mut self) {
        self.device.set_depth_test(false);
    }
}

impl<'a> Deref for DepthScope<'a> {
    type Target = dyn RenderDevice + 'a;

    fn deref(&self) -> &Self::Target {
        self.device
    }
}

impl<'a> DerefMut for DepthScope<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.device
    }
}

/// Opens a lighting scope bounded around a position, closed on drop
pub struct LightScope<'a> {
    device: &'a mut dyn RenderDevice,
}

impl<'a> LightScope<'a> {
    pub fn begin(device: &'a mut dyn RenderDevice, position: Vec3, falloff: f32) -> Self {
        device.light_begin(position, falloff);
        Self { device }
    }
}

impl Drop for LightScope<'_> {
    fn drop(&mut self) {
        self.device.light_end();
    }
}

impl<'a> Deref for LightScope<'a> {
    type Target = dyn RenderDevice + 'a;

    fn deref(&self) -> &Self::Target {
        self.device
    }
}

impl<'a> DerefMut for LightScope<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.device
    }
}

/// Sets a blend mode, restoring the no-blend state on drop
pub struct BlendScope<'a> {
    device: &'a mut dyn RenderDevice,
}

impl<'a> BlendScope<'a> {
    pub fn begin(device: &'a mut dyn RenderDevice, mode: BlendMode) -> Self {
        device.set_blend(Some(mode));
        Self { device }
    }
}

impl Drop for BlendScope<'_> {
    fn drop(&mut self) {
        self.device.set_blend(None);
    }
}

impl<'a> Deref for BlendScope<'a> {
    type Target = dyn RenderDevice + 'a;

    fn deref(&self) -> &Self::Target {
        self.device
    }
}

impl<'a> DerefMut for BlendScope<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.device
    }
}
