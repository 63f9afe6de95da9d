//! Bricklab Part Renderer
//!
//! Device-abstracted rendering for bricklab parts.
//!
//! # Architecture
//!
//! - [`device::RenderDevice`] - Immediate-mode rendering context contract
//! - [`scope`] - Drop-restored render-state guards
//! - [`geometry`] - Procedural face and cylinder emission
//! - [`part_renderer::PartRenderer`] - Shape-dispatching part renderer
//! - [`mesh::MeshDevice`] - CPU tessellation into uploadable batches
//!
//! # Example
//!
//! ```
//! use bricklab_core::Part;
//! use bricklab_renderer::{MeshDevice, NullDecalRenderer, PartRenderer};
//!
//! let renderer = PartRenderer::new();
//! let mut device = MeshDevice::new();
//! let mut decals = NullDecalRenderer;
//!
//! renderer.render(&Part::new("brick"), &mut device, &mut decals);
//! assert!(!device.batches().is_empty());
//! ```

pub mod constants;
pub mod decal;
pub mod device;
pub mod geometry;
pub mod mesh;
pub mod part_renderer;
pub mod scope;
pub mod vertex;

pub use decal::{DecalRenderer, NullDecalRenderer};
pub use device::{BlendMode, RenderDevice};
pub use mesh::{MeshData, MeshDevice, SphereDraw};
pub use part_renderer::{FacePass, PartRenderer, PartRendererConfig};
pub use scope::{BlendScope, DepthScope, LightScope};
pub use vertex::MeshVertex;
