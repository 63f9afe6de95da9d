//! Bricklab Core Data Structures
//!
//! This crate contains the core data model for the bricklab world:
//! - Part: a solid with one of three shapes and six surfaced faces
//! - Surface/Decal: per-face behavior descriptors and overlays
//! - Weld: rigid couplings between parts
//! - World: part storage, ray queries and weld construction
//! - resolver: face adjacency resolution and surface coupling

pub mod bounds;
pub mod decal;
pub mod error;
pub mod face;
pub mod part;
pub mod pose;
pub mod ray;
pub mod resolver;
pub mod surface;
pub mod weld;
pub mod world;

pub use bounds::*;
pub use decal::*;
pub use error::*;
pub use face::*;
pub use part::*;
pub use pose::*;
pub use ray::*;
pub use resolver::*;
pub use surface::*;
pub use weld::*;
pub use world::*;
