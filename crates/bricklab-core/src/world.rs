//! World container: part storage, ray queries and weld construction

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::WorldError;
use crate::part::{Attachment, Part};
use crate::ray::{Ray, RayHit};
use crate::weld::Weld;

/// All parts in the scene, with ownership of their attached children.
///
/// The world is the single source of truth for part state and answers the
/// ray queries that drive surface adjacency resolution.
#[derive(Debug, Clone, Default)]
pub struct World {
    parts: HashMap<Uuid, Part>,
    name_index: HashMap<String, Uuid>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part to the world
    pub fn insert(&mut self, part: Part) -> Uuid {
        let id = part.id;
        self.name_index.insert(part.name.clone(), id);
        self.parts.insert(id, part);
        id
    }

    /// Remove a part; welds owned by other parts are left to the caller
    pub fn remove(&mut self, id: Uuid) -> Option<Part> {
        let part = self.parts.remove(&id)?;
        if self.name_index.get(&part.name) == Some(&id) {
            self.name_index.remove(&part.name);
        }
        Some(part)
    }

    pub fn part(&self, id: Uuid) -> Option<&Part> {
        self.parts.get(&id)
    }

    pub fn part_mut(&mut self, id: Uuid) -> Option<&mut Part> {
        self.parts.get_mut(&id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.parts.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    pub fn find_by_name(&self, name: &str) -> Option<Uuid> {
        self.name_index.get(name).copied()
    }

    /// Nearest part struck by the ray, excluding the ignored ids.
    ///
    /// Parts are tested against their world-space bounding boxes; the
    /// ray's direction length bounds the query distance.
    pub fn cast_ray(&self, ray: &Ray, ignore: &[Uuid]) -> Option<RayHit> {
        let max_distance = ray.length();
        if max_distance <= f32::EPSILON {
            return None;
        }
        let direction = ray.direction / max_distance;

        let mut closest: Option<RayHit> = None;
        for part in self.parts.values() {
            if ignore.contains(&part.id) {
                continue;
            }
            let Some(distance) = part.world_aabb().intersect_ray(ray.origin, direction) else {
                continue;
            };
            if distance > max_distance {
                continue;
            }
            match closest {
                None => {
                    closest = Some(RayHit {
                        part: part.id,
                        distance,
                    })
                }
                Some(hit) if distance < hit.distance => {
                    closest = Some(RayHit {
                        part: part.id,
                        distance,
                    })
                }
                _ => {}
            }
        }
        closest
    }

    /// Construct a weld between two parts and attach it as a child of `a`.
    ///
    /// The coupling is owned by `a`'s attachment list from the moment it
    /// exists; returns the new weld's id.
    pub fn weld(&mut self, a: Uuid, b: Uuid) -> Result<Uuid, WorldError> {
        if a == b {
            return Err(WorldError::SelfWeld(a));
        }
        if !self.parts.contains_key(&b) {
            return Err(WorldError::PartNotFound(b));
        }
        let part = self.parts.get_mut(&a).ok_or(WorldError::PartNotFound(a))?;
        let weld = Weld::new(a, b);
        let id = weld.id;
        part.attach(Attachment::Weld(weld));
        Ok(id)
    }
}
