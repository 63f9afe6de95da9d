//! Rigid couplings between parts

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rigid coupling between two parts.
///
/// Owned by the part it is attached to; the physical enforcement order
/// relative to other simulation steps belongs to the physics collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weld {
    pub id: Uuid,
    pub part_a: Uuid,
    pub part_b: Uuid,
}

impl Weld {
    pub fn new(part_a: Uuid, part_b: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            part_a,
            part_b,
        }
    }

    /// True if this weld references the given part
    pub fn involves(&self, part: Uuid) -> bool {
        self.part_a == part || self.part_b == part
    }

    /// The other end of the coupling, if `part` is one of the ends
    pub fn other(&self, part: Uuid) -> Option<Uuid> {
        if part == self.part_a {
            Some(self.part_b)
        } else if part == self.part_b {
            Some(self.part_a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_involves_both_ends() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let weld = Weld::new(a, b);
        assert!(weld.involves(a));
        assert!(weld.involves(b));
        assert!(!weld.involves(Uuid::new_v4()));
    }

    #[test]
    fn test_other_end() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let weld = Weld::new(a, b);
        assert_eq!(weld.other(a), Some(b));
        assert_eq!(weld.other(b), Some(a));
        assert_eq!(weld.other(Uuid::new_v4()), None);
    }
}
