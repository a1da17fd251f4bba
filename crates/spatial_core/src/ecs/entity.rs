//! Entity implementation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity identifier
///
/// Assigned by the host's registry; the core only compares and hashes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Entity {
    id: u64,
}

impl Entity {
    /// Create an entity handle from a registry id
    pub const fn new(id: u64) -> Self {
        Self { id }
    }

    /// Get the entity ID
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl From<u64> for Entity {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ordering_follows_id() {
        assert!(Entity::new(3) < Entity::new(7));
        assert_eq!(Entity::from(9).id(), 9);
        assert_eq!(Entity::new(12).to_string(), "entity#12");
    }
}
