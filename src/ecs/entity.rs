use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a game object.
///
/// An entity has no existence record of its own; it exists exactly when the
/// registry holds a presence vector for it. Ids come from the level
/// configuration and are never recycled within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Entity(pub u64);

impl Entity {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for Entity {
    fn from(id: u64) -> Self {
        Entity(id)
    }
}
