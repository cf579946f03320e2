use std::error::Error;
use std::fmt;

use crate::ecs::entity::Entity;
use crate::ecs::kind::ComponentKind;

/// Contract violations raised by registry accessors.
///
/// Both variants indicate a level-data or programming bug, not a runtime
/// condition: every system pre-checks presence before fetching data, so in
/// correct operation these are unreachable. The frame driver aborts the
/// frame loudly rather than continuing with partial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Operation referenced an entity never initialized in the registry.
    InvalidEntity(Entity),
    /// Requested component data for a kind the entity does not have.
    MissingComponent(Entity, ComponentKind),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidEntity(entity) => {
                write!(f, "entity {entity} was never initialized in the registry")
            }
            RegistryError::MissingComponent(entity, kind) => {
                write!(f, "entity {entity} has no {} component attached", kind.name())
            }
        }
    }
}

impl Error for RegistryError {}
