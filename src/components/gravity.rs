/// Marker record for gravity-affected entities.
///
/// Presence is the whole of the state: the gravity system only needs to
/// know the entity is affected, and the strength comes from the level
/// physics configuration. The record exists so every data-carrying kind has
/// a uniform allocate-on-attach path in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GravityData;
