use std::error::Error;
use std::fmt;
use std::io;

use crate::ecs::RegistryError;

/// Errors raised while loading a level or its assets.
///
/// A failed load aborts startup; the game never runs on a partially
/// populated registry.
#[derive(Debug)]
pub enum LevelError {
    /// Overlapping, inverted, or otherwise unusable entity declarations.
    MalformedLevelSpec(String),
    Io(io::Error),
    Json(serde_json::Error),
    /// A registry contract violation surfaced during population; always a
    /// bug in the level data (e.g. a spec referencing a kind it never
    /// attached).
    Registry(RegistryError),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::MalformedLevelSpec(msg) => write!(f, "malformed level spec: {msg}"),
            LevelError::Io(err) => write!(f, "level io error: {err}"),
            LevelError::Json(err) => write!(f, "level json error: {err}"),
            LevelError::Registry(err) => write!(f, "level population error: {err}"),
        }
    }
}

impl Error for LevelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LevelError::Io(err) => Some(err),
            LevelError::Json(err) => Some(err),
            LevelError::Registry(err) => Some(err),
            LevelError::MalformedLevelSpec(_) => None,
        }
    }
}

impl From<io::Error> for LevelError {
    fn from(err: io::Error) -> Self {
        LevelError::Io(err)
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(err: serde_json::Error) -> Self {
        LevelError::Json(err)
    }
}

impl From<RegistryError> for LevelError {
    fn from(err: RegistryError) -> Self {
        LevelError::Registry(err)
    }
}
