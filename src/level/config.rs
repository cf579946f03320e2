//! Level configuration schema and entity-range handling.
//!
//! ```json
//! {
//!   "physics": { "gravity": 0.981 },
//!   "entities": {
//!     "1": { "reference": "player", "components": ["Real", "ActiveControl", "Collide",
//!             "Transform", "Gravity", "Dynamic", "Render", "Animate"],
//!            "initial_pos_x": 100.0, "initial_pos_y": 300.0 },
//!     "2-12": { "reference": "ground_tile", "components": ["Real", "Collide", "Transform", "Render"],
//!            "initial_pos_x": 0.0, "initial_pos_y": 400.0, "spread_along": "X" }
//!   }
//! }
//! ```
//!
//! Range keys are validated before the registry is built: an inverted
//! range or two declarations claiming the same id refuse the whole level.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::ecs::entity::Entity;
use crate::ecs::kind::ComponentKind;
use crate::level::error::LevelError;
use crate::systems::gravity::DEFAULT_GRAVITY;

/// Physics tuning for one level.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelPhysics {
    #[serde(default = "default_gravity")]
    pub gravity: f32,
}

fn default_gravity() -> f32 {
    DEFAULT_GRAVITY
}

impl Default for LevelPhysics {
    fn default() -> Self {
        LevelPhysics { gravity: DEFAULT_GRAVITY }
    }
}

/// Axis along which a range of entities is laid out side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SpreadAxis {
    X,
    Y,
}

/// Declaration of one entity, or one range of entities sharing a component
/// set and asset reference.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitySpec {
    /// Key into the asset descriptions.
    pub reference: String,
    pub components: Vec<ComponentKind>,
    #[serde(default)]
    pub initial_pos_x: f32,
    #[serde(default)]
    pub initial_pos_y: f32,
    /// When set, each member of a range is offset from the previous by the
    /// asset's image extent along this axis (tiled platforms).
    #[serde(default)]
    pub spread_along: Option<SpreadAxis>,
    /// Scroll speed for SideScroll entities, world units per tick.
    #[serde(default)]
    pub scroll_speed: f32,
}

/// A whole level: physics plus the declarative entity map.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelConfig {
    #[serde(default)]
    pub physics: LevelPhysics,
    pub entities: HashMap<String, EntitySpec>,
}

/// Inclusive id range parsed from an entity-map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRange {
    pub lo: u64,
    pub hi: u64,
}

impl EntityRange {
    pub fn single(id: u64) -> Self {
        EntityRange { lo: id, hi: id }
    }

    pub fn contains(&self, id: u64) -> bool {
        id >= self.lo && id <= self.hi
    }

    pub fn len(&self) -> u64 {
        self.hi - self.lo + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl FromStr for EntityRange {
    type Err = LevelError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let malformed =
            |key: &str| LevelError::MalformedLevelSpec(format!("bad entity key {key:?}"));

        match key.split_once('-') {
            None => {
                let id = key.trim().parse::<u64>().map_err(|_| malformed(key))?;
                Ok(EntityRange::single(id))
            }
            Some((lo, hi)) => {
                let lo = lo.trim().parse::<u64>().map_err(|_| malformed(key))?;
                let hi = hi.trim().parse::<u64>().map_err(|_| malformed(key))?;
                if lo > hi {
                    return Err(LevelError::MalformedLevelSpec(format!(
                        "inverted entity range {key:?}"
                    )));
                }
                Ok(EntityRange { lo, hi })
            }
        }
    }
}

/// One expanded entity with the range it came from, so layout code can
/// compute the member's offset inside the range.
#[derive(Debug, Clone, Copy)]
pub struct PlacedEntity<'a> {
    pub entity: Entity,
    pub range: EntityRange,
    pub spec: &'a EntitySpec,
}

impl LevelConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let data = fs::read_to_string(path)?;
        let level: LevelConfig = serde_json::from_str(&data)?;
        level.ordered_entities()?; // validate before anyone builds on it
        Ok(level)
    }

    /// Expand all declarations into single entities, ascending by id.
    ///
    /// Fails with [`LevelError::MalformedLevelSpec`] on an unparsable key,
    /// an inverted range, or two declarations claiming the same id.
    pub fn ordered_entities(&self) -> Result<Vec<PlacedEntity<'_>>, LevelError> {
        let mut ranges: Vec<(EntityRange, &str, &EntitySpec)> = Vec::new();
        for (key, spec) in &self.entities {
            ranges.push((key.parse()?, key.as_str(), spec));
        }
        ranges.sort_by_key(|(range, _, _)| range.lo);

        for pair in ranges.windows(2) {
            let (first, first_key, _) = &pair[0];
            let (second, second_key, _) = &pair[1];
            if second.lo <= first.hi {
                return Err(LevelError::MalformedLevelSpec(format!(
                    "entity ranges {first_key:?} and {second_key:?} overlap"
                )));
            }
        }

        let mut placed = Vec::new();
        for (range, _, spec) in ranges {
            for id in range.lo..=range.hi {
                placed.push(PlacedEntity { entity: Entity(id), range, spec });
            }
        }
        Ok(placed)
    }
}
