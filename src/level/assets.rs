//! Asset descriptions and the decoded-dimension catalog.
//!
//! Assets are declared in their own JSON file keyed by the reference names
//! the level's entity map uses:
//!
//! ```json
//! {
//!   "player": {
//!     "animated_by_default": true,
//!     "images_base_path": "./assets/player/",
//!     "default_animation_duration": 6,
//!     "animations": {
//!       "Idle": { "images": ["idle0.png", "idle1.png"] },
//!       "Walk": { "images": ["walk0.png", "walk1.png", "walk2.png"] },
//!       "Jump": { "images": ["jump0.png"] }
//!     }
//!   },
//!   "ground": { "images_base_path": "./assets/", "image": "ground.png" },
//!   "title": { "text": "JUMP AND RUN", "font_size": 32 }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::level::error::LevelError;

fn default_animation_duration() -> u32 {
    6
}

/// One named animation: an ordered list of frame image files.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationSpec {
    pub images: Vec<String>,
}

/// Description of one asset reference. Either an image, a set of
/// animations, or a text label; never more than one of these.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AssetSpec {
    #[serde(default)]
    pub animated_by_default: bool,
    #[serde(default)]
    pub images_base_path: String,
    #[serde(default)]
    pub image: String,
    /// Ticks each animation frame stays on screen.
    #[serde(default = "default_animation_duration")]
    pub default_animation_duration: u32,
    #[serde(default)]
    pub animations: HashMap<String, AnimationSpec>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub font_size: i32,
}

impl AssetSpec {
    pub fn is_text(&self) -> bool {
        !self.text.is_empty() && self.font_size > 0
    }

    /// Full path of the plain (non-animated) image, if declared.
    pub fn image_path(&self) -> Option<String> {
        if self.image.is_empty() {
            None
        } else {
            Some(format!("{}{}", self.images_base_path, self.image))
        }
    }

    /// Full paths of one animation's frames, in order.
    pub fn frame_paths(&self, animation: &str) -> Vec<String> {
        self.animations
            .get(animation)
            .map(|anim| {
                anim.images
                    .iter()
                    .map(|image| format!("{}{}", self.images_base_path, image))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The animation whose first frame becomes the entity's initial image:
    /// "Idle" when present, else the lexicographically first name so the
    /// choice is deterministic.
    pub fn initial_animation(&self) -> Option<&str> {
        if self.animations.contains_key("Idle") {
            return Some("Idle");
        }
        self.animations.keys().map(String::as_str).min()
    }

    /// Every image path this asset needs decoded, in deterministic order.
    pub fn all_image_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = Vec::new();
        if let Some(path) = self.image_path() {
            paths.push(path);
        }
        let mut names: Vec<&String> = self.animations.keys().collect();
        names.sort();
        for name in names {
            paths.extend(self.frame_paths(name));
        }
        paths
    }
}

/// Asset descriptions keyed by reference name.
pub type AssetDescriptions = HashMap<String, AssetSpec>;

pub fn load_asset_descriptions(path: impl AsRef<Path>) -> Result<AssetDescriptions, LevelError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Decoded image dimensions keyed by image path.
///
/// The raylib boundary fills this while uploading textures; the loader
/// reads it to size render records. Tests build one by hand, which keeps
/// the whole load path exercisable without decoding a single PNG.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    sizes: FxHashMap<String, (f32, f32)>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        AssetCatalog::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, width: f32, height: f32) {
        self.sizes.insert(path.into(), (width, height));
    }

    pub fn size_of(&self, path: &str) -> Option<(f32, f32)> {
        self.sizes.get(path).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_json_defaults() {
        let json = r#"{ "ground": { "images_base_path": "./a/", "image": "g.png" } }"#;
        let assets: AssetDescriptions = serde_json::from_str(json).unwrap();
        let ground = &assets["ground"];
        assert!(!ground.animated_by_default);
        assert!(!ground.is_text());
        assert_eq!(ground.image_path().as_deref(), Some("./a/g.png"));
        assert_eq!(ground.default_animation_duration, 6);
    }

    #[test]
    fn test_text_asset() {
        let json = r#"{ "title": { "text": "HELLO", "font_size": 32 } }"#;
        let assets: AssetDescriptions = serde_json::from_str(json).unwrap();
        assert!(assets["title"].is_text());
        assert_eq!(assets["title"].image_path(), None);
    }

    #[test]
    fn test_frame_paths_are_prefixed_and_ordered() {
        let json = r#"{
            "player": {
                "animated_by_default": true,
                "images_base_path": "./p/",
                "animations": { "Walk": { "images": ["w0.png", "w1.png"] } }
            }
        }"#;
        let assets: AssetDescriptions = serde_json::from_str(json).unwrap();
        assert_eq!(
            assets["player"].frame_paths("Walk"),
            vec!["./p/w0.png".to_string(), "./p/w1.png".to_string()]
        );
        assert!(assets["player"].frame_paths("Jump").is_empty());
    }

    #[test]
    fn test_initial_animation_prefers_idle() {
        let json = r#"{
            "player": {
                "animations": {
                    "Walk": { "images": ["w.png"] },
                    "Idle": { "images": ["i.png"] }
                }
            }
        }"#;
        let assets: AssetDescriptions = serde_json::from_str(json).unwrap();
        assert_eq!(assets["player"].initial_animation(), Some("Idle"));
    }

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = AssetCatalog::new();
        catalog.insert("./a/g.png", 32.0, 16.0);
        assert_eq!(catalog.size_of("./a/g.png"), Some((32.0, 16.0)));
        assert_eq!(catalog.size_of("./missing.png"), None);
    }
}
