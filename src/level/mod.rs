//! Level and asset configuration.
//!
//! Levels are declarative JSON: a physics section plus an entity map keyed
//! by a single id (`"1"`) or an inclusive id range (`"4-10"`) whose members
//! share one component set and asset reference. Assets are described in a
//! separate JSON file keyed by reference name.
//!
//! Parsing and registry population are pure and fully testable; decoding
//! images and uploading textures happens at the raylib boundary in `main`,
//! which feeds the decoded dimensions back in through an
//! [`assets::AssetCatalog`].
//!
//! Submodules overview:
//! - [`config`] – level schema, entity-range parsing and validation
//! - [`assets`] – asset schema and the decoded-dimension catalog
//! - [`loader`] – building and populating the registry from a level
//! - [`error`] – everything that can go wrong while loading

pub mod assets;
pub mod config;
pub mod error;
pub mod loader;

pub use error::LevelError;
