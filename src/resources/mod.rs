//! Long-lived values injected into systems each frame.
//!
//! These are not entity data: they are the per-process and per-level state
//! the systems read alongside the registry: input, the high-level state
//! machine, loaded textures, and configuration. Each submodule documents
//! the semantics and intended usage of its resource.
//!
//! Overview
//! - `gamestate` – discrete game states and the allowed-transition table
//! - `gameconfig` – window settings loaded from an INI file
//! - `input` – per-frame keyboard state of the keys the game cares about
//! - `texturestore` – loaded textures keyed by string IDs

pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod texturestore;
