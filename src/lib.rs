//! Jump and Run engine library.
//!
//! Exposes the ECS core, components, systems, resources, level loading,
//! and the frame driver for use in integration tests and as a reusable
//! library.

pub mod components;
pub mod ecs;
pub mod frame;
pub mod level;
pub mod resources;
pub mod systems;
