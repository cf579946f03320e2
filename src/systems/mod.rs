//! Per-frame systems.
//!
//! Each system is a plain function taking the registry by reference plus a
//! typed parameter struct or scalar; none of them holds state between
//! frames. The frame driver runs them strictly sequentially in a fixed
//! order (active control → gravity → transform → collide → side scroll →
//! animate → render); each reads state its predecessor just wrote, so the
//! ordering is a correctness contract, not an optimization.
//!
//! Submodules overview
//! - [`activecontrol`] – input → movement intent, menu transitions
//! - [`gravity`] – unconditional vertical-speed decrement
//! - [`transform`] – velocity → position integration
//! - [`collide`] – pairwise AABB detection and resolution
//! - [`sidescroll`] – scenery scroll keyed to player motion
//! - [`animate`] – animation selection and the tick-based frame clock
//! - [`input`] – poll the keyboard into [`crate::resources::input::InputState`]
//! - [`render`] – draw world and overlays using Raylib

pub mod activecontrol;
pub mod animate;
pub mod collide;
pub mod gravity;
pub mod input;
pub mod render;
pub mod sidescroll;
pub mod transform;
