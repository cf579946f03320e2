//! The entity/component registry and its supporting types.
//!
//! Entities are plain numeric ids. Each initialized entity owns a fixed-size
//! presence vector recording which component kinds are attached, and the
//! registry keeps one typed data map per kind that carries payload. Systems
//! receive the registry by reference once per frame and mutate records in
//! place; there is no ambient global state.
//!
//! Submodules overview:
//! - [`entity`] – the opaque entity identifier
//! - [`kind`] – the closed set of component kinds and the presence vector
//! - [`error`] – contract violations raised by registry accessors
//! - [`registry`] – the registry itself and its ordered iteration
//!
//! # Iteration order
//!
//! All entity iteration is ascending by id. This is a correctness contract,
//! not an optimization: the collide system dedups pairs with an
//! `entity2 > entity1` scan, and the side-scroll system assumes the player
//! sits at a fixed low id. See [`registry::Registry::entities`].

pub mod entity;
pub mod error;
pub mod kind;
pub mod registry;

pub use entity::Entity;
pub use error::RegistryError;
pub use kind::{ComponentKind, PresenceVector};
pub use registry::Registry;
