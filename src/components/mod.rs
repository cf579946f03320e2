//! Component data records.
//!
//! One file per component kind that carries payload. Records are plain data;
//! all behavior lives in the systems that mutate them. Marker kinds (Real,
//! ActiveControl, PassiveControl, Dynamic) have no record here; their
//! presence in the registry is the whole of their state.
//!
//! Submodules overview:
//! - [`transform`] – position, velocity, facing, and jump state
//! - [`render`] – texture key, image dimensions, optional text payload
//! - [`animate`] – per-animation frame clocks and ordered frame sequences
//! - [`collision`] – AABB geometry, classification, and the transient result record
//! - [`gravity`] – marker record for gravity-affected entities
//! - [`sidescroll`] – scroll speed for parallax scenery

pub mod animate;
pub mod collision;
pub mod gravity;
pub mod render;
pub mod sidescroll;
pub mod transform;
