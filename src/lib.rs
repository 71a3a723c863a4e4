//! Tank Battle simulation core.
//!
//! The crate owns the whole game state in a single [`entities::World`] and
//! advances it one tick at a time.  Rendering, audio and input are external
//! collaborators reached through the narrow traits in [`render`].

pub mod ai;
pub mod combat;
pub mod compute;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod level;
pub mod movement;
pub mod render;
pub mod screens;
pub mod session;
