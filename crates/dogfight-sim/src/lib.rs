//! Game engine for DOGFIGHT.
//!
//! Owns the hecs ECS world, runs systems once per frame,
//! and produces GameStateSnapshots for the renderer and HUD.

pub mod engine;
pub mod projection;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use dogfight_core as core;
pub use engine::GameEngine;

#[cfg(test)]
mod tests;
