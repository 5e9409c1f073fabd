//! Core types and definitions for the DOGFIGHT game.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, input merging, state snapshots, events,
//! configuration and constants. It has no dependency on Tauri or any
//! runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
