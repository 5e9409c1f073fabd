//! Enemy behaviour strategies for DOGFIGHT.
//!
//! Each strategy is a pure function of elapsed time that yields a local
//! position/orientation offset from a fighter's spawn anchor. The sim crate
//! applies the offset; nothing here touches the ECS.

pub mod profiles;
pub mod strategy;

pub use dogfight_core as core;
pub use strategy::{evaluate, Behavior, BehaviorOffset, OscillateParams, SmartParams};
