//! Behaviour strategies.
//!
//! Offsets are expressed in the anchor's local frame: -Z is the direction the
//! fighter was facing when it spawned (toward the player), +Y is up.

use std::f32::consts::PI;

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use dogfight_core::enums::{BehaviorKind, BehaviorPhase};

/// Straight pass with a sinusoidal weave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillateParams {
    /// Weave amplitude on local x and y.
    pub amplitude: Vec2,
    /// Weave angular frequency on local x and y (rad/s).
    pub frequency: Vec2,
    pub phase: f32,
    /// Forward speed along the pass.
    pub speed: f32,
    /// Peak roll into the weave (radians).
    pub bank: f32,
}

/// Approach head-on, swing around to chase, then break away climbing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmartParams {
    pub speed: f32,
    pub weave_amplitude: f32,
    pub weave_frequency: f32,
    pub approach_secs: f32,
    pub pursuit_secs: f32,
    /// Height of the turn-around loop.
    pub orbit_radius: f32,
    /// Forward acceleration while escaping.
    pub escape_accel: f32,
    /// Climb coefficient while escaping (units/s²).
    pub escape_climb: f32,
    pub bank: f32,
    /// Barrel-roll rate while escaping (rad/s).
    pub roll_rate: f32,
}

/// A pluggable per-frame motion strategy, one variant per AI mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Behavior {
    Oscillate(OscillateParams),
    Smart(SmartParams),
}

/// Output of a strategy for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorOffset {
    /// Displacement from the anchor, in the anchor's frame.
    pub offset: Vec3,
    /// Orientation relative to the anchor.
    pub rotation: Quat,
    pub phase: BehaviorPhase,
}

impl Behavior {
    pub fn kind(&self) -> BehaviorKind {
        match self {
            Behavior::Oscillate(_) => BehaviorKind::Oscillate,
            Behavior::Smart(_) => BehaviorKind::Smart,
        }
    }
}

/// Evaluate a strategy `elapsed` seconds after spawn. Negative time is
/// treated as zero.
pub fn evaluate(behavior: &Behavior, elapsed: f32) -> BehaviorOffset {
    let t = elapsed.max(0.0);
    match behavior {
        Behavior::Oscillate(params) => oscillate(params, t),
        Behavior::Smart(params) => smart(params, t),
    }
}

fn oscillate(p: &OscillateParams, t: f32) -> BehaviorOffset {
    let ax = p.frequency.x * t + p.phase;
    let ay = p.frequency.y * t + p.phase;
    BehaviorOffset {
        offset: Vec3::new(p.amplitude.x * ax.sin(), p.amplitude.y * ay.sin(), -p.speed * t),
        // cos is the derivative of the lateral sin: roll into the direction of travel.
        rotation: Quat::from_rotation_z(-p.bank * ax.cos()),
        phase: BehaviorPhase::Cruise,
    }
}

fn smart(p: &SmartParams, t: f32) -> BehaviorOffset {
    let v = p.speed;
    let ta = p.approach_secs;
    let tb = p.pursuit_secs;

    if t < ta {
        let a = p.weave_frequency * t;
        return BehaviorOffset {
            offset: Vec3::new(p.weave_amplitude * a.sin(), 0.0, -v * t),
            rotation: Quat::from_rotation_z(-p.bank * a.cos()),
            phase: BehaviorPhase::Approach,
        };
    }

    let weave_exit = p.weave_amplitude * (p.weave_frequency * ta).sin();
    let approach_z = -v * ta;

    if t < ta + tb {
        let tau = t - ta;
        let u = tau / tb;
        // Forward velocity ramps linearly from -v to +v across the turn.
        let z = approach_z - v * tau + v * tau * tau / tb;
        let x = weave_exit * (1.0 - u) + p.orbit_radius * (PI * u).sin();
        let y = p.orbit_radius * (1.0 - (PI * u).cos()) / 2.0;
        return BehaviorOffset {
            offset: Vec3::new(x, y, z),
            rotation: Quat::from_rotation_y(PI * u)
                * Quat::from_rotation_z(p.bank * (PI * u).sin()),
            phase: BehaviorPhase::Pursuit,
        };
    }

    let tau = t - ta - tb;
    BehaviorOffset {
        offset: Vec3::new(
            0.0,
            p.orbit_radius + p.escape_climb * tau * tau,
            approach_z + v * tau + 0.5 * p.escape_accel * tau * tau,
        ),
        rotation: Quat::from_rotation_y(PI) * Quat::from_rotation_z(p.roll_rate * tau),
        phase: BehaviorPhase::Escape,
    }
}
