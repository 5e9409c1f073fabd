//! Fundamental geometric and simulation types.
//!
//! Axes follow the renderer's convention: local forward is -Z, up is +Y,
//! right is +X.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of an entity in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames simulated while playing.
    pub frame: u64,
    /// Elapsed play time in seconds.
    pub elapsed_secs: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Unit vector the entity is facing.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Distance to another point in world units.
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }

    /// Express a world-space point in this transform's local frame.
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        self.rotation.inverse() * (point - self.position)
    }

    /// Rotation that looks from `from` toward `to`, keeping +Y as up where possible.
    pub fn looking_at(from: Vec3, to: Vec3) -> Self {
        let dir = (to - from).normalize_or_zero();
        if dir == Vec3::ZERO {
            return Self::from_position(from);
        }
        let back = -dir;
        let right = Vec3::Y.cross(back);
        // Looking straight up or down: any roll will do.
        if right.length_squared() < 1e-6 {
            return Self {
                position: from,
                rotation: Quat::from_rotation_arc(Vec3::NEG_Z, dir),
            };
        }
        let right = right.normalize();
        let up = back.cross(right);
        Self {
            position: from,
            rotation: Quat::from_mat3(&Mat3::from_cols(right, up, back)),
        }
    }
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt as f64;
    }
}
