//! Camera geometry shared by fire control and the snapshot.
//!
//! The camera sits at the player's position with the player's flight
//! rotation (bank is cosmetic and not applied to aiming).

use glam::{Quat, Vec2, Vec3};

use dogfight_core::constants::CAMERA_FOV_Y;

/// World-space unit ray from the camera through a screen point (NDC).
pub fn aim_direction(rotation: Quat, cursor: Vec2, aspect: f32) -> Vec3 {
    let half = (CAMERA_FOV_Y * 0.5).tan();
    let local = Vec3::new(cursor.x * half * aspect, cursor.y * half, -1.0);
    (rotation * local).normalize()
}

/// Project a world point to NDC. `None` when the point is behind the camera.
pub fn project(position: Vec3, rotation: Quat, point: Vec3, aspect: f32) -> Option<Vec2> {
    let local = rotation.inverse() * (point - position);
    if local.z >= -1e-3 {
        return None;
    }
    let half = (CAMERA_FOV_Y * 0.5).tan();
    let depth = -local.z;
    Some(Vec2::new(
        local.x / (depth * half * aspect),
        local.y / (depth * half),
    ))
}

/// Angular tolerance of the hit test at a given distance: a base cone plus
/// the angle the fighter's hit sphere subtends.
pub fn hit_tolerance(base: f32, hit_radius: f32, distance: f32) -> f32 {
    base + (hit_radius / distance.max(1e-3)).atan()
}
