//! Player flight: yaw, pitch and bank from the steering vector.

use glam::{Quat, Vec2};
use hecs::World;

use dogfight_core::components::{Player, PlayerShip};
use dogfight_core::config::GameConfig;
use dogfight_core::types::Transform;

/// Steer and advance the player ship.
pub fn run(world: &mut World, steer: Vec2, dt: f32, config: &GameConfig) {
    for (_entity, (_player, ship, transform)) in
        world.query_mut::<(&Player, &mut PlayerShip, &mut Transform)>()
    {
        apply_input(ship, transform, steer, dt, config);
    }
}

/// One frame of flight. Yaw and pitch turn the flight path; bank is a visual
/// roll that eases toward the turn and does not affect the path.
pub fn apply_input(
    ship: &mut PlayerShip,
    transform: &mut Transform,
    steer: Vec2,
    dt: f32,
    config: &GameConfig,
) {
    let yaw = -steer.x * config.yaw_rate * dt;
    let pitch = steer.y * config.pitch_rate * dt;
    let turn = Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch);
    transform.rotation = (transform.rotation * turn).normalize();

    let target_bank = -steer.x * config.max_bank;
    let blend = 1.0 - (-config.bank_response * dt).exp();
    ship.bank += (target_bank - ship.bank) * blend;

    transform.position += transform.forward() * config.player_speed * dt;
}
