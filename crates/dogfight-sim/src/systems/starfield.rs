//! Star field wrapping.
//!
//! Stars live in a cube centred on the player. A star that falls off one
//! face re-enters through the opposite face, so the backdrop never runs out.

use glam::Vec3;
use hecs::World;

use dogfight_core::components::Star;
use dogfight_core::config::GameConfig;
use dogfight_core::types::Transform;

use super::player_position;

/// Wrap every star back into the cube around the player.
pub fn run(world: &mut World, config: &GameConfig) {
    let center = player_position(world);
    let extent = config.star_extent;
    for (_entity, (_star, transform)) in world.query_mut::<(&Star, &mut Transform)>() {
        transform.position = wrap_point(transform.position, center, extent);
    }
}

/// Wrap a point into `[center - extent, center + extent)` on each axis.
pub fn wrap_point(point: Vec3, center: Vec3, extent: f32) -> Vec3 {
    Vec3::new(
        wrap_axis(point.x, center.x, extent),
        wrap_axis(point.y, center.y, extent),
        wrap_axis(point.z, center.z, extent),
    )
}

/// Wrap one coordinate into `[center - extent, center + extent)`.
pub fn wrap_axis(value: f32, center: f32, extent: f32) -> f32 {
    let span = 2.0 * extent;
    let mut offset = (value - center + extent).rem_euclid(span);
    // rem_euclid rounds up to `span` for tiny negative inputs.
    if offset >= span {
        offset = 0.0;
    }
    center + offset - extent
}
