//! Behaviour system: drives each live fighter from its strategy.
//!
//! Calls the pure strategies from dogfight-behavior and writes the result
//! back into the fighter's transform.

use hecs::World;

use dogfight_behavior::{evaluate, Behavior};
use dogfight_core::components::{Anchor, Enemy, Explosion};
use dogfight_core::types::Transform;

/// Age every live fighter by `dt` and place it on its strategy's path.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (enemy, anchor, behavior, transform, explosion)) in world.query_mut::<(
        &mut Enemy,
        &Anchor,
        &Behavior,
        &mut Transform,
        Option<&Explosion>,
    )>() {
        // Wreckage is animated by the explosion system.
        if explosion.is_some() {
            continue;
        }

        enemy.age += dt;
        let out = evaluate(behavior, enemy.age);
        enemy.phase = out.phase;
        transform.position = anchor.position + anchor.rotation * out.offset;
        transform.rotation = (anchor.rotation * out.rotation).normalize();
    }
}
