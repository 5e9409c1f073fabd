//! Break-apart animation for downed fighters.

use glam::{Quat, Vec3};
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use dogfight_core::components::{Explosion, ExplosionPiece};
use dogfight_core::config::GameConfig;
use dogfight_core::constants::EXPLOSION_PIECES;
use dogfight_core::state::PieceView;

/// Fresh explosion with randomly scattered pieces.
pub fn break_apart(rng: &mut ChaCha8Rng) -> Explosion {
    let pieces = (0..EXPLOSION_PIECES)
        .map(|_| {
            let direction = random_unit(rng);
            ExplosionPiece {
                offset: direction * rng.gen_range(0.5..3.0),
                velocity: direction * rng.gen_range(15.0..45.0),
                rotation: Quat::IDENTITY,
                spin: random_unit(rng) * rng.gen_range(1.0..6.0),
            }
        })
        .collect();

    Explosion {
        elapsed: 0.0,
        pieces,
    }
}

/// Advance every explosion; finished ones are queued for despawn.
pub fn run(world: &mut World, dt: f32, config: &GameConfig, despawn_buffer: &mut Vec<Entity>) {
    for (entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.elapsed += dt;
        if explosion.elapsed >= config.explosion_secs {
            despawn_buffer.push(entity);
        }
    }
}

/// 0 at the hit, 1 when the wreckage disappears.
pub fn progress(explosion: &Explosion, config: &GameConfig) -> f32 {
    (explosion.elapsed / config.explosion_secs).clamp(0.0, 1.0)
}

/// World-space pose of each piece, given where the fighter was hit.
pub fn piece_views(origin: Vec3, explosion: &Explosion, config: &GameConfig) -> Vec<PieceView> {
    let t = explosion.elapsed;
    let scale = 1.0 - progress(explosion, config);
    explosion
        .pieces
        .iter()
        .map(|piece| PieceView {
            position: origin + piece.offset + piece.velocity * t,
            rotation: (Quat::from_scaled_axis(piece.spin * t) * piece.rotation).normalize(),
            scale,
        })
        .collect()
}

fn random_unit(rng: &mut ChaCha8Rng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-4 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}
