//! Randomized parameter sets for each behaviour strategy.

use rand::Rng;

use glam::Vec2;

use crate::strategy::{Behavior, OscillateParams, SmartParams};

/// Chance that a fighter spawned during `wave` (1-based) flies the smart strategy.
pub fn smart_probability(wave: u32) -> f32 {
    (0.15 * wave.saturating_sub(1) as f32).min(0.8)
}

/// A weaving pass at roughly `speed`.
pub fn oscillate_for(rng: &mut impl Rng, speed: f32) -> Behavior {
    Behavior::Oscillate(OscillateParams {
        amplitude: Vec2::new(rng.gen_range(15.0..45.0), rng.gen_range(5.0..25.0)),
        frequency: Vec2::new(rng.gen_range(0.6..1.6), rng.gen_range(0.4..1.2)),
        phase: rng.gen_range(0.0..std::f32::consts::TAU),
        speed: speed * rng.gen_range(0.85..1.15),
        bank: rng.gen_range(0.3..0.7),
    })
}

/// An approach/pursuit/escape run at roughly `speed`.
pub fn smart_for(rng: &mut impl Rng, speed: f32) -> Behavior {
    Behavior::Smart(SmartParams {
        speed: speed * rng.gen_range(0.9..1.2),
        weave_amplitude: rng.gen_range(10.0..30.0),
        weave_frequency: rng.gen_range(0.8..1.8),
        approach_secs: rng.gen_range(2.5..4.0),
        pursuit_secs: rng.gen_range(2.0..3.5),
        orbit_radius: rng.gen_range(30.0..70.0),
        escape_accel: rng.gen_range(20.0..50.0),
        escape_climb: rng.gen_range(4.0..12.0),
        bank: rng.gen_range(0.5..0.9),
        roll_rate: rng.gen_range(2.0..5.0),
    })
}

/// Pick a strategy for a fighter spawned during `wave`.
pub fn pick_for_wave(rng: &mut impl Rng, wave: u32, speed: f32) -> Behavior {
    if rng.gen::<f32>() < smart_probability(wave) {
        smart_for(rng, speed)
    } else {
        oscillate_for(rng, speed)
    }
}
