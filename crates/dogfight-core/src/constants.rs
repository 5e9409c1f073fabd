//! Frame timing and fixed gameplay constants.
//!
//! Tunable values live in [`crate::config::GameConfig`]; these are the
//! numbers that shape the screen layout and frame driver.

/// Nominal frame rate of the animation-frame driver (Hz).
pub const FRAME_RATE: u32 = 60;

/// Seconds per frame at the nominal frame rate.
pub const FIXED_DT: f32 = 1.0 / FRAME_RATE as f32;

/// Largest frame delta the engine will integrate in one update (seconds).
/// Longer stalls (tab switch, debugger) are clamped to this.
pub const MAX_FRAME_DELTA: f32 = 0.1;

// --- Screen layout (normalized device coordinates) ---

/// Left gun muzzle on screen. The right gun mirrors it on x.
pub const LEFT_GUN_NDC: [f32; 2] = [-0.55, -0.45];

/// How far the crosshair travels from centre at full keyboard deflection.
pub const CURSOR_TRAVEL: f32 = 0.35;

/// Vertical field of view of the player camera (radians).
pub const CAMERA_FOV_Y: f32 = 1.0;

/// Assumed aspect ratio for aim rays when the viewport is unknown.
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// Fraction a laser quad shrinks by the time it reaches its target depth.
pub const LASER_SHRINK: f32 = 0.8;

// --- Scoring ---

/// Points for downing an oscillating fighter.
pub const SCORE_OSCILLATE: u32 = 100;

/// Points for downing a multi-phase fighter.
pub const SCORE_SMART: u32 = 250;

// --- Explosion ---

/// Number of pieces a fighter breaks into.
pub const EXPLOSION_PIECES: usize = 6;

/// Seconds the crosshair flashes after a confirmed hit.
pub const HIT_MARKER_SECS: f32 = 0.25;
