//! HUD text and crosshair placement derived from a snapshot's `HudView`.

use std::fmt;

use serde::Serialize;

use dogfight_core::state::HudView;

/// The overlay's text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudText {
    pub score: String,
    pub shields: String,
    pub wave: String,
    /// Large centred message, shown only when the game has ended.
    pub banner: Option<String>,
}

impl HudText {
    pub fn from_view(hud: &HudView) -> Self {
        Self {
            score: format!("SCORE {:06}", hud.score),
            shields: format!("SHIELDS {}%", shield_percent(hud)),
            wave: format!("WAVE {}", hud.wave),
            banner: hud.game_over.then(|| "GAME OVER".to_string()),
        }
    }
}

impl fmt::Display for HudText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}  {}", self.score, self.shields, self.wave)?;
        if let Some(banner) = &self.banner {
            write!(f, "  {banner}")?;
        }
        Ok(())
    }
}

/// Shields as a whole percentage of the maximum.
pub fn shield_percent(hud: &HudView) -> u32 {
    if hud.max_shields <= 0.0 {
        return 0;
    }
    (hud.shields / hud.max_shields * 100.0)
        .round()
        .clamp(0.0, 100.0) as u32
}

/// Crosshair position in pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crosshair {
    pub x: f32,
    pub y: f32,
    /// Hit confirmation flash.
    pub flash: bool,
}

impl Crosshair {
    pub fn from_view(hud: &HudView, width: f32, height: f32) -> Self {
        let cursor = hud.cursor.clamp(glam::Vec2::NEG_ONE, glam::Vec2::ONE);
        Self {
            x: (cursor.x + 1.0) * 0.5 * width,
            y: (1.0 - cursor.y) * 0.5 * height,
            flash: hud.hit_marker,
        }
    }
}
