//! Game state snapshot: the complete visible state handed to the renderer
//! and HUD after each frame.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{BehaviorKind, BehaviorPhase, GamePhase, Gun};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state produced by every engine update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub lasers: Vec<LaserView>,
    pub bolts: Vec<BoltView>,
    /// Star positions in world space.
    pub stars: Vec<Vec3>,
    pub hud: HudView,
    pub events: Vec<GameEvent>,
}

/// Camera/ship pose for the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    /// Flight orientation, without bank.
    pub rotation: Quat,
    /// Visual roll (radians) to apply on top of `rotation`.
    pub bank: f32,
}

/// One enemy fighter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: BehaviorKind,
    pub phase: BehaviorPhase,
    pub position: Vec3,
    pub rotation: Quat,
    /// Present while the fighter is breaking apart.
    pub explosion: Option<ExplosionView>,
}

/// Break-apart animation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    /// 0 at the hit, 1 when the pieces disappear.
    pub progress: f32,
    pub pieces: Vec<PieceView>,
}

/// One explosion fragment in world space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PieceView {
    pub position: Vec3,
    pub rotation: Quat,
    /// Uniform scale; pieces shrink as they burn out.
    pub scale: f32,
}

/// A screen-space laser quad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserView {
    pub id: u32,
    pub gun: Gun,
    /// Quad centre in normalized device coordinates.
    pub screen: Vec2,
    /// Distance in front of the camera the quad is drawn at.
    pub depth: f32,
    pub progress: f32,
    pub scale: f32,
}

/// An enemy bolt in world space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoltView {
    pub id: u32,
    pub position: Vec3,
    pub direction: Vec3,
}

/// Values polled by the HUD and crosshair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub shields: f32,
    pub max_shields: f32,
    pub wave: u32,
    pub game_over: bool,
    /// Crosshair position in normalized device coordinates.
    pub cursor: Vec2,
    /// Crosshair flashes while a recent hit is being confirmed.
    pub hit_marker: bool,
    pub enemy_count: u32,
}
