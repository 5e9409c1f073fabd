//! Player input merging.
//!
//! The frontend forwards raw keyboard, mouse and touch events. The
//! [`InputManager`] folds them into one steering vector, a firing flag and
//! a crosshair position. Events are plain data so they can cross the IPC
//! boundary unchanged.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::CURSOR_TRAVEL;

/// Logical keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Other,
}

impl Key {
    /// Map a browser `KeyboardEvent.code` to a logical key.
    pub fn from_code(code: &str) -> Self {
        match code {
            "KeyW" | "ArrowUp" => Key::Up,
            "KeyS" | "ArrowDown" => Key::Down,
            "KeyA" | "ArrowLeft" => Key::Left,
            "KeyD" | "ArrowRight" => Key::Right,
            "Space" => Key::Fire,
            _ => Key::Other,
        }
    }
}

/// Raw input events. Pointer coordinates are pixels from the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    KeyDown { key: Key },
    KeyUp { key: Key },
    MouseDown { x: f32, y: f32 },
    MouseMove { x: f32, y: f32 },
    MouseUp,
    TouchStart { id: u32, x: f32, y: f32 },
    TouchMove { id: u32, x: f32, y: f32 },
    TouchEnd { id: u32 },
    TouchCancel { id: u32 },
    Resize { width: f32, height: f32 },
    /// Window lost focus; everything held is released.
    Blur,
}

/// Merged input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    /// Steering vector, magnitude at most 1. +x right, +y up.
    pub steer: Vec2,
    pub firing: bool,
    /// Crosshair position in normalized device coordinates.
    pub cursor: Vec2,
}

#[derive(Debug, Clone, Copy, Default)]
struct HeldKeys {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    fire: bool,
}

/// Tracks held keys and pointers and produces an [`InputState`].
#[derive(Debug, Clone)]
pub struct InputManager {
    width: f32,
    height: f32,
    keys: HeldKeys,
    mouse_down: bool,
    /// Last known pointer position in NDC, pressed or not.
    pointer: Vec2,
    /// Touch currently steering, if any.
    touch: Option<u32>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl InputManager {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            keys: HeldKeys::default(),
            mouse_down: false,
            pointer: Vec2::ZERO,
            touch: None,
        }
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Apply one raw event.
    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => self.set_key(key, true),
            InputEvent::KeyUp { key } => self.set_key(key, false),
            // Browsers emulate mouse events after touches; a steering touch
            // keeps the pointer.
            InputEvent::MouseDown { x, y } => {
                self.mouse_down = true;
                if self.touch.is_none() {
                    self.pointer = self.to_ndc(x, y);
                }
            }
            InputEvent::MouseMove { x, y } => {
                if self.touch.is_none() {
                    self.pointer = self.to_ndc(x, y);
                }
            }
            InputEvent::MouseUp => self.mouse_down = false,
            InputEvent::TouchStart { id, x, y } => {
                if self.touch.is_none() {
                    self.touch = Some(id);
                    self.pointer = self.to_ndc(x, y);
                }
            }
            InputEvent::TouchMove { id, x, y } => {
                if self.touch == Some(id) {
                    self.pointer = self.to_ndc(x, y);
                }
            }
            InputEvent::TouchEnd { id } | InputEvent::TouchCancel { id } => {
                if self.touch == Some(id) {
                    self.touch = None;
                }
            }
            InputEvent::Resize { width, height } => {
                if width > 0.0 && height > 0.0 {
                    self.width = width;
                    self.height = height;
                }
            }
            InputEvent::Blur => self.reset(),
        }
    }

    /// Release every held key and pointer.
    pub fn reset(&mut self) {
        self.keys = HeldKeys::default();
        self.mouse_down = false;
        self.touch = None;
    }

    /// The merged state for this frame.
    pub fn state(&self) -> InputState {
        let keyboard = self.keyboard_vector();
        let pointer_active = self.pointer_active();
        let pointer = if pointer_active {
            self.pointer
        } else {
            Vec2::ZERO
        };

        let steer = (keyboard + pointer).clamp_length_max(1.0);
        let cursor = if pointer_active {
            self.pointer
        } else {
            steer * CURSOR_TRAVEL
        };

        InputState {
            steer,
            firing: self.keys.fire || pointer_active,
            cursor,
        }
    }

    fn pointer_active(&self) -> bool {
        self.mouse_down || self.touch.is_some()
    }

    fn keyboard_vector(&self) -> Vec2 {
        let axis = |pos: bool, neg: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(
            axis(self.keys.right, self.keys.left),
            axis(self.keys.up, self.keys.down),
        )
    }

    fn set_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.keys.up = pressed,
            Key::Down => self.keys.down = pressed,
            Key::Left => self.keys.left = pressed,
            Key::Right => self.keys.right = pressed,
            Key::Fire => self.keys.fire = pressed,
            Key::Other => {}
        }
    }

    /// Pixel coordinates to NDC, clamped to the screen.
    fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (2.0 * x / self.width - 1.0).clamp(-1.0, 1.0),
            (1.0 - 2.0 * y / self.height).clamp(-1.0, 1.0),
        )
    }
}
