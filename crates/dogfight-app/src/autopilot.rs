//! Scripted input for headless runs: hold the trigger and weave.

use dogfight_core::commands::PlayerCommand;
use dogfight_core::input::{InputEvent, Key};

/// Seconds spent turning each way before switching.
const WEAVE_SECS: f32 = 2.0;

/// Produces the key presses of a pilot that fires continuously while
/// sweeping left and right.
#[derive(Debug, Default)]
pub struct Autopilot {
    turning: Option<Key>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands to send at `elapsed` seconds into the run. Only changes are
    /// emitted, so calling this every frame is cheap on the channel.
    pub fn step(&mut self, elapsed: f32) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        if self.turning.is_none() {
            commands.push(key_down(Key::Fire));
        }

        let want = if (elapsed / WEAVE_SECS).floor() as i64 % 2 == 0 {
            Key::Left
        } else {
            Key::Right
        };
        if self.turning != Some(want) {
            if let Some(previous) = self.turning {
                commands.push(PlayerCommand::Input {
                    event: InputEvent::KeyUp { key: previous },
                });
            }
            commands.push(key_down(want));
            self.turning = Some(want);
        }
        commands
    }
}

fn key_down(key: Key) -> PlayerCommand {
    PlayerCommand::Input {
        event: InputEvent::KeyDown { key },
    }
}
