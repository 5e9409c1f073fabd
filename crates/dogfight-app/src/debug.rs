//! Debug overlay: query-string flag and the text panel it shows.

use std::fmt::Write as _;

use dogfight_core::state::GameStateSnapshot;

/// Maximum number of fighters listed individually.
const MAX_LISTED_ENEMIES: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugFlags {
    pub enabled: bool,
}

impl DebugFlags {
    /// Parse a URL query string such as `?debug` or `level=2&debug=on`.
    ///
    /// A bare `debug` or one of `1`, `true`, `on`, `yes` enables the panel.
    /// Any other value disables it. The last `debug` key wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut enabled = false;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, value),
                None => (pair, ""),
            };
            if key != "debug" {
                continue;
            }
            enabled = matches!(
                value.to_ascii_lowercase().as_str(),
                "" | "1" | "true" | "on" | "yes"
            );
        }

        Self { enabled }
    }
}

/// Frames-per-second estimate over half-second windows.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    window: f32,
    fps: f32,
}

impl FpsCounter {
    const WINDOW_SECS: f32 = 0.5;

    /// Record one frame of `dt` seconds and return the current estimate.
    pub fn record(&mut self, dt: f32) -> f32 {
        self.frames += 1;
        self.window += dt.max(0.0);
        if self.window >= Self::WINDOW_SECS {
            self.fps = self.frames as f32 / self.window;
            self.frames = 0;
            self.window = 0.0;
        }
        self.fps
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

/// Text lines for the debug panel.
pub struct DebugPanel;

impl DebugPanel {
    pub fn lines(snapshot: &GameStateSnapshot, fps: f32) -> Vec<String> {
        let player = snapshot.player.position;
        let live = snapshot
            .enemies
            .iter()
            .filter(|e| e.explosion.is_none())
            .count();

        let mut lines = vec![
            format!("FPS {fps:.1}"),
            format!(
                "FRAME {} T {:.2}s {:?}",
                snapshot.time.frame, snapshot.time.elapsed_secs, snapshot.phase
            ),
            format!("POS {:.1} {:.1} {:.1}", player.x, player.y, player.z),
            format!(
                "ENEMIES {live}/{} LASERS {} BOLTS {}",
                snapshot.enemies.len(),
                snapshot.lasers.len(),
                snapshot.bolts.len()
            ),
        ];

        for enemy in snapshot.enemies.iter().take(MAX_LISTED_ENEMIES) {
            let mut line = format!(
                "#{} {:?} {:?} d={:.0}",
                enemy.id,
                enemy.kind,
                enemy.phase,
                enemy.position.distance(player)
            );
            if let Some(explosion) = &enemy.explosion {
                let _ = write!(line, " boom {:.0}%", explosion.progress * 100.0);
            }
            lines.push(line);
        }
        if snapshot.enemies.len() > MAX_LISTED_ENEMIES {
            lines.push(format!(
                "... {} more",
                snapshot.enemies.len() - MAX_LISTED_ENEMIES
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogfight_core::enums::{BehaviorKind, BehaviorPhase};
    use dogfight_core::state::EnemyView;
    use glam::{Quat, Vec3};

    #[test]
    fn test_debug_flag_values() {
        let enabled = [
            "debug",
            "?debug",
            "debug=1",
            "debug=true",
            "debug=ON",
            "x=2&debug=yes",
        ];
        for query in enabled {
            assert!(DebugFlags::from_query(query).enabled, "{query}");
        }
        let disabled = [
            "",
            "?",
            "debug=0",
            "debug=false",
            "debug=off",
            "debug=no",
            "debugger",
            "x=debug",
        ];
        for query in disabled {
            assert!(!DebugFlags::from_query(query).enabled, "{query}");
        }
    }

    #[test]
    fn test_last_debug_key_wins() {
        assert!(!DebugFlags::from_query("debug&debug=0").enabled);
        assert!(DebugFlags::from_query("debug=0&debug").enabled);
    }

    #[test]
    fn test_fps_counter() {
        let mut counter = FpsCounter::default();
        for _ in 0..40 {
            counter.record(1.0 / 60.0);
        }
        assert!((counter.fps() - 60.0).abs() < 0.5, "got {}", counter.fps());
    }

    #[test]
    fn test_panel_lines() {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.enemies = (0..10)
            .map(|id| EnemyView {
                id,
                kind: BehaviorKind::Smart,
                phase: BehaviorPhase::Pursuit,
                position: Vec3::new(0.0, 0.0, -100.0),
                rotation: Quat::IDENTITY,
                explosion: None,
            })
            .collect();

        let lines = DebugPanel::lines(&snapshot, 59.94);
        assert_eq!(lines[0], "FPS 59.9");
        assert_eq!(lines[3], "ENEMIES 10/10 LASERS 0 BOLTS 0");
        assert_eq!(lines[4], "#0 Smart Pursuit d=100");
        assert_eq!(lines.last().unwrap(), "... 2 more");
    }
}
