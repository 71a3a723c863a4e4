use std::time::Duration;

// Gameplay tuning. Pixel units, top-left origin, per screen.

// ── Playfield ────────────────────────────────────────────────────────────────

pub const WIDTH: i32 = 800;
pub const HEIGHT: i32 = 600;

pub const TANK_WIDTH: i32 = 32;
pub const TANK_HEIGHT: i32 = 32;
pub const EXPLOSION_WIDTH: i32 = 24;
pub const EXPLOSION_HEIGHT: i32 = 24;
pub const BLOCK_WIDTH: i32 = 16;
pub const BLOCK_HEIGHT: i32 = 16;
pub const TREE_WIDTH: i32 = 16;
pub const TREE_HEIGHT: i32 = 16;

/// Largest top-left x a tank may occupy (exclusive bound for clamping).
pub const MAX_X: i32 = WIDTH - TANK_WIDTH;
/// Largest top-left y a tank may occupy (exclusive bound for clamping).
pub const MAX_Y: i32 = HEIGHT - TANK_HEIGHT;

// ── Motion ───────────────────────────────────────────────────────────────────

pub const PLAYER_STEP: i32 = 3;
pub const ENEMY_STEP: i32 = 2;
pub const BULLET_STEP: i32 = 6;

/// Distance from a screen edge at which a tank passes through a door.
pub const DOOR_MARGIN: i32 = 4;
/// Landing offset from the near edge after passing through a door.
pub const DOOR_LANDING: i32 = 5;

/// Distance from an edge at which an enemy starts steering away from it.
pub const EDGE_NUDGE: i32 = 2;

// ── Animation ────────────────────────────────────────────────────────────────

pub const EXPLOSION_FRAMES: u8 = 3;
pub const WRECK_FRAMES: u8 = 2;

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const START_SCORE: f64 = 1000.0;
pub const SCORE_DECAY: f64 = 0.1;

// ── Timing ───────────────────────────────────────────────────────────────────

pub const DEFAULT_FPS: u32 = 14;

/// Frame budget for a given tick rate.  A rate of zero falls back to the default.
pub fn frame_interval(fps: u32) -> Duration {
    let fps = if fps == 0 { DEFAULT_FPS } else { fps };
    Duration::from_millis(1000 / u64::from(fps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_interval_matches_default_rate() {
        assert_eq!(frame_interval(DEFAULT_FPS), Duration::from_millis(71));
        assert_eq!(frame_interval(0), frame_interval(DEFAULT_FPS));
    }

    #[test]
    fn tank_bounds() {
        assert_eq!(MAX_X, 768);
        assert_eq!(MAX_Y, 568);
    }
}
