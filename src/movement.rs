//! Tank movement, door crossings and bullet flight.

use tracing::debug;

use crate::combat::{tank_at, wall_at};
use crate::config::{BULLET_STEP, HEIGHT, MAX_X, MAX_Y, WIDTH};
use crate::entities::{Bullet, Faction, ScreenId, TankId, World};
use crate::screens::door_crossing;

// ── Axis clamping ────────────────────────────────────────────────────────────

/// Step toward the top/left edge; anything below 1 snaps to 0.
pub fn move_top_left(pos: i32, step: i32) -> i32 {
    let pos = pos - step;
    if pos < 1 {
        0
    } else {
        pos
    }
}

/// Step toward the bottom/right edge, stopping one short of `max`.
pub fn move_bottom_right(pos: i32, step: i32, max: i32) -> i32 {
    let pos = pos + step;
    if pos >= max {
        max - 1
    } else {
        pos
    }
}

fn step_axis(pos: i32, delta: i32, step: i32, max: i32) -> i32 {
    match delta.signum() {
        -1 => move_top_left(pos, step),
        1 => move_bottom_right(pos, step, max),
        _ => pos,
    }
}

// ── Tanks ────────────────────────────────────────────────────────────────────

/// Whether a point on the active screen is occupied by a tank or a wall.
pub fn blocked(world: &World, x: i32, y: i32) -> bool {
    tank_at(world, x, y).is_some() || wall_at(world, x, y).is_some()
}

/// Drive a tank `step` pixels along its facing.
///
/// Only the barrel tip at the tank's current position is probed; if it
/// touches anything the tank stays put for this tick.  Door crossing is
/// checked either way.  Returns whether the tank moved.
pub fn move_tank(world: &mut World, id: TankId, step: i32) -> bool {
    let Some(tank) = world.tank(id) else {
        return false;
    };
    let (dx, dy) = tank.facing.delta();
    let x = step_axis(tank.x, dx, step, MAX_X);
    let y = step_axis(tank.y, dy, step, MAX_Y);
    let (probe_x, probe_y) = tank.muzzle_point();

    let moved = !blocked(world, probe_x, probe_y);
    if moved {
        if let Some(tank) = world.tank_mut(id) {
            tank.x = x;
            tank.y = y;
        }
    }
    cross_door(world, id);
    moved
}

/// Relocate a tank that has reached a door onto the neighbouring screen.
///
/// Only the player carries the active screen along with it.
pub fn cross_door(world: &mut World, id: TankId) -> Option<ScreenId> {
    let tank = world.tanks.get_mut(id.0)?;
    let crossing = door_crossing(tank.screen, tank.x, tank.y)?;
    let from = tank.screen;
    tank.screen = crossing.to;
    tank.x = crossing.x;
    tank.y = crossing.y;

    if tank.faction == Faction::Player {
        world.active_screen = crossing.to;
    }
    debug!(tank = id.0, from = from.0, to = crossing.to.0, "through door");
    Some(crossing.to)
}

// ── Bullets ──────────────────────────────────────────────────────────────────

fn advance_axis(pos: &mut i32, delta: i32, extent: i32) -> bool {
    match delta.signum() {
        -1 if *pos - BULLET_STEP > 1 => *pos -= BULLET_STEP,
        1 if *pos + BULLET_STEP < extent => *pos += BULLET_STEP,
        0 => {}
        _ => return false,
    }
    true
}

/// Move one bullet a step along its heading.  Returns `false` once either
/// axis would leave the playfield; the bullet is then spent.
pub fn advance_bullet(bullet: &mut Bullet) -> bool {
    bullet.travel += BULLET_STEP;
    let (dx, dy) = bullet.heading.delta();
    let in_x = advance_axis(&mut bullet.x, dx, WIDTH);
    let in_y = advance_axis(&mut bullet.y, dy, HEIGHT);
    in_x && in_y
}

/// Advance every bullet and drop the ones that ran off the playfield.
pub fn advance_bullets(world: &mut World) {
    world.bullets.retain_mut(advance_bullet);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_snaps_to_zero() {
        assert_eq!(move_top_left(10, 3), 7);
        assert_eq!(move_top_left(3, 3), 0);
        assert_eq!(move_top_left(1, 3), 0);
    }

    #[test]
    fn bottom_right_stops_short_of_max() {
        assert_eq!(move_bottom_right(10, 3, 768), 13);
        assert_eq!(move_bottom_right(766, 3, 768), 767);
    }

    #[test]
    fn stationary_axis_is_untouched() {
        assert_eq!(step_axis(42, 0, 3, 768), 42);
    }
}
