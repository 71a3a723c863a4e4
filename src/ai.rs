//! Enemy tank behaviour: a random walk with edge avoidance, plus a
//! firing-cone test against the player.

use rand::Rng;
use tracing::debug;

use crate::combat::fire;
use crate::config::{EDGE_NUDGE, ENEMY_STEP, MAX_X, MAX_Y};
use crate::entities::{Direction, Faction, Tank, TankId, World};
use crate::movement::move_tank;

/// Sentinel slope used when the player is level with the shooter.
const FLAT_SLOPE: i32 = 999;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    TurnClockwise,
    TurnCounterClockwise,
    Advance,
}

/// Map a roll in `1..=10` onto this tick's decision.
pub fn decide(roll: u32) -> Decision {
    match roll {
        2 => Decision::TurnClockwise,
        4 => Decision::TurnCounterClockwise,
        _ => Decision::Advance,
    }
}

/// Corrective turn for a tank that has drifted up against an edge.  The
/// first edge that applies wins; facings that already lead away are kept.
pub fn edge_nudge(x: i32, y: i32, facing: Direction) -> Direction {
    use Direction::*;

    if y < EDGE_NUDGE {
        match facing {
            Up | UpRight => facing.clockwise(),
            UpLeft => facing.counter_clockwise(),
            _ => facing,
        }
    } else if y >= MAX_Y - EDGE_NUDGE {
        match facing {
            DownRight | Down | DownLeft => facing.counter_clockwise(),
            Left => facing.clockwise(),
            _ => facing,
        }
    } else if x < EDGE_NUDGE {
        match facing {
            UpLeft => Up,
            DownLeft | Left => facing.counter_clockwise(),
            _ => facing,
        }
    } else if x >= MAX_X - EDGE_NUDGE {
        match facing {
            UpRight | Right | DownRight => facing.counter_clockwise(),
            _ => facing,
        }
    } else {
        facing
    }
}

/// Whether `shooter` is pointed roughly at `target`.
///
/// `t` is the horizontal-over-vertical slope (×100) from shooter to target,
/// with `delta_y` positive when the target is above.  Cardinal facings accept
/// a narrow cone, diagonals a band of slopes on the matching side.
pub fn aiming_at(shooter: &Tank, target: &Tank) -> bool {
    let (sx, sy) = shooter.center();
    let (tx, ty) = target.center();
    let delta_x = tx - sx;
    let delta_y = sy - ty;
    let t = if delta_y != 0 {
        (delta_x * 100) / delta_y
    } else {
        FLAT_SLOPE
    };
    let rising = t > 40 && t < 300;
    let falling = t < -40 && t > -300;

    match shooter.facing {
        Direction::Up => delta_y > 1 && t.abs() < 20,
        Direction::UpRight => delta_x > 1 && rising,
        Direction::Right => delta_x > 1 && t.abs() > 400,
        Direction::DownRight => delta_x > 1 && falling,
        Direction::Down => delta_y < -1 && t.abs() < 20,
        Direction::DownLeft => delta_x < -1 && rising,
        Direction::Left => delta_x < -1 && t.abs() > 400,
        Direction::UpLeft => delta_x < -1 && falling,
    }
}

/// Whether an enemy should open fire this tick: it must share the active
/// screen and the player must still be alive and inside its cone.
pub fn should_fire(world: &World, id: TankId) -> bool {
    let (Some(shooter), Some(player)) = (world.tank(id), world.player()) else {
        return false;
    };
    player.faction == Faction::Player
        && shooter.screen == world.active_screen
        && aiming_at(shooter, player)
}

/// Run one enemy's turn with a pre-drawn roll.
pub fn enemy_turn_with_roll(world: &mut World, id: TankId, roll: u32) {
    match world.tank(id) {
        Some(tank) if tank.faction == Faction::Enemy => {}
        _ => return,
    }

    match decide(roll) {
        Decision::TurnClockwise => {
            if let Some(tank) = world.tank_mut(id) {
                tank.facing = tank.facing.clockwise();
            }
        }
        Decision::TurnCounterClockwise => {
            if let Some(tank) = world.tank_mut(id) {
                tank.facing = tank.facing.counter_clockwise();
            }
        }
        Decision::Advance => {
            move_tank(world, id, ENEMY_STEP);
            if let Some(tank) = world.tank_mut(id) {
                tank.facing = edge_nudge(tank.x, tank.y, tank.facing);
            }
        }
    }

    if should_fire(world, id) {
        debug!(tank = id.0, "enemy fires");
        fire(world, id);
    }
}

/// Run one enemy's turn, drawing its decision from `rng`.
pub fn enemy_turn(world: &mut World, id: TankId, rng: &mut impl Rng) {
    let roll = rng.gen_range(1..=10);
    enemy_turn_with_roll(world, id, roll);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_two_and_four_turn() {
        assert_eq!(decide(2), Decision::TurnClockwise);
        assert_eq!(decide(4), Decision::TurnCounterClockwise);
        for roll in [1, 3, 5, 6, 7, 8, 9, 10] {
            assert_eq!(decide(roll), Decision::Advance);
        }
    }

    #[test]
    fn nudge_leaves_open_field_alone() {
        for facing in Direction::ALL {
            assert_eq!(edge_nudge(300, 300, facing), facing);
        }
    }

    #[test]
    fn nudge_turns_away_from_top() {
        assert_eq!(edge_nudge(300, 0, Direction::Up), Direction::UpRight);
        assert_eq!(edge_nudge(300, 0, Direction::UpRight), Direction::Right);
        assert_eq!(edge_nudge(300, 0, Direction::UpLeft), Direction::Left);
        assert_eq!(edge_nudge(300, 0, Direction::Down), Direction::Down);
    }

    #[test]
    fn nudge_turns_away_from_bottom() {
        assert_eq!(edge_nudge(300, MAX_Y - 1, Direction::Down), Direction::DownRight);
        assert_eq!(edge_nudge(300, MAX_Y - 1, Direction::Left), Direction::UpLeft);
    }

    #[test]
    fn nudge_turns_away_from_sides() {
        assert_eq!(edge_nudge(0, 300, Direction::UpLeft), Direction::Up);
        assert_eq!(edge_nudge(0, 300, Direction::Left), Direction::DownLeft);
        assert_eq!(edge_nudge(MAX_X - 1, 300, Direction::Right), Direction::UpRight);
        assert_eq!(edge_nudge(MAX_X - 1, 300, Direction::UpRight), Direction::Up);
    }
}
