//! Per-frame game logic.
//!
//! Public functions take an immutable reference to the current [`World`]
//! and return a new one, the same way for player input and for a full tick.
//! Randomness and sound come in through the injected `rng` and `audio`.

use rand::Rng;

use crate::ai::enemy_turn;
use crate::combat::{fire, resolve_collisions};
use crate::config::{EXPLOSION_FRAMES, PLAYER_STEP, SCORE_DECAY, WRECK_FRAMES};
use crate::entities::{Faction, LiveCounts, Tank, TankId, World, PLAYER};
use crate::movement::{advance_bullets, move_tank};
use crate::render::Audio;

// ── Player input ─────────────────────────────────────────────────────────────

/// A discrete request from the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    TurnClockwise,
    TurnCounterClockwise,
    Forward,
    Fire,
}

fn player_alive(world: &World) -> bool {
    world
        .player()
        .map_or(false, |p| p.faction == Faction::Player)
}

pub fn turn_player_clockwise(state: &World) -> World {
    let mut world = state.clone();
    if player_alive(&world) {
        if let Some(p) = world.tank_mut(PLAYER) {
            p.facing = p.facing.clockwise();
        }
    }
    world
}

pub fn turn_player_counter_clockwise(state: &World) -> World {
    let mut world = state.clone();
    if player_alive(&world) {
        if let Some(p) = world.tank_mut(PLAYER) {
            p.facing = p.facing.counter_clockwise();
        }
    }
    world
}

pub fn drive_player(state: &World) -> World {
    let mut world = state.clone();
    if player_alive(&world) {
        move_tank(&mut world, PLAYER, PLAYER_STEP);
    }
    world
}

pub fn player_fire(state: &World) -> World {
    let mut world = state.clone();
    if player_alive(&world) {
        fire(&mut world, PLAYER);
    }
    world
}

pub fn apply_intent(state: &World, intent: Intent) -> World {
    match intent {
        Intent::TurnClockwise => turn_player_clockwise(state),
        Intent::TurnCounterClockwise => turn_player_counter_clockwise(state),
        Intent::Forward => drive_player(state),
        Intent::Fire => player_fire(state),
    }
}

// ── Game over ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    PlayerWins,
    PlayerLoses,
}

impl Outcome {
    /// 0 = keep playing, 1 = won, 2 = lost.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Continue => 0,
            Outcome::PlayerWins => 1,
            Outcome::PlayerLoses => 2,
        }
    }

    pub fn is_over(self) -> bool {
        self != Outcome::Continue
    }
}

pub fn live_counts(tanks: &[Tank]) -> LiveCounts {
    tanks.iter().fold(LiveCounts::default(), |mut c, t| {
        match t.faction {
            Faction::Player => c.player += 1,
            Faction::Enemy => c.enemy += 1,
            Faction::Destroyed => {}
        }
        c
    })
}

/// Losing the player outranks clearing the last enemy.
pub fn evaluate(counts: LiveCounts) -> Outcome {
    if counts.player == 0 {
        Outcome::PlayerLoses
    } else if counts.enemy == 0 {
        Outcome::PlayerWins
    } else {
        Outcome::Continue
    }
}

pub fn check_game_over(world: &World) -> Outcome {
    evaluate(live_counts(&world.tanks))
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

fn animate_explosions(world: &mut World) {
    world.explosions.retain_mut(|e| {
        e.frame += 1;
        e.frame < EXPLOSION_FRAMES
    });
}

fn animate_wrecks(world: &mut World) {
    for tank in world.tanks.iter_mut().filter(|t| !t.is_alive()) {
        tank.wreck_frame = (tank.wreck_frame + 1) % WRECK_FRAMES;
    }
}

/// Advance the simulation by one frame.
///
/// Order: enemy AI, bullet flight, explosion and wreck animation, live
/// counts, collision resolution, score decay.  Call [`check_game_over`] on
/// the result to find out whether the round has ended.
pub fn tick(state: &World, rng: &mut impl Rng, audio: &mut impl Audio) -> World {
    let mut world = state.clone();
    world.frame += 1;

    for i in (0..world.tanks.len()).rev() {
        if world.tanks[i].faction == Faction::Enemy {
            enemy_turn(&mut world, TankId(i), rng);
        }
    }

    advance_bullets(&mut world);
    animate_explosions(&mut world);
    animate_wrecks(&mut world);
    world.counts = live_counts(&world.tanks);
    resolve_collisions(&mut world, audio);

    if world.score > 0.0 {
        world.score -= SCORE_DECAY;
    }
    world
}
