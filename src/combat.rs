//! Firing, hit tests and damage resolution.

use tracing::debug;

use crate::config::{BLOCK_HEIGHT, BLOCK_WIDTH, EXPLOSION_HEIGHT, EXPLOSION_WIDTH, TANK_HEIGHT, TANK_WIDTH};
use crate::entities::{Bullet, Explosion, Faction, TankId, World};
use crate::geometry::Rect;
use crate::render::Audio;

/// What a bullet struck this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Tank(TankId),
    /// Index into `World::blocks`.
    Wall(usize),
}

// ── Hit tests (active screen only) ───────────────────────────────────────────

/// Last tank in collection order whose body contains the point.  Wrecks
/// count: they still stop bullets.
pub fn tank_at(world: &World, x: i32, y: i32) -> Option<TankId> {
    world
        .tanks
        .iter()
        .enumerate()
        .rev()
        .find(|(_, t)| {
            t.screen == world.active_screen
                && Rect::at(t.x, t.y, TANK_WIDTH, TANK_HEIGHT).contains(x, y)
        })
        .map(|(i, _)| TankId(i))
}

/// Last wall block whose hitbox contains the point.  The hitbox starts one
/// pixel above and left of the block so the strict test still covers the
/// block's first row and column.
pub fn wall_at(world: &World, x: i32, y: i32) -> Option<usize> {
    world
        .blocks
        .iter()
        .enumerate()
        .rev()
        .find(|(_, b)| {
            b.screen == world.active_screen
                && Rect::new(b.x - 1, b.y - 1, b.x + BLOCK_WIDTH, b.y + BLOCK_HEIGHT).contains(x, y)
        })
        .map(|(i, _)| i)
}

// ── Firing ───────────────────────────────────────────────────────────────────

/// Spawn a bullet at the tank's barrel tip, heading the way it faces.
pub fn fire(world: &mut World, id: TankId) -> bool {
    let Some(tank) = world.tank(id) else {
        return false;
    };
    let (x, y) = tank.muzzle_point();
    let bullet = Bullet {
        x,
        y,
        screen: tank.screen,
        heading: tank.facing,
        travel: 0,
    };
    world.bullets.push(bullet);
    true
}

// ── Damage ───────────────────────────────────────────────────────────────────

fn spawn_explosion(world: &mut World, x: i32, y: i32) {
    world.explosions.push(Explosion {
        x: x - EXPLOSION_WIDTH / 2,
        y: y - EXPLOSION_HEIGHT / 2,
        screen: world.active_screen,
        frame: 0,
    });
}

fn destroy(world: &mut World, id: TankId) {
    if let Some(tank) = world.tank_mut(id) {
        tank.faction = Faction::Destroyed;
        tank.wreck_frame = 0;
        debug!(tank = id.0, x = tank.x, y = tank.y, "tank destroyed");
    }
}

/// Resolve every bullet against tanks, then walls, on the active screen.
///
/// A bullet touching both is credited to the tank.  Each hit removes the
/// bullet, leaves one explosion behind and plays the impact sound.  Bullets
/// that hit nothing keep flying.
pub fn resolve_collisions(world: &mut World, audio: &mut impl Audio) -> Vec<Hit> {
    let mut hits = Vec::new();

    for i in (0..world.bullets.len()).rev() {
        let (x, y) = (world.bullets[i].x, world.bullets[i].y);
        let hit = if let Some(id) = tank_at(world, x, y) {
            Hit::Tank(id)
        } else if let Some(block) = wall_at(world, x, y) {
            debug!(block, x, y, "bullet hit wall");
            Hit::Wall(block)
        } else {
            continue;
        };

        if let Hit::Tank(id) = hit {
            destroy(world, id);
        }
        spawn_explosion(world, x, y);
        world.bullets.remove(i);
        audio.play_impact();
        hits.push(hit);
    }
    hits
}
