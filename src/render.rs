//! Interfaces to the presentation layer.
//!
//! The simulation never touches a concrete renderer or sound device.  A
//! front-end implements [`Canvas`] and [`Audio`]; [`paint`] walks the world
//! and hands it everything visible on the active screen.

use crate::config::{
    BLOCK_HEIGHT, BLOCK_WIDTH, EXPLOSION_HEIGHT, EXPLOSION_WIDTH, HEIGHT, TANK_HEIGHT, TANK_WIDTH,
    TREE_HEIGHT, TREE_WIDTH, WIDTH,
};
use crate::entities::{Faction, World};

// ── Sprites ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Wall,
    PlayerTank,
    EnemyTank,
    Wreck,
    Bullet,
    Explosion,
    Tree,
}

/// One draw call: sprite, pixel rectangle and animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteDraw {
    pub kind: SpriteKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Facing index for live tanks, animation frame otherwise.
    pub frame: u8,
}

const BULLET_SIZE: i32 = 3;

// ── Collaborator interfaces ──────────────────────────────────────────────────

pub trait Canvas {
    fn render_sprite(&mut self, draw: &SpriteDraw);
    fn render_text(&mut self, text: &str, x: i32, y: i32);
}

/// Fire-and-forget sound effects.
pub trait Audio {
    fn play_impact(&mut self);
}

impl<A: Audio + ?Sized> Audio for &mut A {
    fn play_impact(&mut self) {
        (**self).play_impact();
    }
}

/// An audio sink that plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Audio for Silent {
    fn play_impact(&mut self) {}
}

// ── Scene walk ───────────────────────────────────────────────────────────────

/// Everything on the active screen in painting order: walls, tanks,
/// bullets, explosions and finally trees on top.
pub fn visible_sprites(world: &World) -> Vec<SpriteDraw> {
    let screen = world.active_screen;
    let mut draws = Vec::new();

    draws.extend(world.blocks.iter().filter(|b| b.screen == screen).map(|b| SpriteDraw {
        kind: SpriteKind::Wall,
        x: b.x,
        y: b.y,
        width: BLOCK_WIDTH,
        height: BLOCK_HEIGHT,
        frame: 0,
    }));

    draws.extend(world.tanks.iter().filter(|t| t.screen == screen).map(|t| {
        let (kind, frame) = match t.faction {
            Faction::Player => (SpriteKind::PlayerTank, t.facing.index() as u8),
            Faction::Enemy => (SpriteKind::EnemyTank, t.facing.index() as u8),
            Faction::Destroyed => (SpriteKind::Wreck, t.wreck_frame),
        };
        SpriteDraw {
            kind,
            x: t.x,
            y: t.y,
            width: TANK_WIDTH,
            height: TANK_HEIGHT,
            frame,
        }
    }));

    // Bullets are drawn as a small square centred on their position.
    draws.extend(world.bullets.iter().filter(|b| b.screen == screen).map(|b| SpriteDraw {
        kind: SpriteKind::Bullet,
        x: b.x - 1,
        y: b.y - 1,
        width: BULLET_SIZE,
        height: BULLET_SIZE,
        frame: 0,
    }));

    draws.extend(world.explosions.iter().filter(|e| e.screen == screen).map(|e| SpriteDraw {
        kind: SpriteKind::Explosion,
        x: e.x,
        y: e.y,
        width: EXPLOSION_WIDTH,
        height: EXPLOSION_HEIGHT,
        frame: e.frame,
    }));

    draws.extend(world.trees.iter().filter(|t| t.screen == screen).map(|t| SpriteDraw {
        kind: SpriteKind::Tree,
        x: t.x,
        y: t.y,
        width: TREE_WIDTH,
        height: TREE_HEIGHT,
        frame: 0,
    }));

    draws
}

pub fn score_text(world: &World) -> String {
    format!("Score: {:6.1}", world.score)
}

/// Paint one frame of the active screen plus the score line.
pub fn paint(world: &World, canvas: &mut impl Canvas) {
    for draw in visible_sprites(world) {
        canvas.render_sprite(&draw);
    }
    canvas.render_text(&score_text(world), WIDTH - 150, HEIGHT - 80);
}
