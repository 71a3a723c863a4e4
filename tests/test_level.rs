use rand::rngs::StdRng;
use rand::SeedableRng;

use tank_battle::compute::{apply_intent, tick, Intent};
use tank_battle::entities::*;
use tank_battle::level::init_world;
use tank_battle::render::Silent;

fn blocks_on(world: &World, screen: ScreenId) -> usize {
    world.blocks.iter().filter(|b| b.screen == screen).count()
}

fn has_block(world: &World, screen: ScreenId, x: i32, y: i32) -> bool {
    world
        .blocks
        .iter()
        .any(|b| b.screen == screen && b.x == x && b.y == y)
}

#[test]
fn init_player_first() {
    let w = init_world();
    let p = &w.tanks[0];
    assert_eq!(p.faction, Faction::Player);
    assert_eq!((p.x, p.y), (20, 20));
    assert_eq!(p.facing, Direction::Down);
    assert_eq!(p.screen, ScreenId::TOP_LEFT);
    assert_eq!(
        w.tanks.iter().filter(|t| t.faction == Faction::Player).count(),
        1
    );
}

#[test]
fn init_eight_enemies_two_per_screen() {
    let w = init_world();
    assert_eq!(w.tanks.len(), 9);
    assert_eq!(w.counts, LiveCounts { player: 1, enemy: 8 });
    for screen in ScreenId::ALL {
        let enemies = w
            .tanks
            .iter()
            .filter(|t| t.faction == Faction::Enemy && t.screen == screen)
            .count();
        assert_eq!(enemies, 2, "screen {}", screen.0);
    }
}

#[test]
fn init_enemy_placements() {
    let w = init_world();
    let placed: Vec<(u8, i32, i32, Direction)> = w.tanks[1..]
        .iter()
        .map(|t| (t.screen.0, t.x, t.y, t.facing))
        .collect();
    assert_eq!(
        placed,
        vec![
            (0, 150, 30, Direction::Down),
            (0, 160, 200, Direction::Right),
            (1, 760, 30, Direction::Down),
            (1, 160, 200, Direction::Right),
            (2, 760, 30, Direction::Down),
            (2, 160, 540, Direction::Right),
            (3, 760, 30, Direction::Down),
            (3, 160, 540, Direction::Right),
        ]
    );
}

#[test]
fn init_empty_transients_and_full_score() {
    let w = init_world();
    assert!(w.bullets.is_empty());
    assert!(w.explosions.is_empty());
    assert_eq!(w.score, 1000.0);
    assert_eq!(w.active_screen, ScreenId::TOP_LEFT);
    assert_eq!(w.frame, 0);
}

#[test]
fn block_counts_per_screen() {
    // perimeter: 48 solid + 35 gated across, 37 solid + 27 gated down
    let w = init_world();
    assert_eq!(blocks_on(&w, ScreenId::TOP_LEFT), 147 + 40);
    assert_eq!(blocks_on(&w, ScreenId::TOP_RIGHT), 147 + 40);
    assert_eq!(blocks_on(&w, ScreenId::BOTTOM_LEFT), 147 + 44);
    assert_eq!(blocks_on(&w, ScreenId::BOTTOM_RIGHT), 147 + 54);
    assert_eq!(w.blocks.len(), 766);
}

#[test]
fn tree_counts_per_screen() {
    let w = init_world();
    let on = |s: ScreenId| w.trees.iter().filter(|t| t.screen == s).count();
    assert_eq!(on(ScreenId::TOP_LEFT), 3);
    assert_eq!(on(ScreenId::TOP_RIGHT), 6);
    assert_eq!(on(ScreenId::BOTTOM_LEFT), 6);
    assert_eq!(on(ScreenId::BOTTOM_RIGHT), 6);
    assert!(w
        .trees
        .iter()
        .any(|t| t.screen == ScreenId::TOP_LEFT && (t.x, t.y) == (350, 80)));
}

#[test]
fn doors_face_the_neighbours() {
    let w = init_world();
    // screen 0: right and bottom edges are open in the middle
    assert!(has_block(&w, ScreenId::TOP_LEFT, 784, 144));
    assert!(!has_block(&w, ScreenId::TOP_LEFT, 784, 160));
    assert!(!has_block(&w, ScreenId::TOP_LEFT, 784, 304));
    assert!(has_block(&w, ScreenId::TOP_LEFT, 784, 320));
    assert!(has_block(&w, ScreenId::TOP_LEFT, 192, 584));
    assert!(!has_block(&w, ScreenId::TOP_LEFT, 208, 584));
    assert!(!has_block(&w, ScreenId::TOP_LEFT, 400, 584));
    assert!(has_block(&w, ScreenId::TOP_LEFT, 416, 584));
    // its left and top edges are solid
    assert!(has_block(&w, ScreenId::TOP_LEFT, 0, 208));
    assert!(has_block(&w, ScreenId::TOP_LEFT, 304, 0));

    // screen 3: left and top are open, right and bottom solid
    assert!(!has_block(&w, ScreenId::BOTTOM_RIGHT, 0, 208));
    assert!(!has_block(&w, ScreenId::BOTTOM_RIGHT, 304, 0));
    assert!(has_block(&w, ScreenId::BOTTOM_RIGHT, 784, 208));
    assert!(has_block(&w, ScreenId::BOTTOM_RIGHT, 304, 584));
}

#[test]
fn interior_boxes() {
    let w = init_world();
    assert!(has_block(&w, ScreenId::TOP_LEFT, 90, 110));
    assert!(has_block(&w, ScreenId::TOP_LEFT, 394, 430));
    assert!(has_block(&w, ScreenId::TOP_RIGHT, 410, 414));
    assert!(has_block(&w, ScreenId::BOTTOM_LEFT, 442, 451));
    assert!(has_block(&w, ScreenId::BOTTOM_RIGHT, 382, 398));
    assert!(has_block(&w, ScreenId::BOTTOM_RIGHT, 110, 382));
}

#[test]
fn restart_recreates_the_same_level() {
    let fresh = init_world();

    let mut played = init_world();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        played = apply_intent(&played, Intent::Fire);
        played = apply_intent(&played, Intent::Forward);
        played = tick(&played, &mut rng, &mut Silent);
    }
    assert!(played.score < 1000.0);

    let restarted = init_world();
    assert_eq!(restarted.tanks, fresh.tanks);
    assert_eq!(restarted.blocks, fresh.blocks);
    assert_eq!(restarted.trees, fresh.trees);
    assert!(restarted.bullets.is_empty());
    assert!(restarted.explosions.is_empty());
    assert_eq!(restarted.score, 1000.0);
}
