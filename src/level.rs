//! The four hand-placed screen layouts and level (re)initialisation.

use crate::compute::live_counts;
use crate::config::{BLOCK_HEIGHT, BLOCK_WIDTH, HEIGHT, START_SCORE, WIDTH};
use crate::entities::{Block, Direction, Faction, LiveCounts, ScreenId, Tank, Tree, World};
use crate::screens::{is_gated, Edge};

/// A straight line of wall blocks starting at `(x, y)`.
struct Run {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    count: i32,
}

const fn row(x: i32, y: i32, count: i32) -> Run {
    Run { x, y, dx: 1, dy: 0, count }
}

const fn column(x: i32, y: i32, count: i32) -> Run {
    Run { x, y, dx: 0, dy: 1, count }
}

struct TankSpawn {
    x: i32,
    y: i32,
    facing: Direction,
    faction: Faction,
}

const fn enemy(x: i32, y: i32, facing: Direction) -> TankSpawn {
    TankSpawn { x, y, facing, faction: Faction::Enemy }
}

struct ScreenLayout {
    screen: ScreenId,
    interior: &'static [Run],
    tanks: &'static [TankSpawn],
    trees: &'static [(i32, i32)],
}

// ── Layouts ──────────────────────────────────────────────────────────────────

const LOWER_TREES: [(i32, i32); 6] = [
    (355, 290),
    (340, 310),
    (350, 315),
    (180, 170),
    (206, 160),
    (216, 165),
];

static LAYOUTS: [ScreenLayout; 4] = [
    ScreenLayout {
        screen: ScreenId::TOP_LEFT,
        interior: &[row(90, 110, 20), row(90, 430, 20)],
        tanks: &[
            TankSpawn { x: 20, y: 20, facing: Direction::Down, faction: Faction::Player },
            enemy(150, 30, Direction::Down),
            enemy(160, 200, Direction::Right),
        ],
        trees: &[(260, 300), (340, 410), (350, 80)],
    },
    ScreenLayout {
        screen: ScreenId::TOP_RIGHT,
        interior: &[column(90, 110, 20), column(410, 110, 20)],
        tanks: &[enemy(WIDTH - 40, 30, Direction::Down), enemy(160, 200, Direction::Right)],
        trees: &[(360, 300), (340, 310), (350, 315), (180, 170), (206, 160), (216, 165)],
    },
    ScreenLayout {
        screen: ScreenId::BOTTOM_LEFT,
        interior: &[column(90, 115, 22), column(442, 115, 22)],
        tanks: &[
            enemy(WIDTH - 40, 30, Direction::Down),
            enemy(160, HEIGHT - 60, Direction::Right),
        ],
        trees: &LOWER_TREES,
    },
    ScreenLayout {
        screen: ScreenId::BOTTOM_RIGHT,
        interior: &[row(110, 110, 18), row(110, 398, 18), column(110, 110, 18)],
        tanks: &[
            enemy(WIDTH - 40, 30, Direction::Down),
            enemy(160, HEIGHT - 60, Direction::Right),
        ],
        trees: &LOWER_TREES,
    },
];

// ── Door gaps ────────────────────────────────────────────────────────────────

const GATE_X1: i32 = WIDTH / 4 + BLOCK_WIDTH / 2;
const GATE_X2: i32 = GATE_X1 * 2;
const GATE_Y1: i32 = HEIGHT / 4 + BLOCK_HEIGHT / 2;
const GATE_Y2: i32 = GATE_Y1 * 2;

fn in_gap(pos: i32, from: i32, to: i32) -> bool {
    (from..to).contains(&pos)
}

/// Outer wall of a screen: each axis has one solid edge and one edge with a
/// door gap facing the neighbouring screen.
fn perimeter(screen: ScreenId, blocks: &mut Vec<Block>) {
    let mut push = |x, y| blocks.push(Block { x, y, screen });

    let (solid_y, gated_y) = if is_gated(screen, Edge::Bottom) {
        (0, HEIGHT - BLOCK_HEIGHT)
    } else {
        (HEIGHT - BLOCK_HEIGHT, 0)
    };
    for x in (BLOCK_WIDTH..WIDTH - BLOCK_WIDTH).step_by(BLOCK_WIDTH as usize) {
        push(x, solid_y);
        if !in_gap(x, GATE_X1, GATE_X2) {
            push(x, gated_y);
        }
    }

    let (solid_x, gated_x) = if is_gated(screen, Edge::Right) {
        (0, WIDTH - BLOCK_WIDTH)
    } else {
        (WIDTH - BLOCK_WIDTH, 0)
    };
    for y in (0..HEIGHT - BLOCK_HEIGHT).step_by(BLOCK_HEIGHT as usize) {
        push(solid_x, y);
        if !in_gap(y, GATE_Y1, GATE_Y2) {
            push(gated_x, y);
        }
    }
}

fn lay_run(run: &Run, screen: ScreenId, blocks: &mut Vec<Block>) {
    blocks.extend((0..run.count).map(|i| Block {
        x: run.x + i * run.dx * BLOCK_WIDTH,
        y: run.y + i * run.dy * BLOCK_HEIGHT,
        screen,
    }));
}

// ── Public entry point ───────────────────────────────────────────────────────

/// Build a fresh level: every tank, wall and tree in its starting place,
/// no bullets or explosions, full score, screen 0 active.
pub fn init_world() -> World {
    let mut world = World {
        tanks: Vec::new(),
        bullets: Vec::new(),
        explosions: Vec::new(),
        blocks: Vec::new(),
        trees: Vec::new(),
        active_screen: ScreenId::TOP_LEFT,
        counts: LiveCounts::default(),
        score: START_SCORE,
        frame: 0,
    };

    for layout in &LAYOUTS {
        let screen = layout.screen;
        perimeter(screen, &mut world.blocks);
        for run in layout.interior {
            lay_run(run, screen, &mut world.blocks);
        }
        world.tanks.extend(
            layout
                .tanks
                .iter()
                .map(|t| Tank::new(t.x, t.y, screen, t.facing, t.faction)),
        );
        world
            .trees
            .extend(layout.trees.iter().map(|&(x, y)| Tree { x, y, screen }));
    }

    world.counts = live_counts(&world.tanks);

    tracing::info!(
        tanks = world.tanks.len(),
        blocks = world.blocks.len(),
        trees = world.trees.len(),
        "level initialised"
    );
    world
}
