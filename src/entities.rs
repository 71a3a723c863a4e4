//! All game entity types: plain data plus the direction lookup tables.

use crate::config::{TANK_HEIGHT, TANK_WIDTH};

// ── Direction ────────────────────────────────────────────────────────────────

/// One of the eight compass facings, clockwise from up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

pub const DIRECTION_COUNT: usize = 8;

/// Unit step per axis for each facing.
const AXIS_DELTA: [(i32, i32); DIRECTION_COUNT] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Offset from a tank's top-left corner to the end of its barrel.
const MUZZLE_OFFSET: [(i32, i32); DIRECTION_COUNT] = [
    (TANK_WIDTH / 2, 0),
    (TANK_WIDTH, 0),
    (TANK_WIDTH, TANK_HEIGHT / 2),
    (TANK_WIDTH, TANK_HEIGHT),
    (TANK_WIDTH / 2, TANK_HEIGHT),
    (0, TANK_HEIGHT),
    (0, TANK_HEIGHT / 2),
    (0, 0),
];

impl Direction {
    pub const ALL: [Direction; DIRECTION_COUNT] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// Any integer maps onto a facing; out-of-range values wrap.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(DIRECTION_COUNT as i32) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn clockwise(self) -> Self {
        Self::from_index(self.index() as i32 + 1)
    }

    pub fn counter_clockwise(self) -> Self {
        Self::from_index(self.index() as i32 - 1)
    }

    pub fn delta(self) -> (i32, i32) {
        AXIS_DELTA[self.index()]
    }

    pub fn muzzle(self) -> (i32, i32) {
        MUZZLE_OFFSET[self.index()]
    }
}

// ── Screens ──────────────────────────────────────────────────────────────────

/// One of the four screens of the 2×2 map:
///
/// ```text
///  0 || 1
/// ========
///  2 || 3
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(pub u8);

impl ScreenId {
    pub const TOP_LEFT: ScreenId = ScreenId(0);
    pub const TOP_RIGHT: ScreenId = ScreenId(1);
    pub const BOTTOM_LEFT: ScreenId = ScreenId(2);
    pub const BOTTOM_RIGHT: ScreenId = ScreenId(3);

    pub const ALL: [ScreenId; 4] = [
        ScreenId::TOP_LEFT,
        ScreenId::TOP_RIGHT,
        ScreenId::BOTTOM_LEFT,
        ScreenId::BOTTOM_RIGHT,
    ];
}

// ── Tanks ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Faction {
    Player,
    Enemy,
    Destroyed,
}

/// Stable handle into `World::tanks`.  Tanks are never removed during a
/// level, so a handle stays valid until the next level load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TankId(pub usize);

/// The player tank always occupies slot 0.
pub const PLAYER: TankId = TankId(0);

#[derive(Clone, Debug, PartialEq)]
pub struct Tank {
    pub x: i32,
    pub y: i32,
    pub screen: ScreenId,
    pub facing: Direction,
    pub faction: Faction,
    /// Wreck flicker frame; only advances once the tank is destroyed.
    pub wreck_frame: u8,
}

impl Tank {
    pub fn new(x: i32, y: i32, screen: ScreenId, facing: Direction, faction: Faction) -> Self {
        Self {
            x,
            y,
            screen,
            facing,
            faction,
            wreck_frame: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.faction != Faction::Destroyed
    }

    /// Pixel position of the barrel tip for the current facing.
    pub fn muzzle_point(&self) -> (i32, i32) {
        let (dx, dy) = self.facing.muzzle();
        (self.x + dx, self.y + dy)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + TANK_WIDTH / 2, self.y + TANK_HEIGHT / 2)
    }
}

// ── Projectiles & effects ────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub screen: ScreenId,
    pub heading: Direction,
    /// Pixels travelled so far.
    pub travel: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub x: i32,
    pub y: i32,
    pub screen: ScreenId,
    pub frame: u8,
}

// ── Scenery ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub screen: ScreenId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    pub x: i32,
    pub y: i32,
    pub screen: ScreenId,
}

// ── Master game state ────────────────────────────────────────────────────────

/// Live tank tally, refreshed once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiveCounts {
    pub player: usize,
    pub enemy: usize,
}

/// The entire simulation state.  Each collection owns its entities outright.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub tanks: Vec<Tank>,
    pub bullets: Vec<Bullet>,
    pub explosions: Vec<Explosion>,
    pub blocks: Vec<Block>,
    pub trees: Vec<Tree>,
    /// The screen being shown and simulated against the player.
    pub active_screen: ScreenId,
    pub counts: LiveCounts,
    pub score: f64,
    pub frame: u64,
}

impl World {
    pub fn tank(&self, id: TankId) -> Option<&Tank> {
        self.tanks.get(id.0)
    }

    pub fn tank_mut(&mut self, id: TankId) -> Option<&mut Tank> {
        self.tanks.get_mut(id.0)
    }

    pub fn player(&self) -> Option<&Tank> {
        self.tank(PLAYER)
    }

    pub fn tank_ids(&self) -> impl DoubleEndedIterator<Item = TankId> {
        (0..self.tanks.len()).map(TankId)
    }
}
