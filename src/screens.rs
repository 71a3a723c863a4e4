//! Screen topology: four screens in a 2×2 grid joined by gated openings.

use crate::config::{DOOR_LANDING, DOOR_MARGIN, MAX_X, MAX_Y, TANK_HEIGHT, TANK_WIDTH};
use crate::entities::ScreenId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Doors of each screen in the order they are tested.
static DOORS: [[(Edge, ScreenId); 2]; 4] = [
    [(Edge::Right, ScreenId::TOP_RIGHT), (Edge::Bottom, ScreenId::BOTTOM_LEFT)],
    [(Edge::Left, ScreenId::TOP_LEFT), (Edge::Bottom, ScreenId::BOTTOM_RIGHT)],
    [(Edge::Top, ScreenId::TOP_LEFT), (Edge::Right, ScreenId::BOTTOM_RIGHT)],
    [(Edge::Left, ScreenId::BOTTOM_LEFT), (Edge::Top, ScreenId::TOP_RIGHT)],
];

/// Result of a tank reaching a door: where it lands on the next screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub to: ScreenId,
    pub x: i32,
    pub y: i32,
}

fn doors(screen: ScreenId) -> &'static [(Edge, ScreenId)] {
    DOORS
        .get(usize::from(screen.0))
        .map(|d| d.as_slice())
        .unwrap_or(&[])
}

/// The screen on the other side of `edge`, if that edge has a door.
pub fn neighbour(screen: ScreenId, edge: Edge) -> Option<ScreenId> {
    doors(screen)
        .iter()
        .find(|(e, _)| *e == edge)
        .map(|&(_, to)| to)
}

/// Whether `edge` of `screen` has an opening in its wall.
pub fn is_gated(screen: ScreenId, edge: Edge) -> bool {
    neighbour(screen, edge).is_some()
}

/// Test a tank's top-left position against the doors of its screen.
///
/// Landing spots sit well inside the margin of the opposite edge, so a tank
/// that has just crossed cannot bounce straight back on the next tick.
pub fn door_crossing(screen: ScreenId, x: i32, y: i32) -> Option<Crossing> {
    doors(screen).iter().find_map(|&(edge, to)| {
        let landing = match edge {
            Edge::Right if x >= MAX_X - DOOR_MARGIN => (DOOR_LANDING, y),
            Edge::Bottom if y >= MAX_Y - DOOR_MARGIN => (x, DOOR_LANDING),
            Edge::Left if x < DOOR_MARGIN => (MAX_X - (TANK_WIDTH + 1), y),
            Edge::Top if y < DOOR_MARGIN => (x, MAX_Y - (TANK_HEIGHT + 1)),
            _ => return None,
        };
        Some(Crossing {
            to,
            x: landing.0,
            y: landing.1,
        })
    })
}
