//! Point-in-rectangle test shared by every collision query.

/// Axis-aligned rectangle given by its two corners, `x1 < x2` and `y1 < y2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rectangle anchored at its top-left corner.
    pub fn at(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        point_in_rect(px, py, self.x1, self.y1, self.x2, self.y2)
    }
}

/// Strict interior containment: a point on any edge is outside.
pub fn point_in_rect(px: i32, py: i32, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
    x1 < px && px < x2 && y1 < py && py < y2
}
