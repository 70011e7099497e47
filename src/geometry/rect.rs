//! Integer rectangle used throughout the geometry planners.

/// An axis-aligned rectangle with integer origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Create a rectangle from origin and size.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (exclusive).
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (exclusive).
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Horizontal centre.
    pub const fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    /// Vertical centre.
    pub const fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Shrink all four edges inward by `d` (negative `d` grows).
    pub const fn inset(&self, d: i32) -> Self {
        Self {
            x: self.x + d,
            y: self.y + d,
            w: self.w - 2 * d,
            h: self.h - 2 * d,
        }
    }

    /// Grow all four edges outward by `d`.
    pub const fn expand(&self, d: i32) -> Self {
        self.inset(-d)
    }

    /// Move by an offset without changing size.
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Whether both dimensions are strictly positive.
    pub const fn is_valid(&self) -> bool {
        self.w > 0 && self.h > 0
    }
}
