//! Placed boats and the cells they cover.

use core::fmt;

/// Orientation of a boat on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Both orientations, in the order the full scan tries them.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Cell reached by stepping `offset` cells from `(x, y)` along this axis,
    /// or `None` when the coordinate overflows.
    pub fn step(self, x: usize, y: usize, offset: usize) -> Option<(usize, usize)> {
        match self {
            Orientation::Horizontal => Some((x.checked_add(offset)?, y)),
            Orientation::Vertical => Some((x, y.checked_add(offset)?)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("Horizontal"),
            Orientation::Vertical => f.write_str("Vertical"),
        }
    }
}

/// Board coordinate of a boat segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// A boat anchored at (`x`, `y`) and extending `size` cells along `orientation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boat {
    id: usize,
    size: usize,
    x: usize,
    y: usize,
    orientation: Orientation,
    hit_count: usize,
}

impl Boat {
    pub fn new(id: usize, size: usize, x: usize, y: usize, orientation: Orientation) -> Self {
        Self {
            id,
            size,
            x,
            y,
            orientation,
            hit_count: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Anchor cell (x, y).
    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hits registered against this boat.
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Cells covered by the boat, starting at the anchor.
    pub fn positions(&self) -> Vec<Position> {
        (0..self.size)
            .filter_map(|i| self.orientation.step(self.x, self.y, i))
            .map(|(x, y)| Position { x, y })
            .collect()
    }

    pub fn is_afloat(&self) -> bool {
        self.hit_count < self.size
    }

    pub(crate) fn register_hit(&mut self) {
        self.hit_count += 1;
    }
}
