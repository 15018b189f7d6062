//! Square grid of cells tracking boat occupancy and attack outcomes.

use crate::common::GameError;

/// What an attack on a cell has revealed so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Empty,
    Miss,
    Hit,
}

/// A single board square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) state: CellState,
    pub(crate) boat: Option<usize>,
    pub(crate) revealed: bool,
}

impl Cell {
    /// Outcome of the first attack on this cell, `Empty` until then.
    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_occupied(&self) -> bool {
        self.boat.is_some()
    }

    /// Identifier of the boat covering this cell.
    pub fn boat_id(&self) -> Option<usize> {
        self.boat
    }

    /// Whether the cell has been attacked at least once.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// A `size`×`size` grid, stored row-major (`cells[y][x]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a board with every cell empty, unoccupied and unrevealed.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize);
        }
        Ok(Board {
            size,
            cells: vec![vec![Cell::default(); size]; size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bounds check for signed coordinates coming off the wire.
    pub fn is_valid_position(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.size as u64 && (y as u64) < self.size as u64
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get(y).and_then(|row| row.get(x))
    }

    pub(crate) fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.cells.get_mut(y).and_then(|row| row.get_mut(x))
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|row| row.as_slice())
    }
}
