//! Random boat placement with a deterministic full-scan fallback.

use rand::Rng;

use crate::board::Board;
use crate::boat::{Boat, Orientation};
use crate::common::GameError;
use crate::config::PLACEMENT_ATTEMPTS;

/// Anchor and orientation chosen for a boat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
}

/// A way of finding a free slot for a boat of a given size.
pub trait PlacementStrategy {
    fn find_slot<R: Rng>(&self, board: &Board, size: usize, rng: &mut R) -> Option<Slot>;
}

/// Returns `true` when every cell of the boat is on the board and unoccupied.
pub fn fits(board: &Board, size: usize, slot: Slot) -> bool {
    (0..size).all(|i| {
        slot.orientation
            .step(slot.x, slot.y, i)
            .and_then(|(x, y)| board.cell(x, y))
            .is_some_and(|cell| !cell.is_occupied())
    })
}

/// Picks orientation and anchor uniformly at random, up to `attempts` times.
#[derive(Debug, Clone, Copy)]
pub struct RandomPlacement {
    attempts: usize,
}

impl RandomPlacement {
    pub fn new(attempts: usize) -> Self {
        Self { attempts }
    }
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self::new(PLACEMENT_ATTEMPTS)
    }
}

impl PlacementStrategy for RandomPlacement {
    fn find_slot<R: Rng>(&self, board: &Board, size: usize, rng: &mut R) -> Option<Slot> {
        let n = board.size();
        // a boat longer than the board has no in-bounds anchor in either direction
        let max_along = n.checked_sub(size)?;
        for _ in 0..self.attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (max_along, n - 1),
                Orientation::Vertical => (n - 1, max_along),
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let slot = Slot { x, y, orientation };
            if fits(board, size, slot) {
                return Some(slot);
            }
        }
        None
    }
}

/// Row-major scan trying horizontal before vertical at each cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanPlacement;

impl PlacementStrategy for ScanPlacement {
    fn find_slot<R: Rng>(&self, board: &Board, size: usize, _rng: &mut R) -> Option<Slot> {
        let n = board.size();
        (0..n)
            .flat_map(|y| (0..n).map(move |x| (x, y)))
            .flat_map(|(x, y)| Orientation::ALL.map(|orientation| Slot { x, y, orientation }))
            .find(|slot| fits(board, size, *slot))
    }
}

/// Mark the boat's cells as occupied by it.
pub(crate) fn occupy(board: &mut Board, boat: &Boat) {
    for pos in boat.positions() {
        if let Some(cell) = board.cell_mut(pos.x, pos.y) {
            cell.boat = Some(boat.id());
        }
    }
}

/// Place one boat per entry of `sizes`, in order, with identifiers equal to
/// their index. Each boat avoids every boat placed before it.
pub fn place_boats<R: Rng>(
    board: &mut Board,
    sizes: &[usize],
    rng: &mut R,
) -> Result<Vec<Boat>, GameError> {
    let random = RandomPlacement::default();
    let mut boats = Vec::with_capacity(sizes.len());
    for (id, &size) in sizes.iter().enumerate() {
        if size == 0 {
            return Err(GameError::InvalidBoatSize { id });
        }
        let slot = match random.find_slot(board, size, rng) {
            Some(slot) => slot,
            None => {
                log::debug!(
                    "random placement exhausted for boat {} (size {}), scanning",
                    id,
                    size
                );
                ScanPlacement
                    .find_slot(board, size, rng)
                    .ok_or(GameError::UnableToPlaceBoat { id, size })?
            }
        };
        let boat = Boat::new(id, size, slot.x, slot.y, slot.orientation);
        occupy(board, &boat);
        boats.push(boat);
    }
    Ok(boats)
}
