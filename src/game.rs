//! Authoritative game state: board, boats and attack history behind one lock.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::Rng;

use crate::{
    board::{Board, CellState},
    boat::Boat,
    common::{AttackResult, GameError},
    config::GameConfig,
    domain::{BoardResponse, HitInfo, HitResponse, CELL_HIT, CELL_MISS, CELL_UNREVEALED},
    placement::{self, Slot},
};

/// How repeated attacks on an already hit cell count against a boat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DamagePolicy {
    /// Every attack on an occupied cell adds damage, repeats included.
    #[default]
    EveryAttack,
    /// Only the first attack on each occupied cell adds damage.
    DistinctCells,
}

pub(crate) struct GameState {
    pub(crate) board: Board,
    pub(crate) boats: Vec<Boat>,
    pub(crate) received_hits: Vec<HitInfo>,
}

/// One player's board as seen by attackers.
///
/// Attacks take the write lock for their whole body; every view takes the
/// read lock, so readers never observe a half-applied attack.
pub struct Game {
    state: RwLock<GameState>,
    damage_policy: DamagePolicy,
}

impl Game {
    /// Build a game with boats placed from the thread RNG.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, &mut rand::rng())
    }

    /// Build a game with boats placed from `rng`, for reproducible layouts.
    pub fn with_rng<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let mut board = Board::new(config.board_size)?;
        let boats = placement::place_boats(&mut board, &config.boat_sizes, rng)?;
        Ok(Self::from_parts(board, boats, config.damage_policy))
    }

    /// Build a game from explicit `(size, slot)` placements. Boat identifiers
    /// follow the order of `layout`.
    pub fn with_layout(
        board_size: usize,
        layout: &[(usize, Slot)],
        damage_policy: DamagePolicy,
    ) -> Result<Self, GameError> {
        let mut board = Board::new(board_size)?;
        let mut boats = Vec::with_capacity(layout.len());
        for (id, &(size, slot)) in layout.iter().enumerate() {
            if size == 0 {
                return Err(GameError::InvalidBoatSize { id });
            }
            if !placement::fits(&board, size, slot) {
                // the far end is on the board only if every cell is
                let end = slot.orientation.step(slot.x, slot.y, size - 1);
                return Err(match end.and_then(|(x, y)| board.cell(x, y)) {
                    Some(_) => GameError::BoatOverlaps { id },
                    None => GameError::BoatOutOfBounds { id },
                });
            }
            let boat = Boat::new(id, size, slot.x, slot.y, slot.orientation);
            placement::occupy(&mut board, &boat);
            boats.push(boat);
        }
        Ok(Self::from_parts(board, boats, damage_policy))
    }

    fn from_parts(board: Board, boats: Vec<Boat>, damage_policy: DamagePolicy) -> Self {
        Self {
            state: RwLock::new(GameState {
                board,
                boats,
                received_hits: Vec::new(),
            }),
            damage_policy,
        }
    }

    // Every critical section leaves the state consistent, so a poisoned lock
    // still guards valid data.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, GameState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GameState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn damage_policy(&self) -> DamagePolicy {
        self.damage_policy
    }

    pub fn board_size(&self) -> usize {
        self.read().board.size()
    }

    /// Resolve an attack at (`x`, `y`).
    ///
    /// Out-of-bounds coordinates yield [`AttackResult::Invalid`] and change
    /// nothing. Every valid attack is appended to the history, repeats
    /// included.
    pub fn process_attack(&self, x: i64, y: i64) -> HitResponse {
        let mut state = self.write();
        let invalid = HitResponse {
            result: AttackResult::Invalid,
            x,
            y,
        };
        if !state.board.is_valid_position(x, y) {
            log::debug!("attack at ({}, {}) is out of bounds", x, y);
            return invalid;
        }
        let Some(cell) = state.board.cell_mut(x as usize, y as usize) else {
            return invalid;
        };

        let first_reveal = !cell.revealed;
        cell.revealed = true;
        let owner = cell.boat;
        let result = match owner {
            Some(_) => {
                cell.state = CellState::Hit;
                AttackResult::Hit
            }
            None => {
                cell.state = CellState::Miss;
                AttackResult::Miss
            }
        };

        if let Some(id) = owner {
            let counts = first_reveal || self.damage_policy == DamagePolicy::EveryAttack;
            if counts {
                if let Some(boat) = state.boats.iter_mut().find(|b| b.id() == id) {
                    boat.register_hit();
                    if boat.hit_count() == boat.size() {
                        log::info!("boat {} (size {}) sunk", id, boat.size());
                    }
                }
            }
        }

        state.received_hits.push(HitInfo { x, y, result });
        log::debug!("attack at ({}, {}): {}", x, y, result);
        HitResponse { result, x, y }
    }

    /// Number of boats whose damage is still below their size.
    pub fn remaining_boats(&self) -> usize {
        self.read().boats.iter().filter(|b| b.is_afloat()).count()
    }

    pub fn is_alive(&self) -> bool {
        self.remaining_boats() > 0
    }

    /// Board as attackers may see it. Unrevealed cells read 0 whether or not
    /// they hold a boat.
    pub fn board_view(&self) -> BoardResponse {
        let state = self.read();
        let cells = state
            .board
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match (cell.is_revealed(), cell.state()) {
                        (false, _) | (true, CellState::Empty) => CELL_UNREVEALED,
                        (true, CellState::Miss) => CELL_MISS,
                        (true, CellState::Hit) => CELL_HIT,
                    })
                    .collect()
            })
            .collect();
        BoardResponse {
            size: state.board.size(),
            cells,
        }
    }

    /// Copy of the attack history in arrival order.
    pub fn received_hits(&self) -> Vec<HitInfo> {
        self.read().received_hits.clone()
    }

    /// Copy of the placed boats in identifier order. Owner view only.
    pub fn boats(&self) -> Vec<Boat> {
        self.read().boats.clone()
    }
}
