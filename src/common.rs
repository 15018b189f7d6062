//! Common types: game construction errors and attack results.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a single attack, as reported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackResult {
    /// The attacked cell holds part of a boat.
    Hit,
    /// The attacked cell is water.
    Miss,
    /// The coordinates are outside the board; nothing was recorded.
    Invalid,
}

impl AttackResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttackResult::Hit => "hit",
            AttackResult::Miss => "miss",
            AttackResult::Invalid => "invalid",
        }
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while building a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board side length must be at least 1.
    InvalidBoardSize,
    /// Boat sizes must be at least 1.
    InvalidBoatSize { id: usize },
    /// Neither random placement nor the full scan found room for the boat.
    UnableToPlaceBoat { id: usize, size: usize },
    /// An explicit layout put a boat partly off the board.
    BoatOutOfBounds { id: usize },
    /// An explicit layout put a boat on top of another one.
    BoatOverlaps { id: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidBoardSize => write!(f, "Board size must be greater than zero"),
            GameError::InvalidBoatSize { id } => {
                write!(f, "Boat {} has size zero", id)
            }
            GameError::UnableToPlaceBoat { id, size } => {
                write!(f, "Unable to place boat {} of size {}", id, size)
            }
            GameError::BoatOutOfBounds { id } => {
                write!(f, "Boat {} placement is out of bounds", id)
            }
            GameError::BoatOverlaps { id } => {
                write!(f, "Boat {} placement overlaps with another boat", id)
            }
        }
    }
}

impl std::error::Error for GameError {}
