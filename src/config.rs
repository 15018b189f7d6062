use core::time::Duration;

use crate::game::DamagePolicy;

pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BOATS: [usize; 5] = [5, 4, 3, 3, 2];

/// Random placement attempts per boat before falling back to a full scan.
pub const PLACEMENT_ATTEMPTS: usize = 1000;

/// Per-request timeout for calls against an opponent.
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Parameters a [`Game`](crate::Game) is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub boat_sizes: Vec<usize>,
    pub damage_policy: DamagePolicy,
}

impl GameConfig {
    pub fn new(board_size: usize, boat_sizes: Vec<usize>) -> Self {
        Self {
            board_size,
            boat_sizes,
            damage_policy: DamagePolicy::default(),
        }
    }

    pub fn with_damage_policy(mut self, damage_policy: DamagePolicy) -> Self {
        self.damage_policy = damage_policy;
        self
    }

    /// Total number of cells the configured boats occupy.
    pub fn total_boat_cells(&self) -> usize {
        self.boat_sizes.iter().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_BOATS.to_vec())
    }
}
