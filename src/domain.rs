//! Request and response shapes exchanged with peers as JSON.

use serde::{Deserialize, Serialize};

use crate::common::AttackResult;

/// Fog-of-war view of a board: 0 unrevealed, 1 miss, 2 hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardResponse {
    pub size: usize,
    pub cells: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoatsResponse {
    pub remaining_boats: usize,
}

/// Attack request. Missing coordinates read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitRequest {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitResponse {
    pub result: AttackResult,
    pub x: i64,
    pub y: i64,
}

/// One entry of the attack history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitInfo {
    pub x: i64,
    pub y: i64,
    pub result: AttackResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitsResponse {
    pub hits: Vec<HitInfo>,
}

/// Cell status codes used in [`BoardResponse::cells`].
pub const CELL_UNREVEALED: u8 = 0;
pub const CELL_MISS: u8 = 1;
pub const CELL_HIT: u8 = 2;
