#![cfg(feature = "net")]

use crate::domain::{BoardResponse, HitResponse, HitsResponse};
use crate::game::Game;

/// Operations a player's board answers, whether held locally or reached
/// over the network.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    async fn board(&self) -> anyhow::Result<BoardResponse>;
    async fn remaining_boats(&self) -> anyhow::Result<usize>;
    async fn hit(&self, x: i64, y: i64) -> anyhow::Result<HitResponse>;
    async fn hits(&self) -> anyhow::Result<HitsResponse>;

    /// A failed query counts as not alive.
    async fn is_alive(&self) -> bool {
        matches!(self.remaining_boats().await, Ok(n) if n > 0)
    }
}

#[async_trait::async_trait]
impl GameApi for Game {
    async fn board(&self) -> anyhow::Result<BoardResponse> {
        Ok(self.board_view())
    }

    async fn remaining_boats(&self) -> anyhow::Result<usize> {
        Ok(Game::remaining_boats(self))
    }

    async fn hit(&self, x: i64, y: i64) -> anyhow::Result<HitResponse> {
        Ok(self.process_attack(x, y))
    }

    async fn hits(&self) -> anyhow::Result<HitsResponse> {
        Ok(HitsResponse {
            hits: self.received_hits(),
        })
    }

    async fn is_alive(&self) -> bool {
        Game::is_alive(self)
    }
}
