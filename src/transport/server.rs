use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;

use crate::domain::{BoatsResponse, HitRequest, HitsResponse};
use crate::game::Game;

/// Routes for one game. Wrong methods get 405 from the method router.
pub fn router(game: Arc<Game>) -> Router {
    Router::new()
        .route("/board", get(handle_board))
        .route("/boats", get(handle_boats))
        .route("/hit", post(handle_hit))
        .route("/hits", get(handle_hits))
        .with_state(game)
}

/// Serve `game` on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, game: Arc<Game>) -> anyhow::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        log::info!("listening on http://{}", addr);
    }
    axum::serve(listener, router(game))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

async fn handle_board(State(game): State<Arc<Game>>) -> impl IntoResponse {
    Json(game.board_view())
}

async fn handle_boats(State(game): State<Arc<Game>>) -> impl IntoResponse {
    Json(BoatsResponse {
        remaining_boats: game.remaining_boats(),
    })
}

/// Decode the first JSON value of `body`. Anything after it is ignored.
fn decode_hit_request(body: &[u8]) -> Result<HitRequest, String> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<HitRequest>()
        .next()
    {
        Some(Ok(req)) => Ok(req),
        Some(Err(e)) => Err(e.to_string()),
        None => Err("empty body".to_string()),
    }
}

// Decoded by hand so that every malformed body is a 400, whatever the
// content type or the kind of decode failure.
async fn handle_hit(State(game): State<Arc<Game>>, body: Bytes) -> Response {
    let req = match decode_hit_request(&body) {
        Ok(req) => req,
        Err(e) => {
            log::warn!("rejecting /hit body: {}", e);
            return (StatusCode::BAD_REQUEST, "Invalid request body").into_response();
        }
    };
    Json(game.process_attack(req.x, req.y)).into_response()
}

async fn handle_hits(State(game): State<Arc<Game>>) -> impl IntoResponse {
    Json(HitsResponse {
        hits: game.received_hits(),
    })
}
