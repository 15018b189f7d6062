//! JSON-over-HTTP plumbing: the server exposing a local [`Game`](crate::Game)
//! and the client used to reach an opponent's server.

pub mod client;
pub mod server;

pub use client::Client;
pub use server::{router, serve};
