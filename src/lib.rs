mod board;
mod boat;
mod common;
mod config;
pub mod domain;
mod game;
mod logging;
pub mod placement;
mod ui;
#[cfg(feature = "net")]
pub mod console;
#[cfg(feature = "net")]
pub mod protocol;
#[cfg(feature = "net")]
pub mod transport;

pub use board::*;
pub use boat::*;
pub use common::*;
pub use config::*;
pub use domain::*;
pub use game::*;
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use placement::{PlacementStrategy, RandomPlacement, ScanPlacement, Slot};
pub use ui::*;
#[cfg(feature = "net")]
pub use console::{Command, Console, Target};
#[cfg(feature = "net")]
pub use protocol::GameApi;
#[cfg(feature = "net")]
pub use transport::Client;
