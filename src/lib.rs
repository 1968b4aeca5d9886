#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod action;
mod board;
mod bomb;
mod common;
mod config;
mod event;
mod game;
pub mod geometry;
mod history;
mod player;
pub mod prelude;
mod player_ai;
mod ship;
mod sim;
mod state;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
mod ui;

pub use action::*;
pub use board::*;
pub use bomb::*;
pub use common::*;
pub use config::*;
pub use event::*;
pub use game::*;
pub use geometry::BoundingBox;
pub use history::*;
pub use player::*;
pub use player_ai::*;
pub use ship::*;
pub use sim::*;
pub use state::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use ui::*;
