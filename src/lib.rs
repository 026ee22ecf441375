//! This crate contains the game logic and terminal interface for Glitch Escape, a grid maze game
//! in which the player walks a randomly generated maze toward the exit tile while periodic
//! "reality glitches" temporarily rewrite the rules of movement or rendering.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod game;
mod glitch;
mod grid;
mod ui;

pub use app::App;
pub use config::Config;
