//! This crate contains the source code for the binary for the game Glitch Escape.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use glitch_escape::{App, Config};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();

    let mut terminal = ratatui::init();
    App::new(config).run(&mut terminal)?;
    ratatui::restore();

    Ok(())
}
