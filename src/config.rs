//! Command line configuration for determinism and loop pacing.

use std::time::Duration;

use clap::Parser;

/// Command line options for the game.
///
/// This structure holds the few tunables the game exposes. Running the binary without any
/// arguments reproduces the stock game: a grid seeded from entropy and a loop paced at 30 ticks
/// per second.
#[derive(Debug, Parser)]
#[command(version, about = "A grid maze game where reality glitches rewrite the rules.")]
pub struct Config {
    /// Seed for the pseudo-random source.
    ///
    /// When given, grid generation and glitch selection become fully reproducible, including
    /// across in-game resets. When absent the source is seeded from entropy.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Target loop ticks per second.
    ///
    /// This value bounds how often the loop redraws and re-checks the glitch timers. It has no
    /// effect on game rules, only on responsiveness.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..=240))]
    pub tick_rate: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate: 30,
        }
    }
}

impl Config {
    /// Returns the duration of a single loop tick.
    ///
    /// This function converts the tick rate into the timeout the event poll waits for at the end
    /// of each loop iteration, which is what paces the loop.
    pub(crate) const fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.tick_rate)
    }
}
