//! Core application state and logic for the glitch maze game.

use std::time::Instant;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{config::Config, events, game::Game, ui};

/// Application state container for the glitch maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the
    /// user wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// State of the current game run.
    ///
    /// This field holds everything a single run owns: the generated grid, the player and exit
    /// positions, the win flag and the glitch scheduler.
    pub(crate) game: Game,
    /// Parsed command line configuration.
    ///
    /// This field holds the seed and tick-rate options the binary was started with; the tick
    /// rate paces the loop and the seed was consumed when the game was created.
    pub(crate) config: Config,
}

impl App {
    /// Creates a new instance of the App structure from the parsed configuration.
    pub fn new(config: Config) -> Self {
        Self {
            exit: false,
            game: Game::new(config.seed, Instant::now()),
            config,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function repeatedly draws a frame, drains at most one input event with a timeout
    /// derived from the tick rate, and advances the glitch timers. The loop continues until the
    /// exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;

            let timeout = self.config.tick_interval();
            events::handle_events(self, timeout)?;

            self.game.tick(Instant::now());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_starts_unexited() {
        let app = App::new(Config {
            seed: Some(1),
            tick_rate: 30,
        });

        assert!(!app.exit);
        assert!(!app.game.win);
    }

    #[test]
    fn test_new_app_honors_the_seed() {
        let first = App::new(Config {
            seed: Some(8),
            tick_rate: 30,
        });
        let second = App::new(Config {
            seed: Some(8),
            tick_rate: 30,
        });

        assert_eq!(first.game.grid, second.game.grid);
    }
}
