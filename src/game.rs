//! Core game state and movement resolution module.
//!
//! This module contains the `Game` structure owning the grid, player, exit, win flag and glitch
//! scheduler, together with the movement resolver that applies glitch rules to every requested
//! step.

use std::time::Instant;

use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    glitch::{Glitch, GlitchScheduler},
    grid::{Grid, COLS, ROWS},
};

/// Column and row of the player's starting cell.
pub(crate) const START: (usize, usize) = (1, 1);

/// Column and row of the exit cell, one cell in from the far corner.
pub(crate) const EXIT: (usize, usize) = (COLS - 2, ROWS - 2);

/// Cardinal movement step of one cell.
///
/// This structure represents a movement request as a signed column and row delta. Only the four
/// unit steps exposed as constants are ever constructed by input handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Direction {
    /// Signed column delta.
    pub(crate) dcol: isize,
    /// Signed row delta.
    pub(crate) drow: isize,
}

impl Direction {
    /// One cell to the left.
    pub(crate) const LEFT: Self = Self { dcol: -1, drow: 0 };
    /// One cell to the right.
    pub(crate) const RIGHT: Self = Self { dcol: 1, drow: 0 };
    /// One cell up.
    pub(crate) const UP: Self = Self { dcol: 0, drow: -1 };
    /// One cell down.
    pub(crate) const DOWN: Self = Self { dcol: 0, drow: 1 };

    /// Returns the negated direction, applied while controls are reversed.
    pub(crate) const fn reversed(self) -> Self {
        Self {
            dcol: -self.dcol,
            drow: -self.drow,
        }
    }
}

/// Mutable state of a single run of the game.
///
/// This structure owns everything the loop reads and writes: the generated grid, the player and
/// exit positions, the win flag and the glitch scheduler, plus the random source feeding both
/// grid generation and glitch selection. All of it is reinitialized wholesale on reset.
pub(crate) struct Game {
    /// Random source for grid generation and glitch selection.
    ///
    /// This field is owned by the game so that a seeded run stays reproducible across resets:
    /// each reset continues drawing from the same deterministic stream.
    pub(crate) rng: StdRng,
    /// Current maze grid.
    pub(crate) grid: Grid,
    /// Player position as `(col, row)`.
    ///
    /// This field always satisfies `col < COLS` and `row < ROWS`; the movement resolver rejects
    /// any step that would leave the grid.
    pub(crate) player: (usize, usize),
    /// Exit position as `(col, row)`, read-only after reset.
    pub(crate) exit: (usize, usize),
    /// Whether the player has reached the exit.
    ///
    /// This field becomes `true` exactly when an accepted move lands the player on the exit
    /// cell; once set, movement input is ignored until the game is reset.
    pub(crate) win: bool,
    /// Glitch state machine advanced once per loop tick.
    pub(crate) scheduler: GlitchScheduler,
}

impl Game {
    /// Creates a game from an optional seed, anchored at the given instant.
    ///
    /// This function seeds the random source from the given value, or from entropy when absent,
    /// and generates the first grid from it.
    pub(crate) fn new(seed: Option<u64>, now: Instant) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = Grid::generate(&mut rng);

        Self {
            rng,
            grid,
            player: START,
            exit: EXIT,
            win: false,
            scheduler: GlitchScheduler::new(now),
        }
    }

    /// Reinitializes every piece of run state for a fresh attempt.
    ///
    /// This function regenerates the grid from the owned random stream and puts the player,
    /// exit, win flag and scheduler back to their starting values.
    pub(crate) fn reset(&mut self, now: Instant) {
        self.grid = Grid::generate(&mut self.rng);
        self.player = START;
        self.exit = EXIT;
        self.win = false;
        self.scheduler = GlitchScheduler::new(now);
    }

    /// Advances the glitch timers against the supplied instant.
    pub(crate) fn tick(&mut self, now: Instant) {
        self.scheduler.update(now, &mut self.rng);
    }

    /// Resolves a movement request, silently ignoring illegal ones.
    ///
    /// This function negates the direction while reverse-controls is active, rejects steps that
    /// would leave the grid, and rejects steps into walls unless no-walls is active. An accepted
    /// step moves the player and raises the win flag when the player lands on the exit. The
    /// fast-player and slow-player glitches do not alter movement.
    pub(crate) fn move_player(&mut self, direction: Direction) {
        let direction = if self.scheduler.active() == Some(Glitch::ReverseControls) {
            direction.reversed()
        } else {
            direction
        };

        let Some(col) = self.player.0.checked_add_signed(direction.dcol) else {
            return;
        };
        let Some(row) = self.player.1.checked_add_signed(direction.drow) else {
            return;
        };
        if col >= COLS || row >= ROWS {
            return;
        }

        if self.scheduler.active() == Some(Glitch::NoWalls) || self.grid.is_floor(col, row) {
            self.player = (col, row);

            if self.player == self.exit {
                self.win = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::grid::Cell;

    use super::*;

    /// Creates a seeded game with a fully open interior for movement tests.
    fn open_game() -> Game {
        let mut game = Game::new(Some(0), Instant::now());
        game.grid = Grid::open();
        game
    }

    /// Forces the given glitch to be active on the game's scheduler.
    fn force_glitch(game: &mut Game, glitch: Glitch) {
        game.scheduler = GlitchScheduler::Active {
            glitch,
            since: Instant::now(),
        };
    }

    #[test]
    fn test_new_game_starts_at_fixed_cells() {
        let game = Game::new(Some(3), Instant::now());

        assert_eq!(game.player, (1, 1));
        assert_eq!(game.exit, (COLS - 2, ROWS - 2));
        assert!(!game.win);
        assert_eq!(game.scheduler.active(), None);
    }

    #[test]
    fn test_move_into_floor_is_accepted() {
        let mut game = open_game();

        game.move_player(Direction::RIGHT);

        assert_eq!(game.player, (2, 1));
    }

    #[test]
    fn test_move_into_wall_is_rejected() {
        let mut game = open_game();
        game.grid.set(2, 1, Cell::Wall);

        game.move_player(Direction::RIGHT);

        assert_eq!(game.player, (1, 1), "wall must block the step");
    }

    #[test]
    fn test_move_out_of_bounds_is_rejected_even_without_walls() {
        let mut game = open_game();
        force_glitch(&mut game, Glitch::NoWalls);
        game.player = (0, 1);

        game.move_player(Direction::LEFT);

        assert_eq!(game.player, (0, 1), "grid bounds always apply");
    }

    #[test]
    fn test_no_walls_glitch_passes_through_walls() {
        let mut game = open_game();
        game.grid.set(2, 1, Cell::Wall);
        force_glitch(&mut game, Glitch::NoWalls);

        game.move_player(Direction::RIGHT);

        assert_eq!(game.player, (2, 1), "no-walls must ignore the wall");
    }

    #[test]
    fn test_reverse_controls_negates_direction() {
        let mut game = open_game();
        game.player = (2, 2);
        force_glitch(&mut game, Glitch::ReverseControls);

        game.move_player(Direction::RIGHT);

        assert_eq!(game.player, (1, 2), "right must become left");
    }

    #[test]
    fn test_speed_glitches_do_not_alter_movement() {
        for glitch in [Glitch::FastPlayer, Glitch::SlowPlayer] {
            let mut game = open_game();
            force_glitch(&mut game, glitch);

            game.move_player(Direction::DOWN);

            assert_eq!(game.player, (1, 2), "{} must move one cell", glitch.label());
        }
    }

    #[test]
    fn test_walking_to_the_exit_wins() {
        let mut game = open_game();

        for _ in 0..15 {
            game.move_player(Direction::RIGHT);
        }
        for _ in 0..11 {
            game.move_player(Direction::DOWN);
        }

        assert_eq!(game.player, (16, 12));
        assert!(game.win, "landing on the exit must raise the win flag");
    }

    #[test]
    fn test_win_flag_only_set_on_exit_cell() {
        let mut game = open_game();

        game.move_player(Direction::RIGHT);
        game.move_player(Direction::DOWN);

        assert!(!game.win, "win flag must stay clear away from the exit");
    }

    #[test]
    fn test_reset_restores_start_state() {
        let mut game = open_game();
        game.player = (5, 5);
        game.win = true;
        force_glitch(&mut game, Glitch::FlipWorld);

        game.reset(Instant::now());

        assert_eq!(game.player, START);
        assert!(!game.win);
        assert_eq!(game.scheduler.active(), None);
    }

    #[test]
    fn test_seeded_games_are_reproducible_across_resets() {
        let now = Instant::now();
        let mut first = Game::new(Some(11), now);
        let mut second = Game::new(Some(11), now);

        assert_eq!(first.grid, second.grid);

        first.reset(now);
        second.reset(now);

        assert_eq!(first.grid, second.grid, "resets draw from the same stream");
    }

    #[test]
    fn test_tick_drives_the_scheduler() {
        let now = Instant::now();
        let mut game = Game::new(Some(5), now);

        game.tick(now + Duration::from_secs(5));

        assert!(game.scheduler.active().is_some());
    }
}
