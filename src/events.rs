//! Event handling functions for user input and application state updates.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{game::Direction, App};

/// Discrete action a key press can trigger.
///
/// This enumeration is the result of resolving a raw key code against the game's bindings,
/// keeping the mapping itself a pure function that tests can exercise without a terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// Move the player one cell in the given direction.
    Move(Direction),
    /// Reinitialize the whole game state.
    Reset,
    /// Terminate the main loop.
    Quit,
}

/// Maps a key code to its bound action, if any.
///
/// This function implements the game's bindings: arrow keys and WASD move, `r` resets, and `q`
/// or escape quits. Unbound keys resolve to `None`.
pub(crate) const fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(Action::Move(Direction::LEFT)),
        KeyCode::Right | KeyCode::Char('d') => Some(Action::Move(Direction::RIGHT)),
        KeyCode::Up | KeyCode::Char('w') => Some(Action::Move(Direction::UP)),
        KeyCode::Down | KeyCode::Char('s') => Some(Action::Move(Direction::DOWN)),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Applies a resolved action to the application state.
///
/// This function performs the state change an action stands for. Movement is dropped while the
/// win flag is set; reset and quit are always honored.
pub(crate) fn apply_action(app: &mut App, action: Action, now: Instant) {
    match action {
        Action::Quit => app.exit = true,
        Action::Reset => app.game.reset(now),
        Action::Move(direction) => {
            if !app.game.win {
                app.game.move_player(direction);
            }
        }
    }
}

/// Polls for input events and updates the application state accordingly.
///
/// This function waits for at most the given timeout, which is what paces the main loop to its
/// tick rate, and dispatches a single key press if one arrived. Only press events are handled,
/// so held keys do not repeat beyond what the terminal delivers as discrete presses.
pub(crate) fn handle_events(app: &mut App, timeout: Duration) -> Result<()> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(action) = action_for_key(key.code) {
                    apply_action(app, action, Instant::now());
                }
            }
        }
    }

    Ok(())
}
