//! User interface rendering functions for the game screen.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    glitch::Glitch,
    grid::{Cell, COLS, ROWS},
    App,
};

/// RGB color of wall cells.
const WALL_COLOR: (u8, u8, u8) = (40, 40, 40);

/// RGB color of floor cells.
const FLOOR_COLOR: (u8, u8, u8) = (20, 20, 25);

/// RGB color of the player marker.
const PLAYER_COLOR: (u8, u8, u8) = (100, 200, 255);

/// RGB color of the exit tile.
const EXIT_COLOR: (u8, u8, u8) = (120, 255, 120);

/// Updates the application UI based on the persistent state.
///
/// This function renders the single game screen: the maze grid as a canvas in the center of the
/// frame and a HUD strip at the bottom. The active glitch drives presentation only, here: cell
/// colors invert under the invert-colors glitch and every drawn coordinate mirrors vertically
/// under the flip-world glitch.
///
/// # Errors
///
/// This function may return errors from layout lookups or coordinate conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let glitch = app.game.scheduler.active();
    let inverted = glitch == Some(Glitch::InvertColors);
    let flipped = glitch == Some(Glitch::FlipWorld);

    // Overall layout: grid area plus a HUD strip at the bottom.
    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let grid_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get grid content area from layout")?;
    let hud_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get HUD area from layout")?;

    let space = center_grid_area(grid_content_area)?;

    // Pre-compute screen coordinates per cell kind to handle errors before closures.
    let mut wall_coords = Vec::new();
    let mut floor_coords = Vec::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            if app.game.grid.cell(col, row) == Some(Cell::Wall) {
                wall_coords.push((col, row));
            } else {
                floor_coords.push((col, row));
            }
        }
    }
    let wall_screen_coords = grid_to_canvas(&wall_coords, flipped)?;
    let floor_screen_coords = grid_to_canvas(&floor_coords, flipped)?;
    let exit_screen_coords = grid_to_canvas(&[app.game.exit], flipped)?;
    let player_screen_coords = grid_to_canvas(&[app.game.player], flipped)?;

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &floor_screen_coords,
                color: cell_color(FLOOR_COLOR, inverted),
            });
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: cell_color(WALL_COLOR, inverted),
            });
            ctx.draw(&Points {
                coords: &exit_screen_coords,
                color: cell_color(EXIT_COLOR, false),
            });
            ctx.draw(&Points {
                coords: &player_screen_coords,
                color: cell_color(PLAYER_COLOR, false),
            });
        });

    frame.render_widget(maze, space);

    hud(app, frame, hud_full_area)?;

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Centers a [`COLS`] x [`ROWS`] region within the given area.
///
/// This function nests a vertical and a horizontal layout so the grid canvas always sits in the
/// middle of the available space, the same region the HUD below aligns to.
fn center_grid_area(area: Rect) -> Result<Rect> {
    let space = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(ROWS)?),
        Constraint::Min(1),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get grid space from vertical layout")?;

    Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(COLS)?),
        Constraint::Min(1),
    ])
    .split(space)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get grid space from horizontal layout")
}

/// Renders the HUD strip showing the glitch status or the win message.
///
/// This function draws a top-bordered block titled with the key bindings, and inside it a
/// centered status line naming the active glitch, or the escape message once the player has
/// won.
fn hud(app: &App, frame: &mut Frame, area: Rect) -> Result<()> {
    let hud_area = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(COLS.max(40))?),
        Constraint::Min(1),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered HUD area from horizontal layout")?;

    let hud_block = Block::bordered()
        .title("(arrows/wasd) move / (r) reset / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    let inner_area = hud_block.inner(hud_area);

    frame.render_widget(hud_block, hud_area);

    let status = if app.game.win {
        Line::raw("You escaped! Press (r) to restart").centered()
    } else {
        match app.game.scheduler.active() {
            Some(glitch) => Line::raw(format!("Glitch: {}", glitch.label())).centered(),
            None => Line::raw("Glitch: none").centered(),
        }
    };

    frame.render_widget(status, inner_area);

    Ok(())
}

/// Resolves an RGB triple to a terminal color, inverting each channel when requested.
///
/// This function implements the invert-colors glitch at the lowest level: while it is active
/// every grid cell color is replaced by its 255-complement.
const fn cell_color(rgb: (u8, u8, u8), inverted: bool) -> Color {
    if inverted {
        Color::Rgb(255 - rgb.0, 255 - rgb.1, 255 - rgb.2)
    } else {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Transforms grid coordinates to centered canvas coordinates.
///
/// This function converts grid coordinates (col, row) to screen coordinates (x, y) using the
/// transformation formulas coordinate[i] = (n - 1) / 2 - i for rows and coordinate[i] = i -
/// (n - 1) / 2 for columns. When `flipped` is set, rows mirror vertically before the transform,
/// which realizes the flip-world glitch for every drawn rectangle.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn grid_to_canvas(coords: &[(usize, usize)], flipped: bool) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(ROWS)?);
    let cols_n = f64::from(u16::try_from(COLS)?);

    coords
        .iter()
        .map(|&(col, row)| {
            let row = if flipped { ROWS - 1 - row } else { row };

            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);
            let screen_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
