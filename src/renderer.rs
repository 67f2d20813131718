use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};

use crate::engine::{GameStatus, Snapshot};
use crate::grid::{Cell, Grid};
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Terminal columns used per board cell; two keeps cells roughly square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_WALL: &str = "▒▒";
pub const GLYPH_SNAKE: &str = "██";
pub const GLYPH_FOOD: &str = "◀▶";

/// Colors for board entities.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub wall: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub hud: Color,
}

pub const PALETTE: Palette = Palette {
    wall: Color::DarkGray,
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    hud: Color::White,
};

/// Presentation-only state owned by the runner, not the engine.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ViewState {
    pub started: bool,
    pub paused: bool,
}

/// Renders the full game frame from an engine snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, view: ViewState) {
    let area = frame.area();
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HUD_HEIGHT)]).areas(area);

    let board = board_rect(play_area, snapshot.grid_size);
    render_walls(frame, board, Grid::new(snapshot.grid_size));
    render_food(frame, board, snapshot);
    render_snake(frame, board, snapshot);
    render_hud(frame, hud_area, snapshot, PALETTE.hud);

    if !view.started {
        render_start_menu(frame, board);
        return;
    }

    match snapshot.status {
        GameStatus::Over => render_game_over_menu(frame, board, snapshot),
        GameStatus::Running if view.paused => render_pause_menu(frame, board),
        GameStatus::Running => {}
    }
}

/// Terminal rectangle the board occupies, centered in `area` and clipped
/// to it.
#[must_use]
pub fn board_rect(area: Rect, grid_size: u16) -> Rect {
    let width = grid_size.saturating_mul(CELL_WIDTH).min(area.width);
    let height = grid_size.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_walls(frame: &mut Frame<'_>, board: Rect, grid: Grid) {
    let style = Style::new().fg(PALETTE.wall);
    let last = i32::from(grid.size()) - 1;
    let buffer = frame.buffer_mut();

    for index in 0..=last {
        for cell in [
            Cell::new(0, index),
            Cell::new(last, index),
            Cell::new(index, 0),
            Cell::new(index, last),
        ] {
            if let Some((x, y)) = cell_to_terminal(board, cell) {
                buffer.set_string(x, y, GLYPH_WALL, style);
            }
        }
    }
}

fn render_food(frame: &mut Frame<'_>, board: Rect, snapshot: &Snapshot) {
    let Some((x, y)) = cell_to_terminal(board, snapshot.food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(PALETTE.food));
}

fn render_snake(frame: &mut Frame<'_>, board: Rect, snapshot: &Snapshot) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins if cells ever coincide on screen.
    for (index, cell) in snapshot.snake_cells.iter().enumerate().rev() {
        let Some((x, y)) = cell_to_terminal(board, *cell) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(PALETTE.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(PALETTE.snake_body)
        };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Maps a board cell to the terminal position of its left column.
#[must_use]
pub fn cell_to_terminal(board: Rect, cell: Cell) -> Option<(u16, u16)> {
    let col = u16::try_from(cell.col).ok()?;
    let row = u16::try_from(cell.row).ok()?;

    let x = board.x.checked_add(col.checked_mul(CELL_WIDTH)?)?;
    let y = board.y.checked_add(row)?;
    if x.saturating_add(CELL_WIDTH) > board.right() || y >= board.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{PALETTE, ViewState, board_rect, cell_to_terminal, render};
    use crate::config::EngineConfig;
    use crate::direction::Direction;
    use crate::engine::Engine;
    use crate::grid::Cell;
    use crate::snake::Snake;

    #[test]
    fn board_is_centered_in_play_area() {
        let board = board_rect(Rect::new(0, 0, 40, 20), 10);

        assert_eq!(board, Rect::new(10, 5, 20, 10));
    }

    #[test]
    fn cells_outside_board_are_not_drawn() {
        let board = Rect::new(10, 5, 20, 10);

        assert_eq!(cell_to_terminal(board, Cell::new(0, 0)), Some((10, 5)));
        assert_eq!(cell_to_terminal(board, Cell::new(9, 9)), Some((28, 14)));
        assert_eq!(cell_to_terminal(board, Cell::new(10, 0)), None);
        assert_eq!(cell_to_terminal(board, Cell::new(-1, 0)), None);
    }

    #[test]
    fn frame_shows_walls_snake_and_food() {
        let mut engine =
            Engine::with_seed(EngineConfig::with_grid_size(10), 3).expect("valid config");
        engine
            .set_layout(
                Snake::spawn(Cell::new(5, 5), Direction::Right, 3),
                Direction::Right,
                Cell::new(2, 7),
            )
            .expect("valid layout");
        let snapshot = engine.snapshot();

        let mut terminal = Terminal::new(TestBackend::new(40, 16)).expect("test terminal");
        terminal
            .draw(|frame| {
                render(
                    frame,
                    &snapshot,
                    ViewState {
                        started: true,
                        paused: false,
                    },
                )
            })
            .expect("draw succeeds");

        let board = board_rect(Rect::new(0, 0, 40, 14), 10);
        let buffer = terminal.backend().buffer();

        let (wall_x, wall_y) = cell_to_terminal(board, Cell::new(0, 0)).expect("on board");
        assert_eq!(buffer[(wall_x, wall_y)].symbol(), "▒");
        assert_eq!(buffer[(wall_x, wall_y)].fg, PALETTE.wall);

        let (head_x, head_y) = cell_to_terminal(board, Cell::new(5, 5)).expect("on board");
        assert_eq!(buffer[(head_x, head_y)].symbol(), "█");
        assert_eq!(buffer[(head_x, head_y)].fg, PALETTE.snake_head);

        let (body_x, body_y) = cell_to_terminal(board, Cell::new(5, 4)).expect("on board");
        assert_eq!(buffer[(body_x, body_y)].fg, PALETTE.snake_body);

        let (food_x, food_y) = cell_to_terminal(board, Cell::new(2, 7)).expect("on board");
        assert_eq!(buffer[(food_x, food_y)].symbol(), "◀");
        assert_eq!(buffer[(food_x, food_y)].fg, PALETTE.food);
    }
}
