use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::engine::{GameOverReason, Snapshot};

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 90, 60);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("SNAKE").style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("[Enter]/[Space] Start"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        popup,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 80, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P]/[Space] Resume"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) {
    let popup = centered_popup(area, 90, 80);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(Style::default().fg(Color::Red)),
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(format!("Length: {}", snapshot.snake_cells.len())),
        Line::from(reason_text(snapshot.reason)),
        Line::from(""),
        Line::from("[R]/[Enter] Play again"),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn reason_text(reason: Option<GameOverReason>) -> &'static str {
    match reason {
        Some(GameOverReason::WallCollision) => "Cause: hit wall",
        Some(GameOverReason::SelfCollision) => "Cause: hit yourself",
        Some(GameOverReason::BoardFull) => "Board full!",
        None => "",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
