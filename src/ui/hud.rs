use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::engine::Snapshot;

/// Rows reserved below the board for the status line and key hints.
pub const HUD_HEIGHT: u16 = 2;

/// Draws the score line and key hints into `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, value_color: Color) {
    let lines = vec![
        status_line(snapshot, value_color),
        Line::from("arrows/WASD move  [P]/[Space] pause  [R] restart  [Q] quit")
            .style(Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn status_line(snapshot: &Snapshot, value_color: Color) -> Line<'static> {
    let value = Style::default().fg(value_color).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::DarkGray);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(snapshot.score.to_string(), value),
        Span::styled("  Length ", label),
        Span::styled(snapshot.snake_cells.len().to_string(), value),
        Span::styled("  Speed ", label),
        Span::styled(format_speed(snapshot.speed_factor), value),
        Span::styled("  Grid ", label),
        Span::styled(
            format!("{0}x{0}", snapshot.grid_size),
            Style::default().fg(value_color),
        ),
    ])
}

fn format_speed(speed_factor: f64) -> String {
    format!("{speed_factor:.1}x")
}
