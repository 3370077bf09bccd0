//! Board and status rendering.

use crate::app::{App, Screen};
use connect_four_server::{COLS, OpponentType};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Renders the whole UI.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(4),
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    match app.screen() {
        Screen::Menu => render_menu(f, chunks[1], app),
        Screen::Playing => render_board(f, chunks[1], app),
    }
    render_status(f, chunks[2], app);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("CONNECT FOUR")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

fn render_menu(f: &mut Frame, area: Rect, app: &App) {
    let entry = |label: &str, selected: bool| {
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(Span::styled(format!("{marker}{label}"), style))
    };

    let lines = vec![
        entry(
            "Play against the computer",
            app.menu_choice() == OpponentType::Computer,
        ),
        entry("Two players", app.menu_choice() == OpponentType::Human),
    ];

    let menu = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(menu, center_rect(area, 30, 2));
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let Some(snapshot) = app.snapshot() else {
        return;
    };

    let mut lines = Vec::with_capacity(snapshot.board.len() + 1);

    // Drop cursor above the grid.
    let mut cursor = vec![Span::raw(" ")];
    for col in 0..COLS {
        let marker = if col == app.cursor_col() && !snapshot.game_over {
            "▼"
        } else {
            " "
        };
        cursor.push(Span::styled(
            format!(" {marker} "),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(cursor));

    for row in &snapshot.board {
        let mut spans = vec![Span::raw("│")];
        for &cell in row {
            let (text, style) = match cell {
                1 => ("●", Style::default().fg(Color::Red)),
                2 => ("●", Style::default().fg(Color::Yellow)),
                _ => ("·", Style::default().fg(Color::DarkGray)),
            };
            spans.push(Span::styled(format!(" {text} "), style));
        }
        spans.push(Span::raw("│"));
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(board, center_rect(area, (COLS as u16) * 3 + 2, 7));
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(app.status().to_string()),
        Line::from(Span::styled(
            "←/→ or 1-7 select column · Enter drop · n new game · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}

/// Centers a fixed-size rectangle inside `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
