//! Terminal client for the Connect Four server.

#![warn(missing_docs)]

mod app;
mod client;
mod ui;

use anyhow::Result;
use app::{App, Screen};
use client::GameClient;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let server_url = std::env::var("CONNECT_FOUR_SERVER")
        .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    info!(%server_url, "Starting Connect Four TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(GameClient::new(server_url));
    let result = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (app.screen(), key.code) {
            (_, KeyCode::Char('q') | KeyCode::Esc) => return Ok(()),
            (Screen::Menu, KeyCode::Up | KeyCode::Down | KeyCode::Tab) => {
                app.toggle_menu_choice();
            }
            (Screen::Menu, KeyCode::Enter) => {
                if let Err(error) = app.start_game().await {
                    app.set_status(format!("Error: {error}"));
                }
            }
            (Screen::Playing, KeyCode::Left) => app.move_cursor_left(),
            (Screen::Playing, KeyCode::Right) => app.move_cursor_right(),
            (Screen::Playing, KeyCode::Enter | KeyCode::Char(' ')) => {
                if let Err(error) = app.drop_piece().await {
                    app.set_status(format!("Error: {error}"));
                }
            }
            (Screen::Playing, KeyCode::Char(digit @ '1'..='7')) => {
                app.set_cursor(digit as usize - '1' as usize);
                if let Err(error) = app.drop_piece().await {
                    app.set_status(format!("Error: {error}"));
                }
            }
            (Screen::Playing, KeyCode::Char('n')) => app.back_to_menu(),
            _ => {}
        }
    }
}
