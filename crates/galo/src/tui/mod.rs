//! Terminal UI for galo.

mod app;
mod render;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use galo_scene::SceneConfig;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the player quits.
#[instrument(skip(config))]
pub fn run_tui(config: &SceneConfig) -> Result<()> {
    info!("Starting galo TUI");

    enable_raw_mode()?;
    let mut terminal = restore_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        restore_terminal,
    )?;

    let res = run_app(&mut terminal, App::new(config));

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("galo TUI stopped");
    res
}

/// Leaves raw mode and the alternate screen.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Runs `setup`; if it fails, runs `restore` before returning the error.
fn restore_on_error<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed, restoring");
        if let Err(restore_err) = restore() {
            error!(error = ?restore_err, "Failed to restore terminal");
        }
    })
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| render::draw(f, &mut app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => app.restart(),
                KeyCode::Char(c) => {
                    if let Some(number) = c.to_digit(10) {
                        app.select_numbered(number);
                    }
                }
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }
}
