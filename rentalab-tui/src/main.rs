//! Rentalab — simulador de rentabilidad de escandallos, in the terminal.
//!
//! Startup fetches the published sheet synchronously; a failed fetch halts
//! the session before any rendering. Every interaction afterwards (filter
//! change, price edit, reset) is one full in-memory recompute — there is no
//! background work and no worker thread.

mod app;
mod input;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use rentalab_core::data::FeedClient;
use rentalab_core::{AppConfig, SessionStore};

use crate::app::AppState;

fn main() -> Result<()> {
    let config = AppConfig::load_or_default(Path::new("rentalab.toml"))?;
    let client = FeedClient::new(config.feed.timeout_secs);

    // The one blocking external call of the session. On failure there is no
    // dashboard to draw: report and stop.
    let store = match SessionStore::load(&client, &config.feed.url) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error crítico de conexión: {e}");
            std::process::exit(1);
        }
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new(store, config, client);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
