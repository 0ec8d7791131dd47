// Entry point for the terminal storefront.
// Loads settings, starts file logging, and runs the event loop in the alternate screen.

mod app;
mod catalog;
mod config;
mod error;
mod state;
mod tasks;
mod ui;

use std::fs::{self, File, OpenOptions};
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::{Settings, paths};
use crate::error::{Result, ShopError};

/// Environment variable that overrides the configured log filter.
const LOG_ENV: &str = "AICE_SHOP_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("aice-shop: {}, using default settings", e);
            Settings::default()
        }
    };
    init_logging(&settings)?;
    tracing::info!(?settings, "settings loaded");

    let mut terminal = setup_terminal()?;
    let mut app = App::new(settings);
    let result = app.run(&mut terminal);
    restore_terminal(&mut terminal)?;

    result?;
    Ok(())
}

/// Send tracing output to the log file so the terminal stays clean.
/// Without a writable log file, logging is disabled.
fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = paths::log_path() else {
        return Ok(());
    };
    let file = match open_log(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "aice-shop: cannot open {}: {}, logging disabled",
                path.display(),
                e
            );
            return Ok(());
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| ShopError::Logging(e.to_string()))
}

fn open_log(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("aice-shop.log");
        assert!(open_log(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("logs");
        fs::write(&blocker, "").unwrap();
        assert!(open_log(&blocker.join("aice-shop.log")).is_err());
    }
}
