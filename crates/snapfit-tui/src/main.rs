//! SnapFit - fitness coach chat and workout tracker for the terminal

mod app;
mod handler;
mod tui;
mod ui;

use std::fs::{self, File};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use app::App;
use snapfit_core::Config;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use tui::{EventHandler, Tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Log to a file, stderr belongs to the terminal UI
    init_logging()?;

    let config = load_config();

    let (reply_tx, reply_rx) = mpsc::unbounded_channel();
    let mut app = App::new(&config, reply_tx);
    let mut events = EventHandler::new(reply_rx);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;

    let result = run(&mut terminal, &mut app, &mut events).await;

    tui::restore()?;
    result
}

async fn run(terminal: &mut Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event)?,
            None => break,
        }
    }

    tracing::info!("shutting down");
    Ok(())
}

/// Load the config, writing the defaults out on first run so there is a file
/// to edit
fn load_config() -> Config {
    let first_run = Config::get_config_path()
        .map(|path| !path.exists())
        .unwrap_or(false);

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::new()
    });

    if first_run {
        match config.save() {
            Ok(()) => tracing::info!("default config written"),
            Err(err) => tracing::warn!(error = %err, "could not write default config"),
        }
    }

    config
}

fn init_logging() -> Result<()> {
    let log_dir = dirs::cache_dir()
        .ok_or_else(|| anyhow!("Could not determine cache directory"))?
        .join("snapfit");
    fs::create_dir_all(&log_dir)?;
    let log_file = File::create(log_dir.join("snapfit.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SNAPFIT_LOG")
                .unwrap_or_else(|_| EnvFilter::new("snapfit=info,snapfit_core=info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
