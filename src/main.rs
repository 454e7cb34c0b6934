// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Song grid.
//!
//! A terminal music player built around a searchable grid of track cards.
//!
//! This application coordinates a TUI frontend built with `ratatui` and an
//! MPV audio engine running on a background thread.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * The **Audio Worker** drives MPV and reports progress back as playback
//!   signals.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the audio worker is handled via `std::sync::mpsc`
//! channels.

mod components;
mod config;
mod error;
mod events;
mod model;
mod playback;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    fs::OpenOptions,
    io::{self},
    path::PathBuf,
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    components::{SearchBox, Sidebar, TrackGrid},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{Track, catalog::Catalog, favourites::Favourites, filter::ViewFilter, filter::filter_tracks},
    playback::PlaybackController,
    player::MpvPlayer,
    render::TransportAreas,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: PlaybackController<MpvPlayer>,

    pub favourites: Favourites,
    pub filter: ViewFilter,

    pub sidebar: Sidebar,
    pub search: SearchBox,
    pub track_grid: TrackGrid,
    pub transport: TransportAreas,

    /// Last failed action, shown on the status line until the next input.
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, catalog: Catalog) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let player = MpvPlayer::new(event_tx.clone())?;
        let controller = PlaybackController::new(catalog, player, config.initial_volume)
            .context("Failed to load the first track")?;

        Ok(Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller,
            favourites: Favourites::new(),
            filter: ViewFilter::default(),
            sidebar: Sidebar::new(),
            search: SearchBox::new(),
            track_grid: TrackGrid::new(),
            transport: TransportAreas::default(),
            status: None,
        })
    }

    /// The tracks the grid currently shows.
    pub fn visible_tracks(&self) -> Vec<&Track> {
        filter_tracks(self.controller.catalog().tracks(), &self.favourites, &self.filter)
    }
}

/// The entry point of the application.
///
/// Loads the configuration and the catalog, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
///
/// The catalog file may be given as the first argument, otherwise the one
/// named in the configuration is used.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config)?;

    let catalog_file = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.catalog_file.clone());

    let catalog = Catalog::load(&catalog_file).context("Failed to load catalog")?;
    info!(path = %catalog_file.display(), tracks = catalog.len(), "Catalog loaded");

    let mut app = App::new(config, catalog).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Sends log output to the configured log file, the terminal belongs to the
/// UI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer and enables mouse
///   capture.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// Cleanup is best-effort and does not return a result.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event::Event::Key(key)) => AppEvent::Key(key),
                Ok(event::Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(event::Event::Resize(..)) => AppEvent::Tick,
                Ok(_) => continue,
                Err(e) => AppEvent::FatalError(format!("Failed to read terminal input: {}", e)),
            };
            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    let tick = Duration::from_millis(app.config.tick_millis.max(1));
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
