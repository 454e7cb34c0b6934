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

//! Application events and the main event loop.
//!
//! Input threads, the tick thread and the audio worker all feed
//! [`AppEvent`]s into a single channel. The loop applies each event to the
//! [`App`], lets the playback controller push any deferred state to the
//! engine, then redraws.

mod handlers;
mod key_handlers;
mod mouse_handlers;

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{error, info, warn};

use crate::{
    App,
    playback::primitive::{PlaybackSignal, SubscriptionId},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    /// A signal from the audio engine, tagged with the subscription it was
    /// delivered under.
    Playback(SubscriptionId, PlaybackSignal),

    Tick,

    ExitApplication,

    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error on a fatal error from a worker, or if the terminal can
/// not be drawn.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::Key(key) => key_handlers::process_key_event(app, key),
            AppEvent::Mouse(mouse) => mouse_handlers::process_mouse_event(app, mouse),
            AppEvent::Playback(id, signal) => {
                let result = app.controller.handle_signal(id, signal);
                report(app, result);
            }
            AppEvent::Tick => {}
            AppEvent::ExitApplication => {
                info!("Exiting");
                break;
            }
            AppEvent::FatalError(message) => {
                error!(%message, "Fatal error");
                return Err(anyhow!(message));
            }
        }

        let result = app.controller.observe();
        report(app, result);

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Shows a failed action on the status line instead of ending the loop.
fn report(app: &mut App, result: Result<()>) {
    if let Err(e) = result {
        warn!("Action failed: {:#}", e);
        app.status = Some(format!("{:#}", e));
    }
}
