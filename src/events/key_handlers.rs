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

//! Keyboard routing.
//!
//! A key goes to the search box first while it has focus, then to the
//! sidebar, then to the track grid, and finally to the global bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App,
    events::{AppEvent, handlers::*, report},
    model::filter::filter_tracks,
};

const FINE_VOLUME_DELTA: f64 = 0.05;
const VOLUME_DELTA: f64 = 0.1;

const FINE_SEEK_DELTA: f64 = 5.0;
const SEEK_DELTA: f64 = 20.0;

pub(super) fn process_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    app.status = None;

    let result = route_key_event(app, key);
    report(app, result);
}

fn route_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.search.handle_event(&event) {
        sync_search_term(app);
        return Ok(());
    }

    if let Some(tab) = app.sidebar.process_event(&event) {
        set_tab(app, tab);
        return Ok(());
    }

    let visible = filter_tracks(app.controller.catalog().tracks(), &app.favourites, &app.filter);
    let action = app.track_grid.process_event(&event, &visible);
    if let Some(action) = action {
        return handle_grid_action(app, action);
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char(' ') => app.controller.toggle_play_pause()?,
        KeyCode::Char('n') => app.controller.next()?,
        KeyCode::Char('p') => app.controller.previous()?,
        KeyCode::Char('s') => app.controller.toggle_shuffle(),
        KeyCode::Char('r') => app.controller.cycle_repeat_mode()?,
        KeyCode::Char('F') => toggle_current_favourite(app),

        KeyCode::Char(',') => app.controller.seek_by(-FINE_SEEK_DELTA)?,
        KeyCode::Char('.') => app.controller.seek_by(FINE_SEEK_DELTA)?,
        KeyCode::Char('<') => app.controller.seek_by(-SEEK_DELTA)?,
        KeyCode::Char('>') => app.controller.seek_by(SEEK_DELTA)?,

        KeyCode::Char('-') => app.controller.adjust_volume(-FINE_VOLUME_DELTA),
        KeyCode::Char('=') => app.controller.adjust_volume(FINE_VOLUME_DELTA),
        KeyCode::Char('_') => app.controller.adjust_volume(-VOLUME_DELTA),
        KeyCode::Char('+') => app.controller.adjust_volume(VOLUME_DELTA),

        _ => {}
    }

    Ok(())
}
