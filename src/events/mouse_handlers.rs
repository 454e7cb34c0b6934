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

//! Mouse routing.
//!
//! Clicks are mapped onto whatever was drawn under the pointer in the last
//! frame.

use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::{
    App,
    events::{handlers::*, report},
    model::filter::filter_tracks,
    render::TransportControl,
};

pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) {
    if matches!(mouse.kind, MouseEventKind::Down(_)) {
        app.status = None;
    }

    let result = route_mouse_event(app, mouse);
    report(app, result);
}

fn route_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    let event = Event::Mouse(mouse);

    if let Some(tab) = app.sidebar.process_event(&event) {
        set_tab(app, tab);
        return Ok(());
    }

    if app.search.handle_event(&event) {
        return Ok(());
    }

    if mouse.kind == MouseEventKind::Down(MouseButton::Left) && click_transport(app, mouse.column, mouse.row)? {
        return Ok(());
    }

    let visible = filter_tracks(app.controller.catalog().tracks(), &app.favourites, &app.filter);
    let action = app.track_grid.process_event(&event, &visible);
    if let Some(action) = action {
        handle_grid_action(app, action)?;
    }

    Ok(())
}

/// Returns `true` if the click landed on part of the transport bar.
fn click_transport(app: &mut App, column: u16, row: u16) -> Result<bool> {
    if let Some(control) = app.transport.control_at(column, row) {
        match control {
            TransportControl::Favourite => toggle_current_favourite(app),
            TransportControl::Shuffle => app.controller.toggle_shuffle(),
            TransportControl::Previous => app.controller.previous()?,
            TransportControl::PlayPause => app.controller.toggle_play_pause()?,
            TransportControl::Next => app.controller.next()?,
            TransportControl::Repeat => app.controller.cycle_repeat_mode()?,
        }
        return Ok(true);
    }

    let position = Position::new(column, row);

    if app.transport.progress.contains(position) {
        let (x, width) = offset_in(app.transport.progress, column);
        app.controller.seek(x, width)?;
        return Ok(true);
    }

    if app.transport.volume.contains(position) {
        let (x, width) = offset_in(app.transport.volume, column);
        app.controller.set_volume(volume_at(x, width));
        return Ok(true);
    }

    Ok(false)
}

fn offset_in(area: Rect, column: u16) -> (f64, f64) {
    (f64::from(column.saturating_sub(area.x)), f64::from(area.width))
}

/// The leftmost cell mutes, the rightmost cell is full volume.
fn volume_at(x: f64, width: f64) -> f64 {
    if width <= 1.0 {
        return 1.0;
    }
    (x / (width - 1.0)).clamp(0.0, 1.0)
}
