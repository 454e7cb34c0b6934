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

//! Input handling for the track grid.
//!
//! This module maps raw terminal key and mouse events to cursor movement and
//! card actions.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};

use crate::{
    components::{TrackGrid, TrackGridAction},
    model::Track,
};

impl TrackGrid {
    /// Handles an event against the currently visible cards, returning the
    /// action the user asked for, if any.
    pub(crate) fn process_event(&mut self, event: &Event, tracks: &[&Track]) -> Option<TrackGridAction> {
        let len = tracks.len();

        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.goto_next(len),
                KeyCode::Char('k') | KeyCode::Up => self.goto_previous(len),
                KeyCode::Char('g') | KeyCode::Home => self.goto_first(len),
                KeyCode::Char('G') | KeyCode::End => self.goto_last(len),

                KeyCode::Enter => {
                    return self
                        .selected_track(tracks)
                        .map(|t| TrackGridAction::Activate(t.id));
                }
                KeyCode::Char('f') => {
                    return self
                        .selected_track(tracks)
                        .map(|t| TrackGridAction::ToggleFavourite(t.id));
                }

                _ => {}
            },

            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let index = self.card_at(mouse_event.column, mouse_event.row, len)?;
                    self.table_state.select(Some(index));
                    return tracks.get(index).map(|t| TrackGridAction::Activate(t.id));
                }
                MouseEventKind::Down(MouseButton::Right) => {
                    let index = self.card_at(mouse_event.column, mouse_event.row, len)?;
                    self.table_state.select(Some(index));
                    return tracks.get(index).map(|t| TrackGridAction::ToggleFavourite(t.id));
                }
                MouseEventKind::ScrollDown => self.goto_next(len),
                MouseEventKind::ScrollUp => self.goto_previous(len),
                _ => {}
            },

            _ => {}
        }

        None
    }
}
