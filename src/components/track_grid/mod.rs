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

//! Interactive grid of track cards.
//!
//! The grid does not own any tracks. It is handed the filtered view on every
//! event and every frame, keeps only the cursor and its last drawn area, and
//! reports what the user asked for as a [`TrackGridAction`] for the event
//! loop to carry out.

mod event;
mod render;

use ratatui::{
    layout::{Position, Rect},
    widgets::TableState,
};

use crate::model::{Track, TrackId, favourites::Favourites};

// Header row plus its bottom margin.
const HEADER_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum TrackGridAction {
    /// Play the card, or toggle play/pause if it is already current.
    Activate(TrackId),
    ToggleFavourite(TrackId),
}

/// What a card needs to know about the rest of the application to draw
/// itself.
pub(crate) struct GridContext<'a> {
    pub(crate) favourites: &'a Favourites,
    pub(crate) current: Option<TrackId>,
    pub(crate) is_playing: bool,
}

pub(crate) struct TrackGrid {
    table_state: TableState,
    body_area: Rect,
}

impl TrackGrid {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new().with_selected(Some(0)),
            body_area: Rect::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Keeps the cursor on a card after the visible list changed length.
    pub(crate) fn clamp_selection(&mut self, len: usize) {
        let selected = match (len, self.table_state.selected()) {
            (0, _) => None,
            (_, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.table_state.select(selected);
        if len == 0 {
            *self.table_state.offset_mut() = 0;
        }
    }

    pub(crate) fn selected_track<'a>(&self, tracks: &[&'a Track]) -> Option<&'a Track> {
        self.table_state
            .selected()
            .and_then(|i| tracks.get(i))
            .copied()
    }

    /// Index into the visible list of the card drawn at a screen position.
    pub(crate) fn card_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        if !self.body_area.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.table_state.offset() + usize::from(row - self.body_area.y);
        (index < len).then_some(index)
    }

    pub(crate) fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::track;

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut grid = TrackGrid::new();

        grid.goto_previous(3);
        assert_eq!(grid.selected(), Some(2));
        grid.goto_next(3);
        assert_eq!(grid.selected(), Some(0));
    }

    #[test]
    fn clamp_follows_the_visible_list() {
        let mut grid = TrackGrid::new();
        grid.goto_last(5);

        grid.clamp_selection(2);
        assert_eq!(grid.selected(), Some(1));

        grid.clamp_selection(0);
        assert_eq!(grid.selected(), None);

        grid.clamp_selection(4);
        assert_eq!(grid.selected(), Some(0));
    }

    #[test]
    fn selected_track_reads_the_visible_list() {
        let a = track(1, "a", "x", "y");
        let b = track(2, "b", "x", "y");
        let visible = vec![&a, &b];
        let mut grid = TrackGrid::new();

        grid.goto_next(visible.len());
        assert_eq!(grid.selected_track(&visible).map(|t| t.id), Some(TrackId(2)));
    }

    #[test]
    fn card_at_maps_rows_below_the_header() {
        let mut grid = TrackGrid::new();
        grid.body_area = Rect::new(10, 5 + HEADER_HEIGHT, 40, 10);

        assert_eq!(grid.card_at(12, 7, 3), Some(0));
        assert_eq!(grid.card_at(12, 9, 3), Some(2));
        assert_eq!(grid.card_at(12, 10, 3), None);
        assert_eq!(grid.card_at(2, 7, 3), None);
    }
}
