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

//! Session favourites.

use std::collections::HashSet;

use crate::model::TrackId;

/// The set of tracks the user has marked as a favourite. Lives only for the
/// session.
#[derive(Debug, Default)]
pub(crate) struct Favourites {
    ids: HashSet<TrackId>,
}

impl Favourites {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds the track if absent, removes it if present, and returns whether
    /// the track is now a favourite.
    pub(crate) fn toggle(&mut self, id: TrackId) -> bool {
        if !self.ids.insert(id) {
            self.ids.remove(&id);
            return false;
        }
        true
    }

    pub(crate) fn contains(&self, id: TrackId) -> bool {
        self.ids.contains(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }
}
