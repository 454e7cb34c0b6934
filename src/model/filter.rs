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

//! The filtered view of the catalog.
//!
//! The visible track list is a pure function of the catalog, the favourites
//! and the [`ViewFilter`], recomputed whenever any of them change.

use crate::model::{Track, favourites::Favourites};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Tab {
    #[default]
    Home,
    Library,
    Favourites,
}

impl Tab {
    pub(crate) const ALL: [Tab; 3] = [Tab::Home, Tab::Library, Tab::Favourites];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Library => "Library",
            Tab::Favourites => "Favorites",
        }
    }

    pub(crate) fn heading(self) -> &'static str {
        match self {
            Tab::Home => "Discover Music",
            Tab::Library => "Your Library",
            Tab::Favourites => "Your Favorites",
        }
    }
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub(crate) struct ViewFilter {
    pub(crate) active_tab: Tab,
    pub(crate) search_term: String,
}

impl ViewFilter {
    fn admits_tab(&self, track: &Track, favourites: &Favourites) -> bool {
        match self.active_tab {
            Tab::Favourites => favourites.contains(track.id),
            // Home and Library both show the whole catalog
            Tab::Home | Tab::Library => true,
        }
    }
}

/// Case-insensitive substring match of the term against title, singer or
/// genre. An empty term matches every track.
pub(crate) fn matches_search(track: &Track, term: &str) -> bool {
    let term = term.to_lowercase();
    [&track.title, &track.singer, &track.genre]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Returns the tracks visible under the filter, in catalog order.
pub(crate) fn filter_tracks<'a>(
    tracks: &'a [Track],
    favourites: &Favourites,
    filter: &ViewFilter,
) -> Vec<&'a Track> {
    tracks
        .iter()
        .filter(|track| filter.admits_tab(track, favourites))
        .filter(|track| matches_search(track, &filter.search_term))
        .collect()
}
