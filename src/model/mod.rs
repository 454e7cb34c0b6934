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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the tracks
//! of the catalog, together with the derived state built on top of them: the
//! favourites set and the filtered view of the catalog.

pub(crate) mod catalog;
pub(crate) mod favourites;
pub(crate) mod filter;

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Shown in place of artwork that is missing from the catalog record.
pub(crate) const PLACEHOLDER_ARTWORK: &str =
    "https://via.placeholder.com/56x56/1e40af/60a5fa?text=%E2%99%AA";

/// Stable identity of a track, all lookups key on this rather than on the
/// position of the track in the catalog.
///
/// Assigned by the catalog, tracks whose records carry equal keys share an
/// id.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) struct TrackId(pub(crate) u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `id` of a catalog record as written in the file.
///
/// Keys only ever need to compare equal, so any JSON value is accepted. A
/// record without one gets [`CatalogKey::Missing`], which equals every other
/// missing key.
#[derive(Debug, Default, Clone, Hash, Eq, PartialEq)]
pub(crate) enum CatalogKey {
    #[default]
    Missing,
    Number(String),
    Text(String),
    Other(String),
}

impl<'de> Deserialize<'de> for CatalogKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => CatalogKey::Missing,
            Value::String(s) => CatalogKey::Text(s),
            Value::Number(n) => CatalogKey::Number(n.to_string()),
            other => CatalogKey::Other(other.to_string()),
        })
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKey::Missing => write!(f, "(none)"),
            CatalogKey::Number(key) | CatalogKey::Text(key) | CatalogKey::Other(key) => write!(f, "{}", key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Track {
    #[serde(skip)]
    pub(crate) id: TrackId,
    #[serde(rename = "id", default)]
    pub(crate) key: CatalogKey,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) singer: String,
    #[serde(default)]
    pub(crate) genre: String,
    #[serde(default)]
    pub(crate) img_url: String,
    #[serde(default)]
    pub(crate) song_url: String,
}

impl Track {
    /// The artwork location for this track, falling back to the placeholder
    /// when the record carries none.
    pub(crate) fn artwork(&self) -> &str {
        if self.img_url.trim().is_empty() {
            PLACEHOLDER_ARTWORK
        } else {
            &self.img_url
        }
    }
}

#[cfg(test)]
pub(crate) fn track(id: u32, title: &str, singer: &str, genre: &str) -> Track {
    Track {
        id: TrackId(id),
        key: CatalogKey::Number(id.to_string()),
        title: title.to_string(),
        singer: singer.to_string(),
        genre: genre.to_string(),
        img_url: String::new(),
        song_url: format!("https://example.com/{id}.mp3"),
    }
}
