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

//! The static track catalog.
//!
//! The catalog is read once at startup from a JSON document of the form
//! `{ "items": [ ... ] }` and never changes afterwards.

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;

use crate::{
    error::PlayerError,
    model::{CatalogKey, Track, TrackId},
};

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<Track>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Builds the catalog, giving every track the id of the first record
    /// that carries the same key.
    pub(crate) fn new(mut tracks: Vec<Track>) -> Self {
        let mut ids: HashMap<CatalogKey, TrackId> = HashMap::new();
        for (index, track) in tracks.iter_mut().enumerate() {
            let next = TrackId(u32::try_from(index).unwrap_or(u32::MAX));
            track.id = *ids.entry(track.key.clone()).or_insert(next);
        }
        Self { tracks }
    }

    /// Loads the catalog from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::CatalogRead`] if the file cannot be read, or
    /// [`PlayerError::CatalogParse`] if it is not a valid catalog document.
    pub(crate) fn load(path: &Path) -> Result<Self, PlayerError> {
        let contents = fs::read_to_string(path).map_err(|source| PlayerError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents).map_err(|source| PlayerError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::new(file.items))
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Catalog position of the track with the given id.
    pub(crate) fn position_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const CATALOG: &str = r#"{
        "items": [
            { "id": 1, "title": "Blue in Green", "singer": "Miles Davis", "genre": "Jazz",
              "imgUrl": "https://example.com/1.jpg", "songUrl": "https://example.com/1.mp3" },
            { "id": 2, "title": "Paranoid Android", "singer": "Radiohead", "genre": "Rock",
              "imgUrl": "https://example.com/2.jpg", "songUrl": "https://example.com/2.mp3" }
        ]
    }"#;

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().singer, "Radiohead");
        assert_eq!(catalog.position_of(TrackId(1)), Some(1));
        assert_eq!(catalog.position_of(TrackId(9)), None);
    }

    #[test]
    fn string_keys_load() {
        let catalog = Catalog::from_json(
            r#"{ "items": [ { "id": "a", "title": "A" }, { "id": "b", "title": "B" } ] }"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_ne!(catalog.tracks()[0].id, catalog.tracks()[1].id);
        assert_eq!(catalog.get(1).unwrap().key, CatalogKey::Text("b".to_string()));
    }

    #[test]
    fn records_without_a_key_still_load() {
        let catalog = Catalog::from_json(
            r#"{ "items": [ { "title": "A" }, { "id": 2, "title": "B" }, { "title": "C" } ] }"#,
        )
        .unwrap();

        let tracks = catalog.tracks();
        assert_eq!(catalog.len(), 3);
        assert_eq!(tracks[0].title, "A");
        assert_eq!(tracks[0].key, CatalogKey::Missing);
        assert_ne!(tracks[0].id, tracks[1].id);
        // Missing keys compare equal, so they share an identity
        assert_eq!(tracks[0].id, tracks[2].id);
    }

    #[test]
    fn equal_keys_share_an_identity() {
        let catalog = Catalog::from_json(
            r#"{ "items": [ { "id": 5, "title": "A" }, { "id": "5", "title": "B" }, { "id": 5, "title": "C" } ] }"#,
        )
        .unwrap();

        let tracks = catalog.tracks();
        assert_eq!(tracks[0].id, tracks[2].id);
        assert_ne!(tracks[0].id, tracks[1].id);
        assert_eq!(catalog.position_of(tracks[2].id), Some(0));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PlayerError::CatalogRead { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, PlayerError::CatalogParse { .. }));
    }

    #[test]
    fn document_without_items_is_empty() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }
}
