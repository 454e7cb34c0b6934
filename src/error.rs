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

//! Domain errors.
//!
//! Application plumbing propagates with `anyhow`; these are the failures
//! callers may want to match on, recovered with `downcast_ref`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum PlayerError {
    #[error("the track catalog is empty")]
    EmptyCatalog,

    #[error("track index {index} is out of range for a catalog of {len} tracks")]
    TrackOutOfRange { index: usize, len: usize },

    #[error("failed to read catalog file {path}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("the playback engine is no longer running")]
    PrimitiveUnavailable,
}
