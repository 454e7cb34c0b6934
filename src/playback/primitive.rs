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

//! The contract between the playback controller and the audio engine.
//!
//! The controller never decodes audio itself. It issues fire-and-forget
//! commands through [`PlaybackPrimitive`] and later observes the outcome as
//! [`PlaybackSignal`]s delivered on the application event channel. Each
//! signal is tagged with the [`SubscriptionId`] it was emitted under, so that
//! signals from a subscription that has since been released can be told
//! apart and discarded.

use std::fmt;

use anyhow::Result;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub(crate) struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle signals emitted by the audio engine.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlaybackSignal {
    /// Playback position moved, in seconds.
    TimeProgressed(f64),
    /// Total length of the loaded source became known, in seconds.
    DurationKnown(f64),
    /// The loaded source played through to its end.
    Ended,
    /// A command could not be carried out, e.g. the source failed to load.
    Failed(String),
}

/// Commands understood by an audio engine.
pub(crate) trait PlaybackPrimitive {
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self) -> Result<()>;

    fn set_current_time(&mut self, seconds: f64) -> Result<()>;

    /// Volume in the range `0.0..=1.0`.
    fn set_volume(&mut self, volume: f64) -> Result<()>;

    /// Replaces the loaded source without starting playback.
    fn set_source(&mut self, url: &str) -> Result<()>;

    /// Starts delivering signals under a fresh subscription. Signals stop
    /// when the returned guard is dropped.
    fn subscribe(&mut self) -> Result<Subscription>;
}

/// Guard for a live signal subscription, released on drop.
pub(crate) struct Subscription {
    id: SubscriptionId,
    release: Option<Box<dyn FnOnce(SubscriptionId)>>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, release: impl FnOnce(SubscriptionId) + 'static) -> Self {
        Self {
            id,
            release: Some(Box::new(release)),
        }
    }

    pub(crate) fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(self.id);
        }
    }
}
