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

//! MPV-backed implementation of the playback primitive.
//!
//! This module provides [`MpvPlayer`], the [`PlaybackPrimitive`] used by the
//! application. It manages a background worker thread that interfaces with
//! the underlying audio library (MPV), ensuring that audio operations do not
//! block the main application thread.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{
    error::PlayerError,
    events::AppEvent,
    player::commands::AudioPlayerCommand,
    playback::primitive::{PlaybackPrimitive, Subscription, SubscriptionId},
};

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct MpvPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
    last_subscription: u64,
}

impl MpvPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send playback signals (and fatal errors)
    ///   back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self {
            command_tx,
            last_subscription: 0,
        })
    }

    fn send(&self, command: AudioPlayerCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| PlayerError::PrimitiveUnavailable)?;
        Ok(())
    }
}

impl PlaybackPrimitive for MpvPlayer {
    fn play(&mut self) -> Result<()> {
        self.send(AudioPlayerCommand::Play)
    }

    fn pause(&mut self) -> Result<()> {
        self.send(AudioPlayerCommand::Pause)
    }

    fn set_current_time(&mut self, seconds: f64) -> Result<()> {
        self.send(AudioPlayerCommand::SetCurrentTime(seconds))
    }

    fn set_volume(&mut self, volume: f64) -> Result<()> {
        self.send(AudioPlayerCommand::SetVolume(volume))
    }

    fn set_source(&mut self, url: &str) -> Result<()> {
        self.send(AudioPlayerCommand::SetSource(url.to_string()))
    }

    fn subscribe(&mut self) -> Result<Subscription> {
        self.last_subscription += 1;
        let id = SubscriptionId(self.last_subscription);
        self.send(AudioPlayerCommand::Subscribe(id))?;

        let command_tx = self.command_tx.clone();
        Ok(Subscription::new(id, move |id| {
            // The worker may already have gone away during shutdown
            let _ = command_tx.send(AudioPlayerCommand::Unsubscribe(id));
        }))
    }
}
