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

//! MPV-backed audio playback engine and event processing.
//!
//! This module provides the core audio playback logic, leveraging `libmpv` for
//! audio decoding and playback control. It manages a background worker thread
//! that bridges the gap between the command-based [`PlaybackPrimitive`]
//! interface and the low-level MPV property observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`AudioPlayerCommand`]s from the
//!    controller (load, play, pause, seek, and so on).
//! 2. **Event Channel**: Sends [`PlaybackSignal`]s back to the UI as
//!    [`AppEvent::Playback`], tagged with the live subscription. Nothing is
//!    sent while no subscription is live.
//!
//! A command that MPV rejects is reported as [`PlaybackSignal::Failed`]
//! rather than tearing the worker down.
//!
//! [`PlaybackPrimitive`]: crate::playback::primitive::PlaybackPrimitive

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread,
};
use tracing::{debug, info, warn};

use crate::{
    events::AppEvent,
    playback::primitive::{PlaybackSignal, SubscriptionId},
};

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    SetSource(String),
    Play,
    Pause,
    SetCurrentTime(f64),
    SetVolume(f64),
    Subscribe(SubscriptionId),
    Unsubscribe(SubscriptionId),
}

/// Worker-side view of the engine.
#[derive(Debug)]
struct EngineState {
    source: Option<String>,
    is_idle: bool,
    // Seek requested while nothing is loaded, applied on the next load
    pending_start: Option<f64>,
    subscription: Option<SubscriptionId>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            source: None,
            is_idle: true,
            pending_start: None,
            subscription: None,
        }
    }
}

/// Spawns the audio worker thread to process playback commands.
///
/// This function takes ownership of the command receiver and the event sender,
/// moving them into a dedicated background thread.
///
/// If the internal worker returns an error, it is caught here and broadcast as
/// a fatal application event.
pub(crate) fn spawn_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx) {
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the audio player backend.
///
/// Initializes a local `libmpv` context, then alternates between draining
/// commands and waiting briefly for MPV events. Returns once every command
/// sender has been dropped.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the event
/// channel to the application is closed.
fn audio_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<bool>("idle-active", 0)
        .context("Failed to observe idle-active")?;

    let mut state = EngineState::new();

    info!("Audio engine started");

    loop {
        if !process_commands(&mut handler, &mut state, &command_rx, &event_tx)? {
            info!("Audio engine stopped");
            return Ok(());
        }
        process_mpv_events(&mut handler, &mut state, &event_tx)?;
    }
}

/// Drains and executes all pending commands, returning `false` once the
/// command channel has closed.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    state: &mut EngineState,
    command_rx: &Receiver<AudioPlayerCommand>,
    event_tx: &Sender<AppEvent>,
) -> Result<bool> {
    loop {
        match command_rx.try_recv() {
            Ok(command) => {
                debug!(?command, "Audio command");
                if let Err(e) = apply_command(handler, state, command) {
                    warn!("Audio command failed: {:#}", e);
                    emit(state, event_tx, PlaybackSignal::Failed(format!("{:#}", e)))?;
                }
            }
            Err(TryRecvError::Empty) => return Ok(true),
            Err(TryRecvError::Disconnected) => return Ok(false),
        }
    }
}

fn apply_command(handler: &mut mpv::MpvHandler, state: &mut EngineState, command: AudioPlayerCommand) -> Result<()> {
    match command {
        AudioPlayerCommand::SetSource(url) => {
            state.source = Some(url);
            state.pending_start = None;
            load_source(handler, state, true)?;
        }
        AudioPlayerCommand::Play => {
            // After the end of a file MPV unloads it, so play means load again
            if state.is_idle && state.source.is_some() {
                load_source(handler, state, false)?;
            } else {
                handler.set_property("pause", false)?;
            }
        }
        AudioPlayerCommand::Pause => {
            if !state.is_idle {
                handler.set_property("pause", true)?;
            }
        }
        AudioPlayerCommand::SetCurrentTime(seconds) => {
            if state.is_idle {
                state.pending_start = Some(seconds);
            } else {
                handler
                    .command(&["seek", &seconds.to_string(), "absolute"])
                    .context(format!("Failed to seek to {}", seconds))?;
            }
        }
        AudioPlayerCommand::SetVolume(volume) => {
            handler.set_property("volume", (volume * 100.0).clamp(0.0, 100.0))?;
        }
        AudioPlayerCommand::Subscribe(id) => {
            state.subscription = Some(id);
        }
        AudioPlayerCommand::Unsubscribe(id) => {
            if state.subscription == Some(id) {
                state.subscription = None;
            }
        }
    }

    Ok(())
}

fn load_source(handler: &mut mpv::MpvHandler, state: &mut EngineState, paused: bool) -> Result<()> {
    let Some(url) = state.source.as_deref() else {
        return Ok(());
    };

    let start = state.pending_start.take().unwrap_or(0.0).to_string();
    handler.set_property("start", start.as_str())?;
    handler.set_property("pause", paused)?;
    handler
        .command(&["loadfile", url, "replace"])
        .context(format!("Failed to load: {}", url))?;

    state.is_idle = false;

    Ok(())
}

/// Polls for MPV events and translates them into playback signals.
///
/// This function waits for up to 50ms for an event from the MPV context.
fn process_mpv_events(handler: &mut mpv::MpvHandler, state: &mut EngineState, event_tx: &Sender<AppEvent>) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        let signal = match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("duration", Format::Double(duration)) => Some(PlaybackSignal::DurationKnown(duration)),
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                    Some(PlaybackSignal::TimeProgressed(seconds))
                }
                ("idle-active", Format::Flag(idle_active)) => {
                    state.is_idle = idle_active;
                    None
                }
                _ => None,
            },
            mpv::Event::EndFile(result) => match result {
                Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF) => {
                    state.is_idle = true;
                    Some(PlaybackSignal::Ended)
                }
                Ok(_) => None,
                Err(e) => {
                    state.is_idle = true;
                    let source = state.source.as_deref().unwrap_or_default();
                    Some(PlaybackSignal::Failed(format!("Failed to play {}: {:?}", source, e)))
                }
            },
            _ => None,
        };

        if let Some(signal) = signal {
            emit(state, event_tx, signal)?;
        }
    }

    Ok(())
}

fn emit(state: &EngineState, event_tx: &Sender<AppEvent>, signal: PlaybackSignal) -> Result<()> {
    if let Some(id) = state.subscription {
        event_tx
            .send(AppEvent::Playback(id, signal))
            .context("Failed to send playback signal")?;
    }
    Ok(())
}
