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

//! Playback control and state management.
//!
//! [`PlaybackController`] owns the [`PlaybackState`] and is the only thing
//! that mutates it. User actions arrive as method calls; the audio engine
//! reports back through [`PlaybackController::handle_signal`].
//!
//! # Subscriptions
//!
//! The controller holds exactly one signal subscription, keyed on the current
//! track and repeat mode. Whenever either changes, the old subscription is
//! dropped (which unsubscribes it) before a new one is taken out. Signals that
//! arrive tagged with any other subscription id are ignored.

pub(crate) mod primitive;
#[cfg(test)]
pub(crate) mod testing;

use anyhow::Result;
use rand::{RngExt, SeedableRng, rngs::SmallRng};
use tracing::{debug, info, trace, warn};

use crate::{
    error::PlayerError,
    model::{Track, TrackId, catalog::Catalog},
    playback::primitive::{PlaybackPrimitive, PlaybackSignal, Subscription, SubscriptionId},
};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub(crate) enum RepeatMode {
    #[default]
    Off,
    RepeatAll,
    RepeatOne,
}

impl RepeatMode {
    /// Off, then repeat all, then repeat one, then back to off.
    pub(crate) fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::RepeatAll,
            RepeatMode::RepeatAll => RepeatMode::RepeatOne,
            RepeatMode::RepeatOne => RepeatMode::Off,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlaybackState {
    pub(crate) current_index: usize,
    pub(crate) is_playing: bool,
    pub(crate) elapsed_seconds: f64,
    /// Zero until the engine reports the length of the loaded source.
    pub(crate) duration_seconds: f64,
    pub(crate) volume: f64,
    pub(crate) is_shuffled: bool,
    pub(crate) repeat_mode: RepeatMode,
}

impl PlaybackState {
    fn new(volume: f64) -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            elapsed_seconds: 0.0,
            duration_seconds: 0.0,
            volume: volume.clamp(0.0, 1.0),
            is_shuffled: false,
            repeat_mode: RepeatMode::Off,
        }
    }

    /// Fraction of the current track already played, in `0.0..=1.0`.
    pub(crate) fn progress(&self) -> f64 {
        if self.duration_seconds.is_finite() && self.duration_seconds > 0.0 {
            (self.elapsed_seconds / self.duration_seconds).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

pub(crate) struct PlaybackController<P: PlaybackPrimitive> {
    catalog: Catalog,
    primitive: P,
    state: PlaybackState,
    subscription: Option<Subscription>,
    subscribed_for: Option<(usize, RepeatMode)>,
    volume_pending: bool,
    last_failure: Option<String>,
    rng: SmallRng,
}

impl<P: PlaybackPrimitive> PlaybackController<P> {
    /// Creates a controller positioned on the first track of the catalog,
    /// paused, with that track's source already loaded.
    pub(crate) fn new(catalog: Catalog, primitive: P, volume: f64) -> Result<Self> {
        Self::with_rng(catalog, primitive, volume, SmallRng::from_rng(&mut rand::rng()))
    }

    pub(crate) fn with_rng(
        catalog: Catalog,
        primitive: P,
        volume: f64,
        rng: SmallRng,
    ) -> Result<Self> {
        let mut controller = Self {
            catalog,
            primitive,
            state: PlaybackState::new(volume),
            subscription: None,
            subscribed_for: None,
            volume_pending: true,
            last_failure: None,
            rng,
        };

        if !controller.catalog.is_empty() {
            controller.resubscribe_if_stale()?;
            controller.load_current()?;
        }

        Ok(controller)
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// `None` only when the catalog is empty.
    pub(crate) fn current_track(&self) -> Option<&Track> {
        self.catalog.get(self.state.current_index)
    }

    pub(crate) fn is_current(&self, id: TrackId) -> bool {
        self.current_track().is_some_and(|t| t.id == id)
    }

    pub(crate) fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub(crate) fn toggle_play_pause(&mut self) -> Result<()> {
        self.track_count()?;
        if self.state.is_playing {
            self.state.is_playing = false;
            self.primitive.pause()
        } else {
            self.state.is_playing = true;
            self.command_play()
        }
    }

    /// Advances to the next track, or to a random one when shuffled. A
    /// shuffle may land on the track that is already current.
    pub(crate) fn next(&mut self) -> Result<()> {
        let count = self.track_count()?;
        let index = if self.state.is_shuffled {
            self.rng.random_range(0..count)
        } else {
            (self.state.current_index + 1) % count
        };
        self.change_track(index)
    }

    pub(crate) fn previous(&mut self) -> Result<()> {
        let count = self.track_count()?;
        self.change_track((self.state.current_index + count - 1) % count)
    }

    /// Plays the track at the given catalog index.
    pub(crate) fn select_track(&mut self, index: usize) -> Result<()> {
        let count = self.track_count()?;
        if index >= count {
            return Err(PlayerError::TrackOutOfRange { index, len: count }.into());
        }
        self.change_track(index)
    }

    /// Seeks to the point of a click on a progress bar, `click_x` being the
    /// offset of the click from the left edge of a bar `bar_width` wide.
    ///
    /// Does nothing until the duration of the track is known.
    pub(crate) fn seek(&mut self, click_x: f64, bar_width: f64) -> Result<()> {
        self.track_count()?;
        let duration = self.state.duration_seconds;
        if bar_width <= 0.0 || !duration.is_finite() || duration <= 0.0 {
            return Ok(());
        }
        let fraction = (click_x / bar_width).clamp(0.0, 1.0);
        self.seek_to(fraction * duration)
    }

    /// Seeks relative to the current position.
    pub(crate) fn seek_by(&mut self, delta_seconds: f64) -> Result<()> {
        self.track_count()?;
        let duration = self.state.duration_seconds;
        if !duration.is_finite() || duration <= 0.0 {
            return Ok(());
        }
        let target = (self.state.elapsed_seconds + delta_seconds).clamp(0.0, duration);
        self.seek_to(target)
    }

    /// Stores the volume; the engine picks it up on the next call to
    /// [`observe`](Self::observe).
    pub(crate) fn set_volume(&mut self, volume: f64) {
        if volume.is_nan() {
            return;
        }
        self.state.volume = volume.clamp(0.0, 1.0);
        self.volume_pending = true;
    }

    pub(crate) fn adjust_volume(&mut self, delta: f64) {
        self.set_volume(self.state.volume + delta);
    }

    pub(crate) fn cycle_repeat_mode(&mut self) -> Result<()> {
        self.state.repeat_mode = self.state.repeat_mode.cycle();
        info!(repeat_mode = ?self.state.repeat_mode, "Repeat mode changed");
        self.resubscribe_if_stale()
    }

    pub(crate) fn toggle_shuffle(&mut self) {
        self.state.is_shuffled = !self.state.is_shuffled;
        info!(shuffled = self.state.is_shuffled, "Shuffle changed");
    }

    /// Pushes deferred state to the engine, called once per pass of the
    /// event loop.
    pub(crate) fn observe(&mut self) -> Result<()> {
        if self.volume_pending {
            self.volume_pending = false;
            self.primitive.set_volume(self.state.volume)?;
        }
        Ok(())
    }

    /// Applies a signal from the audio engine. Signals from any subscription
    /// other than the live one are dropped.
    pub(crate) fn handle_signal(&mut self, id: SubscriptionId, signal: PlaybackSignal) -> Result<()> {
        if self.subscription.as_ref().map(Subscription::id) != Some(id) {
            trace!(%id, ?signal, "Ignoring signal from released subscription");
            return Ok(());
        }

        match signal {
            PlaybackSignal::TimeProgressed(seconds) if seconds.is_finite() && seconds >= 0.0 => {
                self.state.elapsed_seconds = seconds;
            }
            PlaybackSignal::DurationKnown(seconds) if seconds.is_finite() && seconds >= 0.0 => {
                self.state.duration_seconds = seconds;
            }
            PlaybackSignal::TimeProgressed(_) | PlaybackSignal::DurationKnown(_) => {}
            PlaybackSignal::Ended => self.handle_ended()?,
            PlaybackSignal::Failed(reason) => {
                warn!(%reason, index = self.state.current_index, "Playback failed");
                self.state.is_playing = false;
                self.last_failure = Some(reason);
            }
        }

        Ok(())
    }

    fn handle_ended(&mut self) -> Result<()> {
        let count = self.track_count()?;
        match self.state.repeat_mode {
            RepeatMode::RepeatOne => {
                self.seek_to(0.0)?;
                self.command_play()
            }
            RepeatMode::RepeatAll => self.next(),
            RepeatMode::Off if self.state.current_index + 1 < count => self.next(),
            RepeatMode::Off => {
                debug!("Reached the end of the catalog");
                self.state.is_playing = false;
                Ok(())
            }
        }
    }

    fn track_count(&self) -> Result<usize> {
        match self.catalog.len() {
            0 => Err(PlayerError::EmptyCatalog.into()),
            count => Ok(count),
        }
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        self.state.elapsed_seconds = seconds;
        self.primitive.set_current_time(seconds)
    }

    // A play command that could not be dispatched leaves nothing playing.
    fn command_play(&mut self) -> Result<()> {
        if let Err(e) = self.primitive.play() {
            self.state.is_playing = false;
            return Err(e);
        }
        Ok(())
    }

    fn change_track(&mut self, index: usize) -> Result<()> {
        self.state.current_index = index;
        self.state.is_playing = true;
        self.state.elapsed_seconds = 0.0;
        self.state.duration_seconds = 0.0;
        self.last_failure = None;

        if let Some(track) = self.current_track() {
            info!(index, key = %track.key, title = %track.title, artwork = track.artwork(), "Track changed");
        }

        self.resubscribe_if_stale()?;
        self.load_current()
    }

    fn load_current(&mut self) -> Result<()> {
        let Some(url) = self.current_track().map(|t| t.song_url.clone()) else {
            return Ok(());
        };

        if let Err(e) = self.primitive.set_source(&url) {
            self.state.is_playing = false;
            return Err(e);
        }

        if self.state.is_playing {
            self.command_play()?;
        }

        Ok(())
    }

    fn resubscribe_if_stale(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            return Ok(());
        }

        let key = (self.state.current_index, self.state.repeat_mode);
        if self.subscription.is_some() && self.subscribed_for == Some(key) {
            return Ok(());
        }

        // The old subscription must be gone before the new one exists
        drop(self.subscription.take());
        self.subscribed_for = None;

        let subscription = self.primitive.subscribe()?;
        debug!(id = %subscription.id(), index = key.0, repeat_mode = ?key.1, "Subscribed to playback signals");
        self.subscription = Some(subscription);
        self.subscribed_for = Some(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use proptest::prelude::*;

    use super::*;
    use crate::{
        model::track,
        playback::testing::{Command, FakePrimitive, Log},
    };


    fn catalog(len: u32) -> Catalog {
        Catalog::new((0..len).map(|n| track(n, &format!("t{n}"), "s", "g")).collect())
    }

    fn controller_with(len: u32, primitive: FakePrimitive) -> (PlaybackController<FakePrimitive>, Log) {
        let log = Rc::clone(&primitive.log);
        let controller =
            PlaybackController::with_rng(catalog(len), primitive, 1.0, SmallRng::seed_from_u64(7))
                .unwrap();
        (controller, log)
    }

    fn controller(len: u32) -> (PlaybackController<FakePrimitive>, Log) {
        controller_with(len, FakePrimitive::default())
    }

    fn live_id<P: PlaybackPrimitive>(controller: &PlaybackController<P>) -> SubscriptionId {
        controller.subscription.as_ref().map(Subscription::id).unwrap()
    }

    fn is_empty_catalog(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<PlayerError>(), Some(PlayerError::EmptyCatalog))
    }

    #[test]
    fn starts_paused_on_first_track_with_source_loaded() {
        let (controller, log) = controller(3);

        assert_eq!(controller.state().current_index, 0);
        assert!(!controller.state().is_playing);
        assert_eq!(
            *log.borrow(),
            vec![
                Command::Subscribe(SubscriptionId(1)),
                Command::SetSource("https://example.com/0.mp3".to_string()),
            ]
        );
    }

    #[test]
    fn toggle_play_pause_commands_the_primitive() {
        let (mut controller, log) = controller(3);
        log.borrow_mut().clear();

        controller.toggle_play_pause().unwrap();
        assert!(controller.state().is_playing);
        controller.toggle_play_pause().unwrap();
        assert!(!controller.state().is_playing);

        assert_eq!(*log.borrow(), vec![Command::Play, Command::Pause]);
    }

    #[test]
    fn rejected_play_leaves_player_stopped() {
        let primitive = FakePrimitive {
            reject_play: true,
            ..FakePrimitive::default()
        };
        let (mut controller, _log) = controller_with(3, primitive);

        assert!(controller.toggle_play_pause().is_err());
        assert!(!controller.state().is_playing);
    }

    #[test]
    fn next_wraps_to_first_and_previous_wraps_to_last() {
        let (mut controller, _log) = controller(3);

        controller.previous().unwrap();
        assert_eq!(controller.state().current_index, 2);

        controller.next().unwrap();
        assert_eq!(controller.state().current_index, 0);
    }

    #[test]
    fn advancing_resumes_playback_and_loads_the_source() {
        let (mut controller, log) = controller(3);
        log.borrow_mut().clear();

        controller.next().unwrap();

        assert!(controller.state().is_playing);
        assert_eq!(
            *log.borrow(),
            vec![
                Command::Unsubscribe(SubscriptionId(1)),
                Command::Subscribe(SubscriptionId(2)),
                Command::SetSource("https://example.com/1.mp3".to_string()),
                Command::Play,
            ]
        );
    }

    #[test]
    fn shuffled_next_stays_within_the_catalog() {
        let (mut controller, _log) = controller(4);
        controller.toggle_shuffle();

        for _ in 0..50 {
            controller.next().unwrap();
            assert!(controller.state().current_index < 4);
            assert!(controller.state().is_playing);
        }
    }

    #[test]
    fn new_loads_the_first_track_paused() {
        let primitive = FakePrimitive::default();
        let log = Rc::clone(&primitive.log);

        let mut controller = PlaybackController::new(catalog(3), primitive, 0.5).unwrap();

        assert_eq!(controller.state().current_index, 0);
        assert!(!controller.state().is_playing);
        assert_eq!(
            *log.borrow(),
            vec![
                Command::Subscribe(SubscriptionId(1)),
                Command::SetSource("https://example.com/0.mp3".to_string()),
            ]
        );

        controller.toggle_shuffle();
        controller.next().unwrap();
        assert!(controller.state().current_index < 3);
    }

    #[test]
    fn shuffled_next_can_restart_the_current_track() {
        let (mut controller, log) = controller(2);
        controller.toggle_shuffle();

        let mut restarted = false;
        for _ in 0..200 {
            let before = controller.state().current_index;
            log.borrow_mut().clear();
            controller.next().unwrap();
            if controller.state().current_index == before {
                let url = format!("https://example.com/{before}.mp3");
                assert_eq!(*log.borrow(), vec![Command::SetSource(url), Command::Play]);
                restarted = true;
                break;
            }
        }

        assert!(restarted);
        assert!(controller.state().is_playing);
        assert_eq!(controller.state().elapsed_seconds, 0.0);
    }

    #[test]
    fn shuffle_toggle_keeps_the_current_track() {
        let (mut controller, _log) = controller(4);
        controller.select_track(2).unwrap();

        controller.toggle_shuffle();
        assert!(controller.state().is_shuffled);
        assert_eq!(controller.state().current_index, 2);
    }

    #[test]
    fn select_track_starts_playback() {
        let (mut controller, _log) = controller(3);

        controller.select_track(2).unwrap();

        assert_eq!(controller.state().current_index, 2);
        assert!(controller.state().is_playing);
        assert!(controller.is_current(TrackId(2)));
    }

    #[test]
    fn select_track_out_of_range_is_rejected() {
        let (mut controller, _log) = controller(3);

        let err = controller.select_track(3).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PlayerError>(),
            Some(PlayerError::TrackOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(controller.state().current_index, 0);
    }

    #[test]
    fn repeat_mode_cycles_back_to_off_after_three_steps() {
        let (mut controller, _log) = controller(3);

        controller.cycle_repeat_mode().unwrap();
        assert_eq!(controller.state().repeat_mode, RepeatMode::RepeatAll);
        controller.cycle_repeat_mode().unwrap();
        assert_eq!(controller.state().repeat_mode, RepeatMode::RepeatOne);
        controller.cycle_repeat_mode().unwrap();
        assert_eq!(controller.state().repeat_mode, RepeatMode::Off);
    }

    #[test]
    fn repeat_change_replaces_the_subscription() {
        let (mut controller, log) = controller(3);
        log.borrow_mut().clear();

        controller.cycle_repeat_mode().unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Command::Unsubscribe(SubscriptionId(1)),
                Command::Subscribe(SubscriptionId(2)),
            ]
        );
    }

    #[test]
    fn signals_update_elapsed_and_duration() {
        let (mut controller, _log) = controller(3);
        let id = live_id(&controller);

        controller.handle_signal(id, PlaybackSignal::DurationKnown(200.0)).unwrap();
        controller.handle_signal(id, PlaybackSignal::TimeProgressed(50.0)).unwrap();

        assert_eq!(controller.state().duration_seconds, 200.0);
        assert_eq!(controller.state().elapsed_seconds, 50.0);
        assert_eq!(controller.state().progress(), 0.25);
    }

    #[test]
    fn unknown_duration_is_ignored() {
        let (mut controller, _log) = controller(3);
        let id = live_id(&controller);

        controller.handle_signal(id, PlaybackSignal::DurationKnown(f64::NAN)).unwrap();
        assert_eq!(controller.state().duration_seconds, 0.0);
        assert_eq!(controller.state().progress(), 0.0);
    }

    #[test]
    fn signals_from_a_released_subscription_are_ignored() {
        let (mut controller, _log) = controller(3);
        let stale = live_id(&controller);
        controller.next().unwrap();

        controller.handle_signal(stale, PlaybackSignal::TimeProgressed(42.0)).unwrap();
        controller.handle_signal(stale, PlaybackSignal::Ended).unwrap();

        assert_eq!(controller.state().current_index, 1);
        assert_eq!(controller.state().elapsed_seconds, 0.0);
    }

    #[test]
    fn ended_on_last_track_without_repeat_stops() {
        let (mut controller, _log) = controller(3);
        controller.select_track(2).unwrap();
        let id = live_id(&controller);

        controller.handle_signal(id, PlaybackSignal::Ended).unwrap();

        assert!(!controller.state().is_playing);
        assert_eq!(controller.state().current_index, 2);
    }

    #[test]
    fn ended_before_last_track_advances() {
        let (mut controller, _log) = controller(3);
        controller.select_track(0).unwrap();
        let id = live_id(&controller);

        controller.handle_signal(id, PlaybackSignal::Ended).unwrap();

        assert!(controller.state().is_playing);
        assert_eq!(controller.state().current_index, 1);
    }

    #[test]
    fn ended_on_last_track_with_repeat_all_wraps() {
        let (mut controller, _log) = controller(3);
        controller.select_track(2).unwrap();
        controller.cycle_repeat_mode().unwrap();
        let id = live_id(&controller);

        controller.handle_signal(id, PlaybackSignal::Ended).unwrap();

        assert!(controller.state().is_playing);
        assert_eq!(controller.state().current_index, 0);
    }

    #[test]
    fn ended_with_repeat_one_replays_the_same_track() {
        let (mut controller, log) = controller(3);
        controller.select_track(1).unwrap();
        controller.cycle_repeat_mode().unwrap();
        controller.cycle_repeat_mode().unwrap();
        let id = live_id(&controller);
        log.borrow_mut().clear();

        controller.handle_signal(id, PlaybackSignal::Ended).unwrap();

        assert_eq!(controller.state().current_index, 1);
        assert_eq!(
            *log.borrow(),
            vec![Command::SetCurrentTime(0.0), Command::Play]
        );
    }

    #[test]
    fn failure_signal_clears_playing() {
        let (mut controller, _log) = controller(3);
        controller.select_track(1).unwrap();
        let id = live_id(&controller);

        controller
            .handle_signal(id, PlaybackSignal::Failed("unreachable".to_string()))
            .unwrap();

        assert!(!controller.state().is_playing);
        assert_eq!(controller.last_failure(), Some("unreachable"));

        controller.next().unwrap();
        assert_eq!(controller.last_failure(), None);
    }

    #[test]
    fn seek_jumps_to_click_fraction_optimistically() {
        let (mut controller, log) = controller(3);
        let id = live_id(&controller);
        controller.handle_signal(id, PlaybackSignal::DurationKnown(120.0)).unwrap();
        log.borrow_mut().clear();

        controller.seek(25.0, 100.0).unwrap();

        assert_eq!(controller.state().elapsed_seconds, 30.0);
        assert_eq!(*log.borrow(), vec![Command::SetCurrentTime(30.0)]);
    }

    #[test]
    fn seek_before_duration_is_known_does_nothing() {
        let (mut controller, log) = controller(3);
        log.borrow_mut().clear();

        controller.seek(25.0, 100.0).unwrap();
        controller.seek_by(5.0).unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn relative_seek_is_clamped() {
        let (mut controller, _log) = controller(3);
        let id = live_id(&controller);
        controller.handle_signal(id, PlaybackSignal::DurationKnown(60.0)).unwrap();
        controller.handle_signal(id, PlaybackSignal::TimeProgressed(58.0)).unwrap();

        controller.seek_by(5.0).unwrap();
        assert_eq!(controller.state().elapsed_seconds, 60.0);

        controller.seek_by(-100.0).unwrap();
        assert_eq!(controller.state().elapsed_seconds, 0.0);
    }

    #[test]
    fn volume_is_clamped_and_deferred_to_observe() {
        let (mut controller, log) = controller(3);
        controller.observe().unwrap();
        log.borrow_mut().clear();

        controller.set_volume(1.5);
        assert_eq!(controller.state().volume, 1.0);
        controller.adjust_volume(-0.25);
        assert!(log.borrow().is_empty());

        controller.observe().unwrap();
        controller.observe().unwrap();
        assert_eq!(*log.borrow(), vec![Command::SetVolume(0.75)]);
    }

    #[test]
    fn empty_catalog_refuses_transport() {
        let (mut controller, log) = controller(0);

        assert!(controller.current_track().is_none());
        assert!(is_empty_catalog(&controller.toggle_play_pause().unwrap_err()));
        assert!(is_empty_catalog(&controller.next().unwrap_err()));
        assert!(is_empty_catalog(&controller.previous().unwrap_err()));
        assert!(is_empty_catalog(&controller.select_track(0).unwrap_err()));
        assert!(is_empty_catalog(&controller.seek(1.0, 2.0).unwrap_err()));
        assert!(controller.cycle_repeat_mode().is_ok());
        assert!(log.borrow().is_empty());
    }

    proptest! {
        #[test]
        fn previous_undoes_next(len in 1u32..20, start in 0usize..20) {
            let (mut controller, _log) = controller(len);
            let start = start % len as usize;
            controller.select_track(start).unwrap();

            controller.next().unwrap();
            controller.previous().unwrap();

            prop_assert_eq!(controller.state().current_index, start);
        }

        #[test]
        fn repeat_mode_has_period_three(steps in 0usize..30) {
            let mut mode = RepeatMode::Off;
            for _ in 0..steps * 3 {
                mode = mode.cycle();
            }
            prop_assert_eq!(mode, RepeatMode::Off);
        }
    }
}
