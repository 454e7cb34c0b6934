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

use anyhow::Result;
use tracing::debug;

use crate::{
    App,
    components::TrackGridAction,
    model::{TrackId, filter::Tab},
    playback::{PlaybackController, primitive::PlaybackPrimitive},
};

pub(super) fn handle_grid_action(app: &mut App, action: TrackGridAction) -> Result<()> {
    match action {
        TrackGridAction::Activate(id) => activate_track(&mut app.controller, id),
        TrackGridAction::ToggleFavourite(id) => {
            toggle_favourite(app, id);
            Ok(())
        }
    }
}

/// Plays a track, or toggles play/pause if it is the current track.
pub(super) fn activate_track<P: PlaybackPrimitive>(controller: &mut PlaybackController<P>, id: TrackId) -> Result<()> {
    if controller.is_current(id) {
        return controller.toggle_play_pause();
    }

    match controller.catalog().position_of(id) {
        Some(index) => controller.select_track(index),
        None => Ok(()),
    }
}

pub(super) fn toggle_favourite(app: &mut App, id: TrackId) {
    let is_favourite = app.favourites.toggle(id);
    debug!(%id, is_favourite, "Favourite toggled");
    clamp_grid(app);
}

pub(super) fn toggle_current_favourite(app: &mut App) {
    if let Some(id) = app.controller.current_track().map(|t| t.id) {
        toggle_favourite(app, id);
    }
}

pub(super) fn set_tab(app: &mut App, tab: Tab) {
    if app.filter.active_tab != tab {
        debug!(?tab, "Tab changed");
        app.filter.active_tab = tab;
        clamp_grid(app);
    }
}

/// Copies the text of the search box into the view filter.
pub(super) fn sync_search_term(app: &mut App) {
    if app.filter.search_term != app.search.value() {
        app.filter.search_term = app.search.value().to_string();
        clamp_grid(app);
    }
}

fn clamp_grid(app: &mut App) {
    let len = app.visible_tracks().len();
    app.track_grid.clamp_selection(len);
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::{
        model::{catalog::Catalog, track},
        playback::testing::{Command, FakePrimitive, Log},
    };

    fn controller() -> (PlaybackController<FakePrimitive>, Log) {
        let primitive = FakePrimitive::default();
        let log = Rc::clone(&primitive.log);
        let catalog = Catalog::new(vec![
            track(0, "Blue in Green", "Miles Davis", "Jazz"),
            track(1, "Paranoid Android", "Radiohead", "Rock"),
            track(2, "Teardrop", "Massive Attack", "Trip Hop"),
        ]);
        let controller = PlaybackController::with_rng(catalog, primitive, 1.0, SmallRng::seed_from_u64(1)).unwrap();
        log.borrow_mut().clear();
        (controller, log)
    }

    #[test]
    fn activating_another_card_plays_it() {
        let (mut controller, log) = controller();

        activate_track(&mut controller, TrackId(2)).unwrap();

        assert_eq!(controller.state().current_index, 2);
        assert!(controller.state().is_playing);
        assert!(log.borrow().contains(&Command::SetSource("https://example.com/2.mp3".to_string())));
        assert_eq!(log.borrow().last(), Some(&Command::Play));
    }

    #[test]
    fn activating_the_current_card_toggles_play_pause() {
        let (mut controller, log) = controller();

        activate_track(&mut controller, TrackId(0)).unwrap();
        assert!(controller.state().is_playing);
        assert_eq!(*log.borrow(), vec![Command::Play]);

        activate_track(&mut controller, TrackId(0)).unwrap();
        assert!(!controller.state().is_playing);
        assert_eq!(*log.borrow(), vec![Command::Play, Command::Pause]);
        assert_eq!(controller.state().current_index, 0);
    }

    #[test]
    fn activating_an_unknown_card_does_nothing() {
        let (mut controller, log) = controller();

        activate_track(&mut controller, TrackId(9)).unwrap();

        assert_eq!(controller.state().current_index, 0);
        assert!(!controller.state().is_playing);
        assert!(log.borrow().is_empty());
    }
}
