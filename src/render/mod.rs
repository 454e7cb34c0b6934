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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every event. Drawing also records where clickable widgets ended up, so
//! that mouse events can be mapped back onto them.

pub(crate) mod icons;
mod player;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    components::GridContext,
    model::filter::filter_tracks,
    render::{player::draw_player, status::draw_status},
};

pub(crate) use player::{TransportAreas, TransportControl};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the sidebar and the main content (heading,
/// search box and track grid) above the transport bar and a one line
/// status bar.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: main, transport, status
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    // Main layout: sidebar, content
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(outer[0]);

    app.sidebar.draw(f, main[0], app.filter.active_tab, app.favourites.len(), &app.theme);

    draw_content(f, main[1], app);

    draw_player(f, outer[1], app);

    draw_status(f, outer[2], app);
}

fn draw_content(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)])
        .split(chunks[0]);

    let heading = Paragraph::new(app.filter.active_tab.heading())
        .style(Style::default().fg(app.theme.card_title_fg).add_modifier(Modifier::BOLD))
        .block(Block::default().padding(Padding::new(2, 1, 1, 0)));
    f.render_widget(heading, header[0]);

    app.search.draw(f, header[1], &app.theme);

    let grid_block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));
    let grid_area = grid_block.inner(chunks[1]);
    f.render_widget(grid_block, chunks[1]);

    let state = app.controller.state();
    let ctx = GridContext {
        favourites: &app.favourites,
        current: app.controller.current_track().map(|t| t.id),
        is_playing: state.is_playing,
    };
    let visible = filter_tracks(app.controller.catalog().tracks(), &app.favourites, &app.filter);

    app.track_grid.draw(f, grid_area, &visible, &ctx, &app.theme);
}
