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

//! Render the transport bar.
//!
//! This module renders the current track, the playback controls, the
//! progress bar and the volume gauge, and records where each clickable part
//! was drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    playback::RepeatMode,
    render::icons::{
        ARTWORK, FAVOURITE, ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_REPEAT, ICON_REPEAT_ONE_DOT,
        ICON_SHUFFLE, ICON_VOLUME, NOT_FAVOURITE,
    },
    theme::Theme,
    util::format::format_time,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum TransportControl {
    Favourite,
    Shuffle,
    Previous,
    PlayPause,
    Next,
    Repeat,
}

/// Where the clickable parts of the transport bar were last drawn.
#[derive(Debug, Default)]
pub(crate) struct TransportAreas {
    pub(crate) controls: Vec<(TransportControl, Rect)>,
    pub(crate) progress: Rect,
    pub(crate) volume: Rect,
}

impl TransportAreas {
    pub(crate) fn control_at(&self, column: u16, row: u16) -> Option<TransportControl> {
        let position = Position::new(column, row);
        self.controls
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(control, _)| *control)
    }
}

/// Renders the transport bar including track info and controls.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner_area);

    app.transport = TransportAreas::default();

    let Some(track) = app.controller.current_track() else {
        let empty = Paragraph::new("No tracks in the catalog").style(Style::default().fg(theme.muted_fg));
        f.render_widget(empty, chunks[0]);
        draw_gauge(f, chunks[2], 0.0, &theme);
        return;
    };

    let state = app.controller.state();
    let is_favourite = app.favourites.contains(track.id);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(0),
            Constraint::Length(26),
        ])
        .split(chunks[0]);

    // Now playing
    let info = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(top[0]);

    let track_line = Line::from(vec![
        Span::styled(format!("{} ", ARTWORK), Style::default().fg(theme.accent_colour)),
        Span::styled(track.title.as_str(), Style::default().add_modifier(Modifier::BOLD)).fg(theme.card_title_fg),
        Span::raw("  "),
        Span::styled(track.singer.as_str(), Style::default().fg(theme.card_singer_fg)),
    ]);
    f.render_widget(Paragraph::new(track_line), info[0]);

    let heart = if is_favourite {
        Span::styled(FAVOURITE, Style::default().fg(theme.accent_colour))
    } else {
        Span::styled(NOT_FAVOURITE, Style::default().fg(theme.muted_fg))
    };
    f.render_widget(Paragraph::new(heart).alignment(Alignment::Center), info[1]);
    app.transport.controls.push((TransportControl::Favourite, info[1]));

    // Controls
    let control_areas = Layout::horizontal([Constraint::Length(3); 5])
        .flex(Flex::Center)
        .spacing(1)
        .split(top[1]);

    let toggle_style = |on: bool| {
        if on {
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted_fg)
        }
    };

    let repeat = match state.repeat_mode {
        RepeatMode::RepeatOne => format!("{}{}", ICON_REPEAT, ICON_REPEAT_ONE_DOT),
        _ => ICON_REPEAT.to_string(),
    };

    let controls = [
        (TransportControl::Shuffle, Span::styled(ICON_SHUFFLE, toggle_style(state.is_shuffled))),
        (TransportControl::Previous, Span::styled(ICON_PREV, toggle_style(false))),
        (
            TransportControl::PlayPause,
            Span::styled(
                if state.is_playing { ICON_PAUSE } else { ICON_PLAY },
                Style::default().fg(theme.background_colour).bg(theme.accent_colour),
            ),
        ),
        (TransportControl::Next, Span::styled(ICON_NEXT, toggle_style(false))),
        (
            TransportControl::Repeat,
            Span::styled(repeat, toggle_style(state.repeat_mode != RepeatMode::Off)),
        ),
    ];

    for ((control, span), control_area) in controls.into_iter().zip(control_areas.iter()) {
        f.render_widget(Paragraph::new(span).alignment(Alignment::Center), *control_area);
        app.transport.controls.push((control, *control_area));
    }

    // Volume
    let volume = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(5)])
        .split(top[2]);

    f.render_widget(Paragraph::new(ICON_VOLUME).fg(theme.muted_fg), volume[0]);
    draw_gauge(f, volume[1], state.volume, &theme);
    app.transport.volume = volume[1];

    let volume_label = Paragraph::new(format!("{:>3}%", (state.volume * 100.0).round() as u16))
        .alignment(Alignment::Right)
        .fg(theme.muted_fg);
    f.render_widget(volume_label, volume[2]);

    // Progress
    let progress = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(6), Constraint::Min(0), Constraint::Length(6)])
        .split(chunks[2]);

    let elapsed = Paragraph::new(format_time(state.elapsed_seconds))
        .alignment(Alignment::Left)
        .fg(theme.muted_fg);
    f.render_widget(elapsed, progress[0]);

    draw_gauge(f, progress[1], state.progress(), &theme);
    app.transport.progress = progress[1];

    let duration = Paragraph::new(format_time(state.duration_seconds))
        .alignment(Alignment::Right)
        .fg(theme.muted_fg);
    f.render_widget(duration, progress[2]);
}

fn draw_gauge(f: &mut Frame, area: Rect, ratio: f64, theme: &Theme) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(ratio.clamp(0.0, 1.0))
        .label("")
        .use_unicode(true);
    f.render_widget(gauge, area);
}
