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

//! UI rendering logic for the track grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::{
    components::{
        GridContext, TrackGrid,
        track_grid::HEADER_HEIGHT,
    },
    model::Track,
    render::icons::{ARTWORK, FAVOURITE, NOT_FAVOURITE, NOW_PLAYING},
    theme::Theme,
};

impl TrackGrid {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, tracks: &[&Track], ctx: &GridContext, theme: &Theme) {
        self.body_area = Rect {
            y: area.y.saturating_add(HEADER_HEIGHT),
            height: area.height.saturating_sub(HEADER_HEIGHT),
            ..area
        };

        if tracks.is_empty() {
            draw_empty(f, area, theme);
            return;
        }

        let rows = tracks.iter().map(|track| {
            let is_current = ctx.current == Some(track.id);
            let is_favourite = ctx.favourites.contains(track.id);

            let marker = if is_current && ctx.is_playing {
                Line::from(NOW_PLAYING).style(Style::default().fg(theme.accent_colour))
            } else {
                Line::from(ARTWORK).style(Style::default().fg(theme.muted_fg))
            };

            let heart = if is_favourite {
                Line::from(FAVOURITE).style(Style::default().fg(theme.accent_colour))
            } else {
                Line::from(NOT_FAVOURITE).style(Style::default().fg(theme.muted_fg))
            };

            let title_style = if is_current {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.card_title_fg)
            };

            let row = Row::new(vec![
                Cell::from(marker),
                Cell::from(heart),
                Cell::from(Line::from(track.title.as_str()).style(title_style)),
                Cell::from(Line::from(track.singer.as_str()).style(Style::default().fg(theme.card_singer_fg))),
                Cell::from(Line::from(track.genre.as_str()).style(Style::default().fg(theme.card_genre_fg))),
            ]);

            if is_current {
                row.style(Style::default().bg(theme.gauge_track_colour))
            } else {
                row
            }
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Percentage(45),
                Constraint::Percentage(35),
                Constraint::Percentage(20),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Singer"),
                Cell::from("Genre"),
            ])
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.card_title_fg));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

fn draw_empty(f: &mut Frame, area: Rect, theme: &Theme) {
    let [_, message] = Layout::vertical([Constraint::Length(area.height / 3), Constraint::Min(0)]).areas(area);

    let text = vec![
        Line::from("No songs found.").style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("Try adjusting your search or browse different categories.")
            .style(Style::default().fg(theme.muted_fg)),
    ];

    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), message);
}
