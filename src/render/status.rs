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

//! Render the status line.
//!
//! Shows the most recent problem reported by the player or an action, and
//! otherwise a short summary of the key bindings.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const KEY_HELP: [(&str, &str); 8] = [
    ("space", "play"),
    ("n/p", "next/prev"),
    ("s", "shuffle"),
    ("r", "repeat"),
    ("f", "favourite"),
    ("/", "search"),
    ("1-3", "tabs"),
    ("q", "quit"),
];

const SEARCH_HELP: [(&str, &str); 2] = [("type", "to filter"), ("esc/enter", "done")];

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let message = app.status.as_deref().or_else(|| app.controller.last_failure());

    let help: &[(&str, &str)] = if app.search.is_active() { &SEARCH_HELP } else { &KEY_HELP };

    let line = match message {
        Some(message) => Line::from(Span::styled(message, Style::default().fg(app.theme.error_fg))),
        None => {
            let spans = help.iter().flat_map(|(key, action)| {
                [
                    Span::styled(*key, Style::default().fg(app.theme.accent_colour)),
                    Span::styled(format!(" {}  ", action), Style::default().fg(app.theme.muted_fg)),
                ]
            });
            Line::from(spans.collect::<Vec<_>>())
        }
    };

    f.render_widget(Paragraph::new(line), container[0]);
}
