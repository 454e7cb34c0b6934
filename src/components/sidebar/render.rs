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

//! UI rendering logic for the sidebar.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::Sidebar, model::filter::Tab, theme::Theme};

const APP_TITLE: &str = "Music Player";

impl Sidebar {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, active_tab: Tab, favourite_count: usize, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::new(1, 1, 1, 0));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [title_area, _, tabs_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        f.render_widget(
            Paragraph::new(APP_TITLE).style(Style::default().fg(theme.card_title_fg).add_modifier(Modifier::BOLD)),
            title_area,
        );

        let rows = Layout::vertical([Constraint::Length(2); Tab::ALL.len()]).split(tabs_area);

        for (i, tab) in Tab::ALL.into_iter().enumerate() {
            // One line per tab, the second row of each slot is spacing
            let slot = Rect { height: rows[i].height.min(1), ..rows[i] };
            self.tab_areas[i] = slot;

            let style = if tab == active_tab {
                Style::default()
                    .fg(theme.accent_colour)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.card_title_fg)
            };

            let label = match tab {
                Tab::Favourites if favourite_count > 0 => format!(" {} {} ({})", i + 1, tab.label(), favourite_count),
                _ => format!(" {} {}", i + 1, tab.label()),
            };
            f.render_widget(Paragraph::new(label).style(style), slot);
        }
    }
}
