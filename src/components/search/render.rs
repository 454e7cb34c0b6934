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

//! Render the search box, its text and the cursor while it has focus.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::{components::SearchBox, theme::Theme};

const PLACEHOLDER: &str = "Search songs...";

impl SearchBox {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.area = area;

        let border_colour = if self.is_active {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour));
        let inner = block.inner(area);

        let width = usize::from(inner.width.max(1));
        let scroll = self.input.visual_scroll(width);

        let text = if self.input.value().is_empty() && !self.is_active {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.muted_fg))
        } else {
            Paragraph::new(self.input.value())
                .style(Style::default().fg(theme.card_title_fg))
                .scroll((0, scroll as u16))
        };

        f.render_widget(text.block(block), area);

        if self.is_active {
            let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + cursor, inner.y));
        }
    }
}
