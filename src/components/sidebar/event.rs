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

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Position;

use crate::{components::Sidebar, model::filter::Tab};

impl Sidebar {
    /// Returns the tab the user picked with a number key or a click.
    pub(crate) fn process_event(&self, event: &Event) -> Option<Tab> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('1') => Some(Tab::Home),
                KeyCode::Char('2') => Some(Tab::Library),
                KeyCode::Char('3') => Some(Tab::Favourites),
                _ => None,
            },

            Event::Mouse(mouse_event) if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse_event.column, mouse_event.row);
                self.tab_areas
                    .iter()
                    .position(|area| area.contains(position))
                    .map(|i| Tab::ALL[i])
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    use super::*;

    #[test]
    fn number_keys_pick_tabs() {
        let sidebar = Sidebar::new();
        let key = |c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));

        assert_eq!(sidebar.process_event(&key('1')), Some(Tab::Home));
        assert_eq!(sidebar.process_event(&key('3')), Some(Tab::Favourites));
        assert_eq!(sidebar.process_event(&key('4')), None);
    }

    #[test]
    fn clicks_pick_the_tab_under_the_pointer() {
        let mut sidebar = Sidebar::new();
        sidebar.tab_areas = [Rect::new(0, 2, 20, 1), Rect::new(0, 3, 20, 1), Rect::new(0, 4, 20, 1)];
        let click = |row| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 5,
                row,
                modifiers: KeyModifiers::NONE,
            })
        };

        assert_eq!(sidebar.process_event(&click(3)), Some(Tab::Library));
        assert_eq!(sidebar.process_event(&click(9)), None);
    }
}
